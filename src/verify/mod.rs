//! Implements the isotherm search and the regression checks

mod isotherm_locator;
mod reference_record;
mod regression_check;
mod scenario;
pub use crate::verify::isotherm_locator::*;
pub use crate::verify::reference_record::*;
pub use crate::verify::regression_check::*;
pub use crate::verify::scenario::*;

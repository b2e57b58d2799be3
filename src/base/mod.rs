//! Implements the base structures such as the benchmark configuration and the errors

mod config;
mod constants;
mod errors;
mod layout;
mod phase;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::errors::*;
pub use crate::base::layout::*;
pub use crate::base::phase::*;

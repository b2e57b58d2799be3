//! Implements the field representation and the point queries (probes)

mod grid;
mod nodal_field;
mod probe;
mod probe_line;
mod sample;
pub use crate::field::grid::*;
pub use crate::field::nodal_field::*;
pub use crate::field::probe::*;
pub use crate::field::probe_line::*;
pub use crate::field::sample::*;

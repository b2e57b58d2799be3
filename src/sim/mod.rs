//! Implements the interface to simulation engines and their results

mod engine;
mod result;
mod snapshot_engine;
pub use crate::sim::engine::*;
pub use crate::sim::result::*;
pub use crate::sim::snapshot_engine::*;

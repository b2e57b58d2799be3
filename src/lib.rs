//! Regression checks for convection-coupled melting (phase-change) benchmarks
//!
//! A benchmark scenario is run through a [sim::SimulationEngine]; the final field is then
//! probed along a line to locate the phase-change interface (PCI), i.e., the isotherm at the
//! regularization central temperature, and the located coordinate is compared against a
//! recorded reference value.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod field;
pub mod prelude;
pub mod sim;
pub mod verify;

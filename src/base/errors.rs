use crate::StrError;
use thiserror::Error;

/// Defines the errors raised while probing fields, locating isotherms, and verifying scenarios
///
/// None of these errors is recovered locally; they propagate up to the caller (usually a test).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VerifyError {
    /// The query point lies outside the domain of the field
    #[error("point {point:?} is outside the domain")]
    OutOfDomain { point: Vec<f64> },

    /// The number of coordinates does not match the space dimension
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The root search did not meet the tolerance
    #[error("isotherm search failed to converge after {iterations} iterations (x = {x:?}, |f| = {residual:e}): {reason}")]
    NonConvergence {
        iterations: usize,
        x: f64,
        residual: f64,
        reason: &'static str,
    },

    /// The located coordinate differs from the reference beyond the tolerance
    #[error("regression mismatch: located {actual:?}, expected {expected:?} ± {tolerance:e}")]
    RegressionMismatch { actual: f64, expected: f64, tolerance: f64 },

    /// The external simulation failed to reach its end time
    #[error("simulation failed: {0}")]
    SimulationFailure(String),

    /// The field layout has no component with the given name
    #[error("unknown field component {0:?}")]
    UnknownField(String),

    /// The simulation result has not been finalized yet
    #[error("the simulation result is not finalized")]
    NotFinalized,

    /// The regression check has already reached a terminal state
    #[error("the regression check has already finished")]
    AlreadyFinished,

    /// Invalid configuration or input data
    #[error("{0}")]
    Config(StrError),
}

impl From<StrError> for VerifyError {
    fn from(message: StrError) -> Self {
        VerifyError::Config(message)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

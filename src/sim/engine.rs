use super::SimulationResult;
use crate::base::{BenchmarkConfig, VerifyError};

/// Defines the construct-then-run contract of a simulation engine
///
/// The engine owns the result; callers borrow it for the duration of the verification.
/// `run` blocks until the simulation reaches `config.end_time` or fails.
pub trait SimulationEngine {
    /// Runs the simulation to completion and returns the finalized result
    ///
    /// # Errors
    ///
    /// Returns `SimulationFailure` if the engine cannot reach the end time.
    fn run(&mut self, config: &BenchmarkConfig) -> Result<&SimulationResult, VerifyError>;
}

/// Checks the configuration before running a simulation
pub(crate) fn check_config(config: &BenchmarkConfig) -> Result<(), VerifyError> {
    match config.validate() {
        Some(message) => Err(VerifyError::SimulationFailure(format!("invalid configuration: {}", message))),
        None => Ok(()),
    }
}

use super::{check_config, SimulationEngine, SimulationResult};
use crate::base::{BenchmarkConfig, VerifyError};
use std::path::{Path, PathBuf};

/// Replays the final state recorded by an external solver
///
/// The snapshot is a JSON file written by [SimulationResult::write_json]. Running the
/// engine loads the file and checks that it corresponds to a complete run of the
/// given configuration.
pub struct SnapshotEngine {
    /// Full path of the snapshot file
    path: PathBuf,

    /// Holds the loaded result
    result: Option<SimulationResult>,
}

impl SnapshotEngine {
    /// Allocates a new instance
    pub fn new<P>(path: &P) -> Self
    where
        P: AsRef<Path> + ?Sized,
    {
        SnapshotEngine {
            path: path.as_ref().to_path_buf(),
            result: None,
        }
    }
}

impl SimulationEngine for SnapshotEngine {
    fn run(&mut self, config: &BenchmarkConfig) -> Result<&SimulationResult, VerifyError> {
        check_config(config)?;
        log::info!("loading snapshot {}", self.path.display());
        let result = SimulationResult::read_json(&self.path).map_err(|e| {
            VerifyError::SimulationFailure(format!("cannot load snapshot {}: {}", self.path.display(), e))
        })?;
        if !result.is_finalized() {
            return Err(VerifyError::SimulationFailure(format!(
                "snapshot {} is not finalized ({:?})",
                self.path.display(),
                result.status
            )));
        }
        if result.time < config.end_time * (1.0 - 1e-10) {
            return Err(VerifyError::SimulationFailure(format!(
                "snapshot stopped at t = {:?} before end_time = {:?}",
                result.time, config.end_time
            )));
        }
        if result.field.ndim() != config.ndim() {
            return Err(VerifyError::SimulationFailure(format!(
                "snapshot has ndim = {} but the configuration requires ndim = {}",
                result.field.ndim(),
                config.ndim()
            )));
        }
        log::debug!("snapshot at t = {:?} with {} points", result.time, result.field.grid.npoint());
        Ok(self.result.insert(result))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

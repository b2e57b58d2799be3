use crate::field::NodalField;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Defines the status of a simulation run
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RunStatus {
    /// The time loop has not reached the end time yet
    InProgress,

    /// The time loop reached the end time and the state is final
    Finalized,

    /// The engine failed (e.g., the nonlinear solver diverged)
    Failed,
}

/// Holds the state of a simulation
///
/// The field may only be probed after the result has been finalized; see [crate::field::FieldProbe].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Time of the state
    pub time: f64,

    /// Status of the run
    pub status: RunStatus,

    /// The solution field (e.g., pressure, velocity, temperature)
    pub field: NodalField,
}

impl SimulationResult {
    /// Allocates a new (in-progress) instance at t = 0
    pub fn new(field: NodalField) -> Self {
        SimulationResult {
            time: 0.0,
            status: RunStatus::InProgress,
            field,
        }
    }

    /// Marks the state as final at the given time
    pub fn finalize(&mut self, time: f64) {
        self.time = time;
        self.status = RunStatus::Finalized;
    }

    /// Marks the run as failed
    pub fn fail(&mut self) {
        self.status = RunStatus::Failed;
    }

    /// Returns whether the state is final
    pub fn is_finalized(&self) -> bool {
        self.status == RunStatus::Finalized
    }

    /// Reads a JSON file containing the state data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let result: SimulationResult = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        result.field.check()?;
        Ok(result)
    }

    /// Writes a JSON file with the state data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

//! Makes available common structures needed to run a regression check
//!
//! You may write `use meltcheck::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analytical::StefanMelting;
pub use crate::base::{BenchmarkConfig, FieldLayout, PhaseRegularization, VerifyError, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::base::{PRESSURE, TEMPERATURE, VELOCITY_X, VELOCITY_Y, VELOCITY_Z};
pub use crate::field::{FieldProbe, FieldSample, NodalField, ProbeLine, StructuredGrid};
pub use crate::sim::{RunStatus, SimulationEngine, SimulationResult, SnapshotEngine};
pub use crate::verify::{verify_scenario, CheckState, Crossing, IsothermLocator, ReferenceRecord, RegressionCheck, Scenario};

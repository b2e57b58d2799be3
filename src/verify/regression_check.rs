use super::Scenario;
use crate::base::VerifyError;
use crate::sim::SimulationEngine;

/// Defines the states of a regression check
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckState {
    /// Ready to run
    Configured,

    /// The engine is running or the result is being checked
    Running,

    /// The check passed (terminal)
    Completed,

    /// The check failed (terminal)
    Failed,
}

/// Runs a scenario through a simulation engine and checks the outcome
///
/// The check is all-or-nothing: any error (engine failure, search failure,
/// or tolerance violation) moves the state to [CheckState::Failed].
pub struct RegressionCheck<'a> {
    /// The scenario
    scenario: &'a Scenario,

    /// Current state
    state: CheckState,

    /// Value returned by the scenario strategy (e.g., the PCI coordinate)
    located: Option<f64>,
}

impl<'a> RegressionCheck<'a> {
    /// Allocates a new instance
    pub fn new(scenario: &'a Scenario) -> Self {
        RegressionCheck {
            scenario,
            state: CheckState::Configured,
            located: None,
        }
    }

    /// Returns the current state
    pub fn state(&self) -> CheckState {
        self.state
    }

    /// Returns the located value, if the search succeeded
    ///
    /// The value is also available after a `RegressionMismatch`.
    pub fn located(&self) -> Option<f64> {
        self.located
    }

    /// Runs the simulation and verifies the result
    ///
    /// Returns `AlreadyFinished` if called again after reaching a terminal state.
    pub fn verify(&mut self, engine: &mut dyn SimulationEngine) -> Result<(), VerifyError> {
        if self.state != CheckState::Configured {
            return Err(VerifyError::AlreadyFinished);
        }
        log::info!("{}: running simulation until t = {:?}", self.scenario.name, self.scenario.config.end_time);
        self.state = CheckState::Running;
        match self.run_and_check(engine) {
            Ok(value) => {
                self.located = Some(value);
                self.state = CheckState::Completed;
                log::info!("{}: passed", self.scenario.name);
                Ok(())
            }
            Err(err) => {
                if let VerifyError::RegressionMismatch { actual, .. } = err {
                    self.located = Some(actual);
                }
                self.state = CheckState::Failed;
                log::error!("{}: failed: {}", self.scenario.name, err);
                Err(err)
            }
        }
    }

    /// Runs the engine, guards the finalized state, and applies the strategy
    fn run_and_check(&self, engine: &mut dyn SimulationEngine) -> Result<f64, VerifyError> {
        let result = engine.run(&self.scenario.config)?;
        if !result.is_finalized() {
            return Err(VerifyError::NotFinalized);
        }
        (self.scenario.strategy)(self.scenario, result)
    }
}

/// Runs a scenario through a simulation engine and verifies the result
pub fn verify_scenario(scenario: &Scenario, engine: &mut dyn SimulationEngine) -> Result<(), VerifyError> {
    RegressionCheck::new(scenario).verify(engine)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{verify_scenario, CheckState, RegressionCheck};
    use crate::base::{BenchmarkConfig, FieldLayout, VerifyError};
    use crate::field::{NodalField, StructuredGrid};
    use crate::sim::{SimulationEngine, SimulationResult};
    use crate::verify::Scenario;

    /// Engine returning a linear temperature profile crossing T_r at `front`
    struct LinearFrontEngine {
        front: f64,
        finalize: bool,
        fail: bool,
        result: Option<SimulationResult>,
    }

    impl LinearFrontEngine {
        fn new(front: f64) -> Self {
            LinearFrontEngine {
                front,
                finalize: true,
                fail: false,
                result: None,
            }
        }
    }

    impl SimulationEngine for LinearFrontEngine {
        fn run(&mut self, config: &BenchmarkConfig) -> Result<&SimulationResult, VerifyError> {
            if self.fail {
                return Err(VerifyError::SimulationFailure("nonlinear solver diverged".to_string()));
            }
            let ndim = config.ndim();
            let layout = FieldLayout::pressure_velocity_temperature(ndim);
            let ncell = vec![8; ndim];
            let grid = StructuredGrid::uniform(&config.domain_bounds(), &ncell).unwrap();
            let t_r = config.regularization.central_temperature;
            let front = self.front;
            let field = NodalField::from_fn(layout, grid, |x, v| v[ndim + 1] = t_r + 0.5 * (front - x[0]));
            let mut result = SimulationResult::new(field);
            if self.finalize {
                result.finalize(config.end_time);
            }
            Ok(self.result.insert(result))
        }
    }

    #[test]
    fn verify_works() {
        let scenario = Scenario::octadecane_2d().unwrap();
        let mut engine = LinearFrontEngine::new(0.283);
        let mut check = RegressionCheck::new(&scenario);
        assert_eq!(check.state(), CheckState::Configured);
        check.verify(&mut engine).unwrap();
        assert_eq!(check.state(), CheckState::Completed);
        let x = check.located().unwrap();
        assert!(f64::abs(x - 0.283) < 1e-9);
        assert_eq!(check.verify(&mut engine).err(), Some(VerifyError::AlreadyFinished));
        assert_eq!(check.state(), CheckState::Completed);
    }

    #[test]
    fn verify_works_3d() {
        let scenario = Scenario::octadecane_3d().unwrap();
        let mut engine = LinearFrontEngine::new(0.185);
        verify_scenario(&scenario, &mut engine).unwrap();
    }

    #[test]
    fn verify_captures_mismatch() {
        let scenario = Scenario::octadecane_2d().unwrap();
        let mut engine = LinearFrontEngine::new(0.35);
        let mut check = RegressionCheck::new(&scenario);
        let err = check.verify(&mut engine).err();
        assert!(matches!(err, Some(VerifyError::RegressionMismatch { expected, .. }) if expected == 0.28));
        assert_eq!(check.state(), CheckState::Failed);
        assert!(f64::abs(check.located().unwrap() - 0.35) < 1e-9);
        assert_eq!(check.verify(&mut engine).err(), Some(VerifyError::AlreadyFinished));
    }

    #[test]
    fn verify_captures_engine_failures() {
        let scenario = Scenario::octadecane_2d().unwrap();

        let mut engine = LinearFrontEngine::new(0.28);
        engine.fail = true;
        let mut check = RegressionCheck::new(&scenario);
        assert_eq!(
            check.verify(&mut engine).err(),
            Some(VerifyError::SimulationFailure("nonlinear solver diverged".to_string()))
        );
        assert_eq!(check.state(), CheckState::Failed);
        assert_eq!(check.located(), None);

        let mut engine = LinearFrontEngine::new(0.28);
        engine.finalize = false;
        let mut check = RegressionCheck::new(&scenario);
        assert_eq!(check.verify(&mut engine).err(), Some(VerifyError::NotFinalized));
        assert_eq!(check.state(), CheckState::Failed);
    }

    #[test]
    fn verify_uses_the_scenario_strategy() {
        let mut scenario = Scenario::octadecane_2d().unwrap();
        scenario.strategy = |_, result| Ok(result.time);
        let mut engine = LinearFrontEngine::new(0.9);
        let mut check = RegressionCheck::new(&scenario);
        check.verify(&mut engine).unwrap();
        assert_eq!(check.located(), Some(30.0));
    }
}

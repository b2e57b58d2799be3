use super::{IsothermLocator, ReferenceRecord};
use crate::base::{BenchmarkConfig, VerifyError, OCTADECANE_DEPTH_3D, TEMPERATURE};
use crate::field::{FieldProbe, ProbeLine};
use crate::sim::SimulationResult;
use crate::StrError;

/// Defines the function that checks a finalized result against a scenario
///
/// Returns the verified quantity (e.g., the PCI coordinate).
pub type VerifyStrategy = fn(scenario: &Scenario, result: &SimulationResult) -> Result<f64, VerifyError>;

/// Holds a regression scenario: the benchmark configuration plus how to check its outcome
pub struct Scenario {
    /// Name used in log messages
    pub name: String,

    /// Configuration handed to the simulation engine
    pub config: BenchmarkConfig,

    /// Line along which the isotherm is searched
    pub probe_line: ProbeLine,

    /// Name of the field component (e.g., temperature)
    pub field_name: String,

    /// Value of the isotherm
    pub target_value: f64,

    /// Initial guess of the search
    pub initial_guess: f64,

    /// The recorded reference
    pub reference: ReferenceRecord,

    /// The root finder
    pub locator: IsothermLocator,

    /// The check applied to the finalized result
    pub strategy: VerifyStrategy,
}

impl Scenario {
    /// Returns the 2D octadecane PCM regression scenario
    ///
    /// The reference PCI point (0.278, 0.875) was read from the `T = 0.01` contour
    /// (the regularization central temperature) at `t = 30`, in the upper portion of
    /// the domain where the PCI advances more quickly.
    pub fn octadecane_2d() -> Result<Self, StrError> {
        let mut config = BenchmarkConfig::new();
        config.timestep_size = 10.0;
        config.end_time = 30.0;
        config.quadrature_degree = 8;
        config.initial_mesh_size = vec![1, 1];
        config.initial_hot_wall_refinement_cycles = 6;
        config.adaptive_goal_tolerance = 1e-5;
        config.output_dir.push_str("regression/");
        config.prefix_output_dir_with_tempdir = true;
        let target_value = config.regularization.central_temperature;
        Ok(Scenario {
            name: "ccm_octadecane_pcm_regression".to_string(),
            config,
            probe_line: ProbeLine::along_x(&[0.88])?,
            field_name: TEMPERATURE.to_string(),
            target_value,
            initial_guess: 0.01,
            reference: ReferenceRecord::new(0.28, 1e-2)?,
            locator: IsothermLocator::new(),
            strategy: verify_pci_position,
        })
    }

    /// Returns the 3D octadecane PCM regression scenario
    ///
    /// Shorter run on a coarser mesh; the PCI is probed on the mid-plane z = 0.
    pub fn octadecane_3d() -> Result<Self, StrError> {
        let mut scenario = Scenario::octadecane_2d()?;
        scenario.name = "ccm_octadecane_pcm_3d_regression".to_string();
        let config = &mut scenario.config;
        config.end_time = 10.0;
        config.quadrature_degree = 7;
        config.depth_3d = Some(OCTADECANE_DEPTH_3D);
        config.initial_mesh_size = vec![1, 1, 1];
        config.initial_hot_wall_refinement_cycles = 4;
        config.adaptive_goal_tolerance = 5e-4;
        config.output_dir.push_str("3d/");
        scenario.probe_line = ProbeLine::along_x(&[0.88, 0.0])?;
        scenario.reference = ReferenceRecord::new(0.19, 1e-2)?;
        Ok(scenario)
    }
}

/// Locates the PCI along the probe line and compares it with the reference
pub fn verify_pci_position(scenario: &Scenario, result: &SimulationResult) -> Result<f64, VerifyError> {
    let probe = FieldProbe::new(result)?;
    let x = scenario.locator.locate(
        &scenario.probe_line,
        &scenario.field_name,
        scenario.target_value,
        scenario.initial_guess,
        &probe,
    )?;
    log::info!(
        "{}: PCI at x = {:?} (reference {:?} ± {:e})",
        scenario.name,
        x,
        scenario.reference.expected,
        scenario.reference.tolerance
    );
    scenario.reference.check(x)?;
    Ok(x)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

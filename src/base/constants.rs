/// Defines the directory where the simulation result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/meltcheck/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/meltcheck/test";

/// Defines the output directory of the octadecane benchmark (relative; see [crate::base::BenchmarkConfig])
pub const OCTADECANE_OUT_DIR: &str = "output/ccm_octadecane_pcm_benchmark/";

/// Defines the default tolerance on |f(x)| for the isotherm search
pub const LOCATOR_TOL_RESIDUAL: f64 = 1e-10;

/// Defines the default maximum number of secant iterations
pub const LOCATOR_N_MAX_ITERATIONS: usize = 50;

/// Defines the relative perturbation used to generate the second secant point
pub const LOCATOR_SECANT_EPS: f64 = 1e-4;

/// Defines the relative slack (times the axis extent) accepted when checking the domain bounds
pub const DOMAIN_SLACK: f64 = 1e-12;

/// Defines the filename of the final state written by the engines
pub const FINAL_STATE_FILENAME: &str = "final_state.json";

/// Defines the depth (along z) of the 3D octadecane benchmark
pub const OCTADECANE_DEPTH_3D: f64 = 0.5;

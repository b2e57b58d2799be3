use super::{PhaseRegularization, OCTADECANE_OUT_DIR};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Holds the configuration of a convection-coupled melting benchmark simulation
///
/// The default values correspond to the octadecane phase-change-material (PCM) benchmark:
/// a unit square (or a box with depth `depth_3d`) heated on the left wall (x = 0) and
/// cooled on the right wall (x = 1). The data is handed to the simulation engine, which
/// is responsible for the discretization, the nonlinear solver, and the mesh refinement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Time increment Δt
    pub timestep_size: f64,

    /// Final time
    pub end_time: f64,

    /// Degree of the quadrature rule used by the engine
    pub quadrature_degree: usize,

    /// Depth of the domain along z; None means a 2D simulation
    pub depth_3d: Option<f64>,

    /// Number of cells along each direction of the initial mesh (ndim)
    pub initial_mesh_size: Vec<usize>,

    /// Number of refinement cycles applied near the hot wall before the time loop
    pub initial_hot_wall_refinement_cycles: usize,

    /// Goal tolerance of the adaptive mesh refinement
    pub adaptive_goal_tolerance: f64,

    /// Output directory (relative or absolute)
    pub output_dir: String,

    /// Prefixes the output directory with the system temporary directory
    pub prefix_output_dir_with_tempdir: bool,

    /// Saves the final state to the output directory
    pub save_output: bool,

    /// Temperature of the hot wall (x = 0)
    pub hot_wall_temperature: f64,

    /// Temperature of the cold wall (x = 1); also the initial temperature
    pub cold_wall_temperature: f64,

    /// Rayleigh number
    pub rayleigh_number: f64,

    /// Prandtl number
    pub prandtl_number: f64,

    /// Stefan number
    pub stefan_number: f64,

    /// Dynamic viscosity of the liquid phase
    pub liquid_viscosity: f64,

    /// Dynamic viscosity of the solid phase (penalizes velocity in the solid)
    pub solid_viscosity: f64,

    /// Regularization of the phase change
    pub regularization: PhaseRegularization,
}

impl BenchmarkConfig {
    /// Allocates a new instance with the octadecane benchmark values (2D)
    pub fn new() -> Self {
        BenchmarkConfig {
            timestep_size: 10.0,
            end_time: 30.0,
            quadrature_degree: 8,
            depth_3d: None,
            initial_mesh_size: vec![1, 1],
            initial_hot_wall_refinement_cycles: 6,
            adaptive_goal_tolerance: 1e-5,
            output_dir: OCTADECANE_OUT_DIR.to_string(),
            prefix_output_dir_with_tempdir: false,
            save_output: true,
            hot_wall_temperature: 1.0,
            cold_wall_temperature: -0.01,
            rayleigh_number: 3.27e5,
            prandtl_number: 56.2,
            stefan_number: 0.045,
            liquid_viscosity: 1.0,
            solid_viscosity: 1e8,
            regularization: PhaseRegularization {
                central_temperature: 0.01,
                smoothing: 0.025,
            },
        }
    }

    /// Returns the space dimension
    pub fn ndim(&self) -> usize {
        if self.depth_3d.is_some() {
            3
        } else {
            2
        }
    }

    /// Returns the (min, max) coordinates of the domain along each direction
    ///
    /// The domain is the unit square; in 3D, the depth is centered at z = 0.
    pub fn domain_bounds(&self) -> Vec<(f64, f64)> {
        let mut bounds = vec![(0.0, 1.0), (0.0, 1.0)];
        if let Some(depth) = self.depth_3d {
            bounds.push((-depth / 2.0, depth / 2.0));
        }
        bounds
    }

    /// Returns the output directory, prefixed with the temporary directory if requested
    pub fn resolved_output_dir(&self) -> PathBuf {
        if self.prefix_output_dir_with_tempdir {
            std::env::temp_dir().join(&self.output_dir)
        } else {
            PathBuf::from(&self.output_dir)
        }
    }

    /// Sets the time increment
    pub fn set_timestep_size(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("timestep_size must be > 0.0");
        }
        self.timestep_size = value;
        Ok(self)
    }

    /// Sets the final time
    pub fn set_end_time(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("end_time must be > 0.0");
        }
        self.end_time = value;
        Ok(self)
    }

    /// Sets the quadrature degree
    pub fn set_quadrature_degree(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("quadrature_degree must be ≥ 1");
        }
        self.quadrature_degree = value;
        Ok(self)
    }

    /// Sets the depth of a 3D simulation or None for 2D
    ///
    /// **Note:** The initial mesh size is extended (with 1) or truncated to match the new space dimension.
    pub fn set_depth_3d(&mut self, depth: Option<f64>) -> Result<&mut Self, StrError> {
        if let Some(d) = depth {
            if d <= 0.0 {
                return Err("depth_3d must be > 0.0");
            }
        }
        self.depth_3d = depth;
        let ndim = self.ndim();
        self.initial_mesh_size.resize(ndim, 1);
        Ok(self)
    }

    /// Sets the number of cells along each direction of the initial mesh
    pub fn set_initial_mesh_size(&mut self, size: &[usize]) -> Result<&mut Self, StrError> {
        if size.len() != self.ndim() {
            return Err("initial_mesh_size must have ndim entries");
        }
        if size.iter().any(|n| *n < 1) {
            return Err("initial_mesh_size entries must be ≥ 1");
        }
        self.initial_mesh_size = size.to_vec();
        Ok(self)
    }

    /// Sets the number of refinement cycles near the hot wall
    pub fn set_initial_hot_wall_refinement_cycles(&mut self, value: usize) -> Result<&mut Self, StrError> {
        self.initial_hot_wall_refinement_cycles = value;
        Ok(self)
    }

    /// Sets the goal tolerance of the adaptive mesh refinement
    pub fn set_adaptive_goal_tolerance(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("adaptive_goal_tolerance must be > 0.0");
        }
        self.adaptive_goal_tolerance = value;
        Ok(self)
    }

    /// Sets the output directory
    pub fn set_output_dir(&mut self, dir: &str) -> Result<&mut Self, StrError> {
        if dir.is_empty() {
            return Err("output_dir must not be empty");
        }
        self.output_dir = dir.to_string();
        Ok(self)
    }

    /// Appends a subdirectory to the output directory
    pub fn push_output_subdir(&mut self, subdir: &str) -> Result<&mut Self, StrError> {
        if subdir.is_empty() {
            return Err("output subdirectory must not be empty");
        }
        if !self.output_dir.ends_with('/') {
            self.output_dir.push('/');
        }
        self.output_dir.push_str(subdir);
        Ok(self)
    }

    /// Enables or disables the temporary directory prefix of the output directory
    pub fn set_prefix_output_dir_with_tempdir(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.prefix_output_dir_with_tempdir = flag;
        Ok(self)
    }

    /// Enables or disables saving the final state
    pub fn set_save_output(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.save_output = flag;
        Ok(self)
    }

    /// Sets the hot and cold wall temperatures
    pub fn set_wall_temperatures(&mut self, hot: f64, cold: f64) -> Result<&mut Self, StrError> {
        if hot <= cold {
            return Err("hot wall temperature must be greater than the cold wall temperature");
        }
        self.hot_wall_temperature = hot;
        self.cold_wall_temperature = cold;
        Ok(self)
    }

    /// Sets the Stefan number
    pub fn set_stefan_number(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("stefan_number must be > 0.0");
        }
        self.stefan_number = value;
        Ok(self)
    }

    /// Sets the regularization of the phase change
    pub fn set_regularization(&mut self, central_temperature: f64, smoothing: f64) -> Result<&mut Self, StrError> {
        self.regularization = PhaseRegularization::new(central_temperature, smoothing)?;
        Ok(self)
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.timestep_size <= 0.0 {
            return Some(format!(
                "timestep_size = {:?} is incorrect; it must be > 0.0",
                self.timestep_size
            ));
        }
        if self.end_time <= 0.0 {
            return Some(format!("end_time = {:?} is incorrect; it must be > 0.0", self.end_time));
        }
        if self.initial_mesh_size.len() != self.ndim() {
            return Some(format!(
                "initial_mesh_size = {:?} is incorrect; it must have {} entries",
                self.initial_mesh_size,
                self.ndim()
            ));
        }
        let t_r = self.regularization.central_temperature;
        if t_r <= self.cold_wall_temperature || t_r >= self.hot_wall_temperature {
            return Some(format!(
                "regularization central temperature = {:?} is incorrect; it must be within ({:?}, {:?})",
                t_r, self.cold_wall_temperature, self.hot_wall_temperature
            ));
        }
        if self.regularization.smoothing <= 0.0 {
            return Some(format!(
                "regularization smoothing = {:?} is incorrect; it must be > 0.0",
                self.regularization.smoothing
            ));
        }
        if self.stefan_number <= 0.0 {
            return Some(format!(
                "stefan_number = {:?} is incorrect; it must be > 0.0",
                self.stefan_number
            ));
        }
        None // all good
    }
}

impl fmt::Display for BenchmarkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Benchmark configuration\n")?;
        write!(f, "=======================\n")?;
        write!(f, "timestep_size = {:?}\n", self.timestep_size)?;
        write!(f, "end_time = {:?}\n", self.end_time)?;
        write!(f, "quadrature_degree = {:?}\n", self.quadrature_degree)?;
        write!(f, "depth_3d = {:?}\n", self.depth_3d)?;
        write!(f, "initial_mesh_size = {:?}\n", self.initial_mesh_size)?;
        write!(
            f,
            "initial_hot_wall_refinement_cycles = {:?}\n",
            self.initial_hot_wall_refinement_cycles
        )?;
        write!(f, "adaptive_goal_tolerance = {:?}\n", self.adaptive_goal_tolerance)?;
        write!(f, "output_dir = {:?}\n", self.output_dir)?;
        write!(
            f,
            "prefix_output_dir_with_tempdir = {:?}\n",
            self.prefix_output_dir_with_tempdir
        )?;
        write!(f, "\nPhysical parameters\n")?;
        write!(f, "===================\n")?;
        write!(
            f,
            "wall temperatures (hot, cold) = ({:?}, {:?})\n",
            self.hot_wall_temperature, self.cold_wall_temperature
        )?;
        write!(
            f,
            "Ra, Pr, Ste = {:?}, {:?}, {:?}\n",
            self.rayleigh_number, self.prandtl_number, self.stefan_number
        )?;
        write!(
            f,
            "viscosity (liquid, solid) = ({:?}, {:?})\n",
            self.liquid_viscosity, self.solid_viscosity
        )?;
        write!(
            f,
            "regularization (T_r, r) = ({:?}, {:?})\n",
            self.regularization.central_temperature, self.regularization.smoothing
        )?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::BenchmarkConfig;
    use crate::StrError;

    #[test]
    fn new_works() -> Result<(), StrError> {
        let config = BenchmarkConfig::new();
        assert_eq!(config.ndim(), 2);
        assert_eq!(config.domain_bounds(), vec![(0.0, 1.0), (0.0, 1.0)]);
        assert_eq!(config.validate(), None);
        assert_eq!(
            format!("{}", config),
            "Benchmark configuration\n\
             =======================\n\
             timestep_size = 10.0\n\
             end_time = 30.0\n\
             quadrature_degree = 8\n\
             depth_3d = None\n\
             initial_mesh_size = [1, 1]\n\
             initial_hot_wall_refinement_cycles = 6\n\
             adaptive_goal_tolerance = 1e-5\n\
             output_dir = \"output/ccm_octadecane_pcm_benchmark/\"\n\
             prefix_output_dir_with_tempdir = false\n\
             \n\
             Physical parameters\n\
             ===================\n\
             wall temperatures (hot, cold) = (1.0, -0.01)\n\
             Ra, Pr, Ste = 327000.0, 56.2, 0.045\n\
             viscosity (liquid, solid) = (1.0, 100000000.0)\n\
             regularization (T_r, r) = (0.01, 0.025)\n"
        );
        Ok(())
    }

    #[test]
    fn setters_work() -> Result<(), StrError> {
        let mut config = BenchmarkConfig::new();
        config
            .set_timestep_size(5.0)?
            .set_end_time(10.0)?
            .set_quadrature_degree(7)?
            .set_depth_3d(Some(0.5))?
            .set_initial_hot_wall_refinement_cycles(4)?
            .set_adaptive_goal_tolerance(5e-4)?
            .push_output_subdir("regression/")?
            .push_output_subdir("3d/")?
            .set_prefix_output_dir_with_tempdir(true)?;
        assert_eq!(config.ndim(), 3);
        assert_eq!(config.initial_mesh_size, vec![1, 1, 1]);
        assert_eq!(config.domain_bounds()[2], (-0.25, 0.25));
        assert_eq!(config.output_dir, "output/ccm_octadecane_pcm_benchmark/regression/3d/");
        assert_eq!(
            config.resolved_output_dir(),
            std::env::temp_dir().join("output/ccm_octadecane_pcm_benchmark/regression/3d/")
        );
        config.set_initial_mesh_size(&[2, 2, 1])?;
        config.set_depth_3d(None)?;
        assert_eq!(config.initial_mesh_size, vec![2, 2]);
        assert_eq!(config.validate(), None);
        Ok(())
    }

    #[test]
    fn catch_some_errors() {
        let mut config = BenchmarkConfig::new();
        assert_eq!(config.set_timestep_size(0.0).err(), Some("timestep_size must be > 0.0"));
        assert_eq!(config.set_end_time(-1.0).err(), Some("end_time must be > 0.0"));
        assert_eq!(config.set_quadrature_degree(0).err(), Some("quadrature_degree must be ≥ 1"));
        assert_eq!(config.set_depth_3d(Some(0.0)).err(), Some("depth_3d must be > 0.0"));
        assert_eq!(
            config.set_initial_mesh_size(&[1, 1, 1]).err(),
            Some("initial_mesh_size must have ndim entries")
        );
        assert_eq!(
            config.set_initial_mesh_size(&[1, 0]).err(),
            Some("initial_mesh_size entries must be ≥ 1")
        );
        assert_eq!(
            config.set_adaptive_goal_tolerance(0.0).err(),
            Some("adaptive_goal_tolerance must be > 0.0")
        );
        assert_eq!(config.set_output_dir("").err(), Some("output_dir must not be empty"));
        assert_eq!(
            config.set_wall_temperatures(0.0, 1.0).err(),
            Some("hot wall temperature must be greater than the cold wall temperature")
        );
        assert_eq!(config.set_stefan_number(0.0).err(), Some("stefan_number must be > 0.0"));
        assert_eq!(
            config.set_regularization(0.01, -1.0).err(),
            Some("regularization smoothing must be > 0.0")
        );
    }

    #[test]
    fn validate_captures_errors() {
        let mut config = BenchmarkConfig::new();
        config.end_time = 0.0;
        assert_eq!(
            config.validate(),
            Some("end_time = 0.0 is incorrect; it must be > 0.0".to_string())
        );
        let mut config = BenchmarkConfig::new();
        config.regularization.central_temperature = 2.0;
        assert_eq!(
            config.validate(),
            Some(
                "regularization central temperature = 2.0 is incorrect; it must be within (-0.01, 1.0)"
                    .to_string()
            )
        );
        let mut config = BenchmarkConfig::new();
        config.initial_mesh_size = vec![1];
        assert_eq!(
            config.validate(),
            Some("initial_mesh_size = [1] is incorrect; it must have 2 entries".to_string())
        );
    }
}

use crate::base::{BenchmarkConfig, FieldLayout, VerifyError, FINAL_STATE_FILENAME, TEMPERATURE};
use crate::field::{NodalField, StructuredGrid};
use crate::sim::{check_config, SimulationEngine, SimulationResult};
use crate::StrError;
use russell_lab::math::{erf, PI};
use russell_lab::RootFinder;

/// Analytical melting of a PCM cavity heated from the left wall
///
/// The liquid region follows the one-phase Neumann (Stefan) similarity solution,
/// with the front stretched along the height to mimic the faster advance of the
/// phase-change interface near the top of the cavity, where convection brings hot liquid:
///
/// ```text
///  y ^
///  1 +--------------.------------+
///    |  liquid       \   solid   |
///    |                \          |
///    | T_h             | T_r     | T_c
///    |                 /         |
///  0 +----------------'----------+--> x
///    0              x_f(y)       1
///
/// x_f(y, t) = 2 λ √(κ t) (1 + β y)
///
/// liquid:  T = T_h - (T_h - T_r) erf(λ x / x_f) / erf(λ)     for x ≤ x_f
/// solid:   T = T_r + (T_c - T_r) (x - x_f) / (1 - x_f)       for x > x_f
/// ```
///
/// where `λ` solves `λ exp(λ²) erf(λ) = Ste / √π`, `κ` is the diffusivity, and `β`
/// the enhancement factor. The field is independent of z in 3D. Pressure and
/// velocity are zero.
///
/// This engine stands in for a full convection-coupled solver in tests and examples.
pub struct StefanMelting {
    /// Thermal diffusivity κ > 0
    pub diffusivity: f64,

    /// Enhancement factor β ≥ 0 of the front along y
    pub enhancement: f64,

    /// Number of grid cells along (x, y, z)
    pub ncell: [usize; 3],

    /// Holds the result of the last run
    result: Option<SimulationResult>,
}

impl StefanMelting {
    /// Allocates a new instance
    pub fn new(diffusivity: f64, enhancement: f64) -> Result<Self, StrError> {
        if diffusivity <= 0.0 {
            return Err("diffusivity must be > 0.0");
        }
        if enhancement < 0.0 {
            return Err("enhancement must be ≥ 0.0");
        }
        Ok(StefanMelting {
            diffusivity,
            enhancement,
            ncell: [256, 64, 4],
            result: None,
        })
    }

    /// Sets the number of grid cells along (x, y, z); nz is ignored in 2D
    pub fn set_resolution(&mut self, nx: usize, ny: usize, nz: usize) -> Result<&mut Self, StrError> {
        if nx < 1 || ny < 1 || nz < 1 {
            return Err("the number of cells must be ≥ 1");
        }
        self.ncell = [nx, ny, nz];
        Ok(self)
    }

    /// Calculates the Stefan constant λ given the Stefan number
    pub fn stefan_constant(stefan_number: f64) -> Result<f64, StrError> {
        if stefan_number <= 0.0 {
            return Err("the Stefan number must be > 0.0");
        }
        let rhs = stefan_number / f64::sqrt(PI);
        let args = &mut 0;
        let solver = RootFinder::new();
        let (lambda, _) = solver.brent(1e-8, 5.0, args, |l, _| Ok(l * f64::exp(l * l) * erf(l) - rhs))?;
        Ok(lambda)
    }

    /// Calculates the position of the melting front at height y and time t
    pub fn front_position(&self, lambda: f64, y: f64, t: f64) -> f64 {
        2.0 * lambda * f64::sqrt(self.diffusivity * t) * (1.0 + self.enhancement * y)
    }

    /// Calculates the temperature at (x, y) and time t > 0
    pub fn temperature(&self, config: &BenchmarkConfig, lambda: f64, x: f64, y: f64, t: f64) -> f64 {
        let t_hot = config.hot_wall_temperature;
        let t_cold = config.cold_wall_temperature;
        let t_r = config.regularization.central_temperature;
        let xf = self.front_position(lambda, y, t);
        if x <= xf {
            t_hot - (t_hot - t_r) * erf(lambda * x / xf) / erf(lambda)
        } else {
            t_r + (t_cold - t_r) * (x - xf) / (1.0 - xf)
        }
    }
}

impl SimulationEngine for StefanMelting {
    fn run(&mut self, config: &BenchmarkConfig) -> Result<&SimulationResult, VerifyError> {
        check_config(config)?;
        let lambda = StefanMelting::stefan_constant(config.stefan_number)
            .map_err(|e| VerifyError::SimulationFailure(format!("cannot compute the Stefan constant: {}", e)))?;
        log::info!(
            "running analytical Stefan melting (λ = {:?}) until t = {:?}",
            lambda,
            config.end_time
        );

        // time loop; the front must stay inside the cavity
        let mut t = 0.0;
        let mut step = 0;
        while t < config.end_time {
            let dt = f64::min(config.timestep_size, config.end_time - t);
            t += dt;
            step += 1;
            let top_front = self.front_position(lambda, 1.0, t);
            log::debug!("step {}: t = {:?}, front at the top = {:?}", step, t, top_front);
            if top_front >= 1.0 {
                return Err(VerifyError::SimulationFailure(format!(
                    "the melting front reached the cold wall at t = {:?}",
                    t
                )));
            }
        }
        let t = config.end_time;

        // sample the final field
        let ndim = config.ndim();
        let layout = FieldLayout::pressure_velocity_temperature(ndim);
        let index = layout
            .index_of(TEMPERATURE)
            .ok_or_else(|| VerifyError::UnknownField(TEMPERATURE.to_string()))?;
        let grid = StructuredGrid::uniform(&config.domain_bounds(), &self.ncell[..ndim])?;
        let field = NodalField::from_fn(layout, grid, |x, v| {
            v[index] = self.temperature(config, lambda, x[0], x[1], t);
        });
        let mut result = SimulationResult::new(field);
        result.finalize(t);

        // save output
        if config.save_output {
            let path = config.resolved_output_dir().join(FINAL_STATE_FILENAME);
            result
                .write_json(&path)
                .map_err(|e| VerifyError::SimulationFailure(format!("cannot save {}: {}", path.display(), e)))?;
            log::info!("final state saved to {}", path.display());
        }
        Ok(self.result.insert(result))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

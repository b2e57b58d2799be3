use crate::base::{VerifyError, LOCATOR_N_MAX_ITERATIONS, LOCATOR_SECANT_EPS, LOCATOR_TOL_RESIDUAL};
use crate::field::{FieldProbe, ProbeLine};
use crate::StrError;

/// Holds the outcome of an isotherm search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    /// Coordinate along the probe line where the field crosses the target value
    pub x: f64,

    /// Residual f(x) = value(x) - target
    pub residual: f64,

    /// Number of secant updates
    pub iterations: usize,
}

/// Locates the coordinate where a field component crosses a target value along a probe line
///
/// The search solves `f(x) = value(line.fix(x)) - target = 0` with the secant method,
/// starting from a single initial guess `x0`; the second point is
/// `x1 = x0 (1 + ε) ± ε` with `ε = 1e-4` (the sign follows x0). No derivative is computed.
///
/// The iteration stops when `|f(x)| ≤ tol_residual`.
pub struct IsothermLocator {
    /// Tolerance on |f(x)|
    pub tol_residual: f64,

    /// Maximum number of secant updates
    pub n_max_iterations: usize,
}

impl IsothermLocator {
    /// Allocates a new instance with default tolerance and iteration cap
    pub fn new() -> Self {
        IsothermLocator {
            tol_residual: LOCATOR_TOL_RESIDUAL,
            n_max_iterations: LOCATOR_N_MAX_ITERATIONS,
        }
    }

    /// Sets the tolerance on |f(x)|
    pub fn set_tol_residual(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("tol_residual must be > 0.0");
        }
        self.tol_residual = value;
        Ok(self)
    }

    /// Sets the maximum number of secant updates
    pub fn set_n_max_iterations(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_iterations must be ≥ 1");
        }
        self.n_max_iterations = value;
        Ok(self)
    }

    /// Returns the coordinate where the field component crosses the target value
    ///
    /// See [IsothermLocator::search].
    pub fn locate(
        &self,
        line: &ProbeLine,
        field_name: &str,
        target_value: f64,
        initial_guess: f64,
        probe: &FieldProbe,
    ) -> Result<f64, VerifyError> {
        let crossing = self.search(line, field_name, target_value, initial_guess, probe)?;
        Ok(crossing.x)
    }

    /// Searches for the crossing and returns the coordinate, residual, and number of iterations
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` if the line and the field have different space dimensions
    /// * `UnknownField` if the field has no component named `field_name`
    /// * `OutOfDomain` if the initial guess or an iterate falls outside the domain
    /// * `NonConvergence` if the iteration cap is exceeded or the secant slope vanishes
    pub fn search(
        &self,
        line: &ProbeLine,
        field_name: &str,
        target_value: f64,
        initial_guess: f64,
        probe: &FieldProbe,
    ) -> Result<Crossing, VerifyError> {
        // check input
        if line.ndim() != probe.ndim() {
            return Err(VerifyError::DimensionMismatch {
                expected: probe.ndim(),
                found: line.ndim(),
            });
        }
        let index = probe
            .layout()
            .index_of(field_name)
            .ok_or_else(|| VerifyError::UnknownField(field_name.to_string()))?;
        let (min, max) = probe.bounds()[line.axis()];
        if !(initial_guess >= min && initial_guess <= max) {
            return Err(VerifyError::OutOfDomain {
                point: line.fix(initial_guess),
            });
        }

        // function whose root is the crossing
        let f = |x: f64| -> Result<f64, VerifyError> {
            let sample = probe.evaluate(&line.fix(x))?;
            Ok(sample.values()[index] - target_value)
        };

        // first point
        let mut x0 = initial_guess;
        let mut f0 = f(x0)?;
        if f64::abs(f0) <= self.tol_residual {
            log::debug!("isotherm found at the initial guess x = {:?}", x0);
            return Ok(Crossing {
                x: x0,
                residual: f0,
                iterations: 0,
            });
        }

        // second point (flip the perturbation if it leaves the domain)
        let step = if x0 >= 0.0 {
            x0 * LOCATOR_SECANT_EPS + LOCATOR_SECANT_EPS
        } else {
            x0 * LOCATOR_SECANT_EPS - LOCATOR_SECANT_EPS
        };
        let mut x1 = x0 + step;
        if x1 < min || x1 > max {
            x1 = x0 - step;
        }
        let mut f1 = f(x1)?;

        // secant iterations
        let mut iterations = 0;
        loop {
            if f64::abs(f1) <= self.tol_residual {
                log::debug!(
                    "isotherm {} = {:?} found at x = {:?} after {} iterations",
                    field_name,
                    target_value,
                    x1,
                    iterations
                );
                return Ok(Crossing {
                    x: x1,
                    residual: f1,
                    iterations,
                });
            }
            if iterations == self.n_max_iterations {
                return Err(VerifyError::NonConvergence {
                    iterations,
                    x: x1,
                    residual: f64::abs(f1),
                    reason: "maximum number of iterations reached",
                });
            }
            if f1 == f0 {
                return Err(VerifyError::NonConvergence {
                    iterations,
                    x: x1,
                    residual: f64::abs(f1),
                    reason: "the secant slope vanished",
                });
            }
            let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
            if !x2.is_finite() {
                return Err(VerifyError::NonConvergence {
                    iterations,
                    x: x1,
                    residual: f64::abs(f1),
                    reason: "the secant update is not finite",
                });
            }
            x0 = x1;
            f0 = f1;
            x1 = x2;
            f1 = f(x1)?;
            iterations += 1;
            log::trace!("secant iteration {}: x = {:?}, f = {:e}", iterations, x1, f1);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the regularization of the solid-liquid phase change
///
/// The solid volume fraction is smoothed by
///
/// ```text
/// φ(T) = ½ (1 + tanh((T_r - T) / r))
/// ```
///
/// where `T_r` is the regularization central temperature and `r` the smoothing parameter.
/// The phase-change interface (PCI) is the isotherm `T = T_r`, where `φ = ½`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseRegularization {
    /// Central temperature T_r
    pub central_temperature: f64,

    /// Smoothing parameter r > 0
    pub smoothing: f64,
}

impl PhaseRegularization {
    /// Allocates a new instance
    pub fn new(central_temperature: f64, smoothing: f64) -> Result<Self, StrError> {
        if smoothing <= 0.0 {
            return Err("regularization smoothing must be > 0.0");
        }
        Ok(PhaseRegularization {
            central_temperature,
            smoothing,
        })
    }

    /// Returns the solid volume fraction φ(T) in [0, 1]
    pub fn solid_fraction(&self, temperature: f64) -> f64 {
        0.5 * (1.0 + f64::tanh((self.central_temperature - temperature) / self.smoothing))
    }

    /// Returns the liquid volume fraction 1 - φ(T)
    pub fn liquid_fraction(&self, temperature: f64) -> f64 {
        1.0 - self.solid_fraction(temperature)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

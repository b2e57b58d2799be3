use super::FieldSample;
use crate::base::{FieldLayout, VerifyError};
use crate::sim::SimulationResult;

/// Evaluates the field of a finalized simulation result at arbitrary points
///
/// The probe only reads the result; many probes may share the same result.
pub struct FieldProbe<'a> {
    result: &'a SimulationResult,
}

impl<'a> FieldProbe<'a> {
    /// Allocates a new instance
    ///
    /// Returns `NotFinalized` if the simulation is still running or has failed.
    pub fn new(result: &'a SimulationResult) -> Result<Self, VerifyError> {
        if !result.is_finalized() {
            return Err(VerifyError::NotFinalized);
        }
        Ok(FieldProbe { result })
    }

    /// Returns the space dimension
    pub fn ndim(&self) -> usize {
        self.result.field.ndim()
    }

    /// Returns the names of the field components
    pub fn layout(&self) -> &'a FieldLayout {
        &self.result.field.layout
    }

    /// Returns the (min, max) coordinates of the domain along each direction
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        self.result.field.grid.bounds()
    }

    /// Evaluates all components at a point
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` if the number of coordinates differs from ndim
    /// * `OutOfDomain` if the point lies outside the mesh
    pub fn evaluate(&self, point: &[f64]) -> Result<FieldSample<'a>, VerifyError> {
        let values = self.result.field.interpolate(point)?;
        Ok(FieldSample::new(&self.result.field.layout, values))
    }

    /// Evaluates a single component, given by name, at a point
    pub fn evaluate_named(&self, point: &[f64], name: &str) -> Result<f64, VerifyError> {
        self.evaluate(point)?.named(name)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

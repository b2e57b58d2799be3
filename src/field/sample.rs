use crate::base::{FieldLayout, VerifyError};
use russell_lab::Vector;

/// Holds the field values sampled at a point
pub struct FieldSample<'a> {
    /// Names of the components
    layout: &'a FieldLayout,

    /// Values (n_component)
    values: Vector,
}

impl<'a> FieldSample<'a> {
    /// Allocates a new instance
    pub(crate) fn new(layout: &'a FieldLayout, values: Vector) -> Self {
        FieldSample { layout, values }
    }

    /// Returns all values in layout order
    pub fn values(&self) -> &Vector {
        &self.values
    }

    /// Returns the value of a component by position
    pub fn get(&self, component: usize) -> Option<f64> {
        if component < self.values.dim() {
            Some(self.values[component])
        } else {
            None
        }
    }

    /// Returns the value of a component by name
    pub fn named(&self, name: &str) -> Result<f64, VerifyError> {
        let index = self
            .layout
            .index_of(name)
            .ok_or_else(|| VerifyError::UnknownField(name.to_string()))?;
        Ok(self.values[index])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

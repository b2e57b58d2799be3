use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the name of the pressure component
pub const PRESSURE: &str = "pressure";

/// Defines the name of the velocity component along x
pub const VELOCITY_X: &str = "velocity_x";

/// Defines the name of the velocity component along y
pub const VELOCITY_Y: &str = "velocity_y";

/// Defines the name of the velocity component along z
pub const VELOCITY_Z: &str = "velocity_z";

/// Defines the name of the temperature component
pub const TEMPERATURE: &str = "temperature";

/// Maps field-component names to their position in a sample
///
/// The mixed pressure-velocity-temperature solution of a melting simulation has
/// different positions for the temperature in 2D (index 3) and 3D (index 4);
/// looking components up by name avoids index-mismatch bugs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    names: Vec<String>,
}

impl FieldLayout {
    /// Allocates a new instance
    ///
    /// Returns an error if there are no names or if a name is repeated.
    pub fn new(names: &[&str]) -> Result<Self, StrError> {
        if names.is_empty() {
            return Err("field layout must have at least one component");
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err("field layout must not have repeated names");
            }
        }
        Ok(FieldLayout {
            names: names.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Returns the layout (p, u_x, u_y, T) for 2D or (p, u_x, u_y, u_z, T) for 3D
    pub fn pressure_velocity_temperature(ndim: usize) -> Self {
        let names = if ndim == 3 {
            vec![PRESSURE, VELOCITY_X, VELOCITY_Y, VELOCITY_Z, TEMPERATURE]
        } else {
            vec![PRESSURE, VELOCITY_X, VELOCITY_Y, TEMPERATURE]
        };
        FieldLayout {
            names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns the position of a component
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Returns the number of components
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns the component names
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use crate::StrError;

/// Defines a straight line parallel to one coordinate axis
///
/// The coordinate along `axis` varies; all the others are held fixed.
/// For example, the horizontal line `y = 0.88` in 2D is `ProbeLine::along_x(&[0.88])`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeLine {
    /// The varying axis
    axis: usize,

    /// Point on the line with zero at the varying axis (ndim)
    anchor: Vec<f64>,
}

impl ProbeLine {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `ndim` -- space dimension (2 or 3)
    /// * `axis` -- the varying axis (0, 1, or 2)
    /// * `transverse` -- the fixed coordinates, in axis order, skipping `axis` (ndim - 1)
    pub fn new(ndim: usize, axis: usize, transverse: &[f64]) -> Result<Self, StrError> {
        if ndim < 2 || ndim > 3 {
            return Err("ndim must be 2 or 3");
        }
        if axis >= ndim {
            return Err("axis must be smaller than ndim");
        }
        if transverse.len() != ndim - 1 {
            return Err("the number of transverse coordinates must be ndim - 1");
        }
        let mut anchor = transverse.to_vec();
        anchor.insert(axis, 0.0);
        Ok(ProbeLine { axis, anchor })
    }

    /// Allocates a line along x with fixed (y) in 2D or (y, z) in 3D
    pub fn along_x(transverse: &[f64]) -> Result<Self, StrError> {
        ProbeLine::new(transverse.len() + 1, 0, transverse)
    }

    /// Returns the space dimension
    pub fn ndim(&self) -> usize {
        self.anchor.len()
    }

    /// Returns the varying axis
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Returns the point on the line whose varying coordinate equals `x`
    pub fn fix(&self, x: f64) -> Vec<f64> {
        let mut point = self.anchor.clone();
        point[self.axis] = x;
        point
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use crate::base::{VerifyError, DOMAIN_SLACK};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds a rectilinear grid in 2D or 3D
///
/// Points are numbered with the first axis running fastest: `p = i + nx·(j + ny·k)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredGrid {
    /// Coordinates of the grid lines along each axis (ndim)
    axes: Vec<Vec<f64>>,
}

impl StructuredGrid {
    /// Allocates a new instance given the grid lines along each axis
    ///
    /// Each axis must have at least two strictly increasing coordinates.
    pub fn new(axes: Vec<Vec<f64>>) -> Result<Self, StrError> {
        if axes.len() < 2 || axes.len() > 3 {
            return Err("grid must have 2 or 3 axes");
        }
        for axis in &axes {
            if axis.len() < 2 {
                return Err("each axis must have at least two coordinates");
            }
            if axis.windows(2).any(|w| !(w[1] > w[0])) {
                return Err("axis coordinates must be strictly increasing");
            }
        }
        Ok(StructuredGrid { axes })
    }

    /// Allocates a uniform grid with `ncell[d]` cells between `bounds[d].0` and `bounds[d].1`
    pub fn uniform(bounds: &[(f64, f64)], ncell: &[usize]) -> Result<Self, StrError> {
        if bounds.len() != ncell.len() {
            return Err("bounds and ncell must have the same length");
        }
        let mut axes = Vec::with_capacity(bounds.len());
        for (&(min, max), &n) in bounds.iter().zip(ncell) {
            if n < 1 {
                return Err("the number of cells must be ≥ 1");
            }
            let h = (max - min) / (n as f64);
            let mut axis: Vec<f64> = (0..n).map(|i| min + (i as f64) * h).collect();
            axis.push(max);
            axes.push(axis);
        }
        StructuredGrid::new(axes)
    }

    /// Returns the space dimension
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Returns the total number of points
    pub fn npoint(&self) -> usize {
        self.axes.iter().map(|a| a.len()).product()
    }

    /// Returns the grid lines along an axis
    pub fn axis(&self, d: usize) -> &[f64] {
        &self.axes[d]
    }

    /// Returns the (min, max) coordinates along each axis
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        self.axes.iter().map(|a| (a[0], a[a.len() - 1])).collect()
    }

    /// Returns the point index corresponding to the grid indices (i, j[, k])
    pub fn point_index(&self, ijk: &[usize]) -> usize {
        let mut index = 0;
        let mut stride = 1;
        for (d, &i) in ijk.iter().enumerate() {
            index += i * stride;
            stride *= self.axes[d].len();
        }
        index
    }

    /// Returns the coordinates of a point
    pub fn coords(&self, point_index: usize) -> Vec<f64> {
        let mut rem = point_index;
        self.axes
            .iter()
            .map(|a| {
                let i = rem % a.len();
                rem /= a.len();
                a[i]
            })
            .collect()
    }

    /// Finds the cell containing `x`
    ///
    /// Returns `(i, ξ)` for each axis, where `i` is the index of the cell's first grid line
    /// and `0 ≤ ξ ≤ 1` is the local coordinate within the cell.
    ///
    /// Coordinates beyond the bounds by less than a tiny slack are clamped onto the boundary.
    pub fn locate(&self, x: &[f64]) -> Result<Vec<(usize, f64)>, VerifyError> {
        if x.len() != self.ndim() {
            return Err(VerifyError::DimensionMismatch {
                expected: self.ndim(),
                found: x.len(),
            });
        }
        let mut cells = Vec::with_capacity(x.len());
        for (axis, &xd) in self.axes.iter().zip(x) {
            let n = axis.len();
            let (min, max) = (axis[0], axis[n - 1]);
            let slack = DOMAIN_SLACK * (max - min);
            // written so that NaN ends up outside
            if !(xd >= min - slack && xd <= max + slack) {
                return Err(VerifyError::OutOfDomain { point: x.to_vec() });
            }
            let xc = xd.clamp(min, max);
            let i = axis.partition_point(|v| *v <= xc).saturating_sub(1).min(n - 2);
            let ksi = (xc - axis[i]) / (axis[i + 1] - axis[i]);
            cells.push((i, ksi));
        }
        Ok(cells)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

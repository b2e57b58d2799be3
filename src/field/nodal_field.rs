use super::StructuredGrid;
use crate::base::{FieldLayout, PhaseRegularization, VerifyError, TEMPERATURE};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds the nodal values of a multi-component field on a structured grid
///
/// Values between grid points are interpolated with the multilinear (Q1) basis,
/// i.e., bilinear in 2D and trilinear in 3D.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodalField {
    /// Names of the components
    pub layout: FieldLayout,

    /// The grid
    pub grid: StructuredGrid,

    /// Nodal values (n_component)(npoint)
    values: Vec<Vector>,
}

impl NodalField {
    /// Allocates a new instance with all values equal to zero
    pub fn new(layout: FieldLayout, grid: StructuredGrid) -> Self {
        let npoint = grid.npoint();
        let values = vec![Vector::new(npoint); layout.len()];
        NodalField { layout, grid, values }
    }

    /// Allocates a new instance by evaluating a function at every grid point
    ///
    /// The function receives the coordinates of the point and must fill all components.
    pub fn from_fn<F>(layout: FieldLayout, grid: StructuredGrid, mut f: F) -> Self
    where
        F: FnMut(&[f64], &mut [f64]),
    {
        let mut field = NodalField::new(layout, grid);
        let mut buffer = vec![0.0; field.layout.len()];
        for p in 0..field.grid.npoint() {
            let x = field.grid.coords(p);
            buffer.iter_mut().for_each(|v| *v = 0.0);
            f(&x, &mut buffer);
            for (c, v) in buffer.iter().enumerate() {
                field.values[c][p] = *v;
            }
        }
        field
    }

    /// Returns the space dimension
    pub fn ndim(&self) -> usize {
        self.grid.ndim()
    }

    /// Returns the nodal values of a component
    pub fn nodal_values(&self, component: usize) -> Result<&Vector, StrError> {
        self.values.get(component).ok_or("component index is out of range")
    }

    /// Sets the value of a component at a grid point
    pub fn set_value(&mut self, component: usize, point: usize, value: f64) -> Result<(), StrError> {
        if component >= self.values.len() {
            return Err("component index is out of range");
        }
        if point >= self.grid.npoint() {
            return Err("point index is out of range");
        }
        self.values[component][point] = value;
        Ok(())
    }

    /// Checks the consistency between layout, grid, and values (e.g., after deserialization)
    pub fn check(&self) -> Result<(), StrError> {
        if self.values.len() != self.layout.len() {
            return Err("the number of value arrays must equal the number of components");
        }
        let npoint = self.grid.npoint();
        if self.values.iter().any(|v| v.dim() != npoint) {
            return Err("each value array must have npoint entries");
        }
        Ok(())
    }

    /// Interpolates all components at `x`
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` if `x.len() != ndim`
    /// * `OutOfDomain` if `x` lies outside the grid
    pub fn interpolate(&self, x: &[f64]) -> Result<Vector, VerifyError> {
        let cells = self.grid.locate(x)?;
        let ndim = cells.len();
        let mut result = Vector::new(self.values.len());
        let mut ijk = vec![0; ndim];
        for corner in 0..(1_usize << ndim) {
            let mut weight = 1.0;
            for d in 0..ndim {
                let (i, ksi) = cells[d];
                if corner & (1 << d) == 0 {
                    ijk[d] = i;
                    weight *= 1.0 - ksi;
                } else {
                    ijk[d] = i + 1;
                    weight *= ksi;
                }
            }
            if weight == 0.0 {
                continue;
            }
            let p = self.grid.point_index(&ijk);
            for (c, values) in self.values.iter().enumerate() {
                result[c] += weight * values[p];
            }
        }
        Ok(result)
    }

    /// Computes the liquid volume fraction of the domain
    ///
    /// The liquid fraction `1 - φ(T)` is averaged over the corners of each cell and
    /// weighted by the cell volume.
    pub fn liquid_fraction(&self, regularization: &PhaseRegularization) -> Result<f64, VerifyError> {
        let index = self
            .layout
            .index_of(TEMPERATURE)
            .ok_or_else(|| VerifyError::UnknownField(TEMPERATURE.to_string()))?;
        let temperature = &self.values[index];
        let ndim = self.ndim();
        let ncell: Vec<usize> = (0..ndim).map(|d| self.grid.axis(d).len() - 1).collect();
        let total_cells: usize = ncell.iter().product();
        let n_corner = 1_usize << ndim;
        let mut liquid = 0.0;
        let mut volume = 0.0;
        let mut ijk = vec![0; ndim];
        for cell in 0..total_cells {
            // cell indices with the first axis running fastest
            let mut rem = cell;
            let mut cell_volume = 1.0;
            let mut first = vec![0; ndim];
            for d in 0..ndim {
                first[d] = rem % ncell[d];
                rem /= ncell[d];
                let axis = self.grid.axis(d);
                cell_volume *= axis[first[d] + 1] - axis[first[d]];
            }
            let mut average = 0.0;
            for corner in 0..n_corner {
                for d in 0..ndim {
                    ijk[d] = first[d] + ((corner >> d) & 1);
                }
                let p = self.grid.point_index(&ijk);
                average += regularization.liquid_fraction(temperature[p]);
            }
            liquid += cell_volume * average / (n_corner as f64);
            volume += cell_volume;
        }
        Ok(liquid / volume)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

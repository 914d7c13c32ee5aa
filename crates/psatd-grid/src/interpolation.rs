//! Real-space arrays in the cylindrical `(r, θ, z)` basis.
//!
//! Particles deposit current and charge into an [`InterpolationGrid`];
//! the sums are then normalized by the inverse cell volume and handed to
//! the external forward transform. The inverse transform writes E and B
//! back here for gathering onto particles.

use psatd_core::{
    CellIndex, Complex64, Cylindrical, GridError, GridShape, InterpComponent, Mode,
};
use psatd_kernel::{CellKernel, Scheduler};
use std::f64::consts::PI;

/// Fields and accumulation buffers of one interpolation-grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpCell {
    /// Electric field, written by the inverse transform.
    pub e: Cylindrical,
    /// Magnetic field, written by the inverse transform.
    pub b: Cylindrical,
    /// Deposited current density.
    pub j: Cylindrical,
    /// Deposited charge density.
    pub rho: Complex64,
}

impl InterpCell {
    /// Read one named component.
    pub fn get(&self, component: InterpComponent) -> Complex64 {
        match component {
            InterpComponent::Er => self.e.r,
            InterpComponent::Et => self.e.t,
            InterpComponent::Ez => self.e.z,
            InterpComponent::Br => self.b.r,
            InterpComponent::Bt => self.b.t,
            InterpComponent::Bz => self.b.z,
            InterpComponent::Jr => self.j.r,
            InterpComponent::Jt => self.j.t,
            InterpComponent::Jz => self.j.z,
            InterpComponent::Rho => self.rho,
        }
    }

    /// Mutable access to one named component.
    pub fn slot(&mut self, component: InterpComponent) -> &mut Complex64 {
        match component {
            InterpComponent::Er => &mut self.e.r,
            InterpComponent::Et => &mut self.e.t,
            InterpComponent::Ez => &mut self.e.z,
            InterpComponent::Br => &mut self.b.r,
            InterpComponent::Bt => &mut self.b.t,
            InterpComponent::Bz => &mut self.b.z,
            InterpComponent::Jr => &mut self.j.r,
            InterpComponent::Jt => &mut self.j.t,
            InterpComponent::Jz => &mut self.j.z,
            InterpComponent::Rho => &mut self.rho,
        }
    }
}

/// Inverse physical volume of each radial cell for one mode.
///
/// Cell `ir` spans `[ir·dr, (ir+1)·dr]` radially and `dz` longitudinally,
/// so its volume is `π dz ((r + dr/2)² − (r − dr/2)²)` with
/// `r = (ir + 1/2) dr`. The mode's azimuthal weight multiplies the result.
pub fn inverse_volumes(nr: usize, dz: f64, dr: f64, mode: Mode) -> Vec<f64> {
    (0..nr)
        .map(|ir| {
            let r = (ir as f64 + 0.5) * dr;
            let outer = r + 0.5 * dr;
            let inner = r - 0.5 * dr;
            let vol = PI * dz * (outer * outer - inner * inner);
            mode.azimuthal_weight() / vol
        })
        .collect()
}

/// Arrays and inverse volumes of one azimuthal mode.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpolationMode {
    mode: Mode,
    shape: GridShape,
    cells: Vec<InterpCell>,
    invvol: Vec<f64>,
}

impl InterpolationMode {
    fn new(mode: Mode, shape: GridShape, dz: f64, dr: f64) -> Self {
        Self {
            mode,
            shape,
            cells: vec![InterpCell::default(); shape.cell_count()],
            invvol: inverse_volumes(shape.nr(), dz, dr, mode),
        }
    }

    /// Which mode this is.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// All cells, storage order.
    pub fn cells(&self) -> &[InterpCell] {
        &self.cells
    }

    /// All cells, mutable. Deposition writes through this.
    pub fn cells_mut(&mut self) -> &mut [InterpCell] {
        &mut self.cells
    }

    /// One cell.
    pub fn cell(&self, at: CellIndex) -> &InterpCell {
        &self.cells[self.shape.flat(at.iz, at.ir)]
    }

    /// One cell, mutable.
    pub fn cell_mut(&mut self, at: CellIndex) -> &mut InterpCell {
        let i = self.shape.flat(at.iz, at.ir);
        &mut self.cells[i]
    }

    /// Inverse cell volume per radial index (`nr` entries).
    pub fn invvol(&self) -> &[f64] {
        &self.invvol
    }

    /// Replace the inverse volumes, e.g. with a corrected on-axis value.
    pub fn set_inverse_volumes(&mut self, invvol: Vec<f64>) -> Result<(), GridError> {
        if invvol.len() != self.shape.nr() {
            return Err(GridError::LengthMismatch {
                name: "invvol",
                expected: self.shape.nr(),
                actual: invvol.len(),
            });
        }
        self.invvol = invvol;
        Ok(())
    }

    /// Copy one component out as a flat array.
    pub fn component(&self, component: InterpComponent) -> Vec<Complex64> {
        self.cells.iter().map(|c| c.get(component)).collect()
    }

    /// Overwrite one component from a flat array.
    pub fn set_component(
        &mut self,
        component: InterpComponent,
        values: &[Complex64],
    ) -> Result<(), GridError> {
        self.shape.check_len(component.name(), values.len())?;
        for (cell, &v) in self.cells.iter_mut().zip(values) {
            *cell.slot(component) = v;
        }
        Ok(())
    }
}

/// Real-space arrays for modes 0 and 1 on an `nz × nr` grid.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpolationGrid {
    shape: GridShape,
    dz: f64,
    dr: f64,
    modes: [InterpolationMode; 2],
}

impl InterpolationGrid {
    /// Create zeroed arrays with cell sizes `dz` and `dr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use psatd_core::{GridShape, Mode};
    /// use psatd_grid::InterpolationGrid;
    ///
    /// let grid = InterpolationGrid::new(GridShape::new(8, 4).unwrap(), 0.1, 0.2).unwrap();
    /// assert_eq!(grid.mode(Mode::One).invvol().len(), 4);
    /// ```
    pub fn new(shape: GridShape, dz: f64, dr: f64) -> Result<Self, GridError> {
        if !(dz.is_finite() && dz > 0.0) {
            return Err(GridError::InvalidSpacing {
                name: "dz",
                value: dz,
            });
        }
        if !(dr.is_finite() && dr > 0.0) {
            return Err(GridError::InvalidSpacing {
                name: "dr",
                value: dr,
            });
        }
        Ok(Self {
            shape,
            dz,
            dr,
            modes: Mode::ALL.map(|m| InterpolationMode::new(m, shape, dz, dr)),
        })
    }

    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Longitudinal cell size.
    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Radial cell size.
    pub fn dr(&self) -> f64 {
        self.dr
    }

    /// Arrays of one mode.
    pub fn mode(&self, mode: Mode) -> &InterpolationMode {
        &self.modes[mode.index()]
    }

    /// Arrays of one mode, mutable.
    pub fn mode_mut(&mut self, mode: Mode) -> &mut InterpolationMode {
        &mut self.modes[mode.index()]
    }

    /// Run a kernel over every cell of one mode.
    pub fn apply<K, S>(&mut self, mode: Mode, kernel: &K, scheduler: &S)
    where
        K: CellKernel<Cell = InterpCell>,
        S: Scheduler,
    {
        let shape = self.shape;
        scheduler.run(shape, &mut self.modes[mode.index()].cells, kernel);
    }
}

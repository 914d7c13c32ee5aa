//! Spectral-space field arrays in the circular-polarization basis.

use psatd_core::{CellIndex, Circular, Complex64, GridError, GridShape, Mode, SpectralComponent};
use psatd_kernel::{CellKernel, Scheduler};

/// Every spectral quantity stored at one `(kz, kr)` cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpectralCell {
    /// Electric field.
    pub e: Circular,
    /// Magnetic field.
    pub b: Circular,
    /// Current density.
    pub j: Circular,
    /// Charge density at the start of the step.
    pub rho_prev: Complex64,
    /// Charge density at the end of the step.
    pub rho_next: Complex64,
}

impl SpectralCell {
    /// Read one named component.
    pub fn get(&self, component: SpectralComponent) -> Complex64 {
        match component {
            SpectralComponent::Ep => self.e.p,
            SpectralComponent::Em => self.e.m,
            SpectralComponent::Ez => self.e.z,
            SpectralComponent::Bp => self.b.p,
            SpectralComponent::Bm => self.b.m,
            SpectralComponent::Bz => self.b.z,
            SpectralComponent::Jp => self.j.p,
            SpectralComponent::Jm => self.j.m,
            SpectralComponent::Jz => self.j.z,
            SpectralComponent::RhoPrev => self.rho_prev,
            SpectralComponent::RhoNext => self.rho_next,
        }
    }

    /// Mutable access to one named component.
    pub fn slot(&mut self, component: SpectralComponent) -> &mut Complex64 {
        match component {
            SpectralComponent::Ep => &mut self.e.p,
            SpectralComponent::Em => &mut self.e.m,
            SpectralComponent::Ez => &mut self.e.z,
            SpectralComponent::Bp => &mut self.b.p,
            SpectralComponent::Bm => &mut self.b.m,
            SpectralComponent::Bz => &mut self.b.z,
            SpectralComponent::Jp => &mut self.j.p,
            SpectralComponent::Jm => &mut self.j.m,
            SpectralComponent::Jz => &mut self.j.z,
            SpectralComponent::RhoPrev => &mut self.rho_prev,
            SpectralComponent::RhoNext => &mut self.rho_next,
        }
    }

    /// First component holding NaN or infinity, if any.
    pub fn first_non_finite(&self) -> Option<SpectralComponent> {
        SpectralComponent::ALL
            .into_iter()
            .find(|&c| !self.get(c).is_finite())
    }
}

/// Arrays of one azimuthal mode.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralMode {
    mode: Mode,
    shape: GridShape,
    cells: Vec<SpectralCell>,
}

impl SpectralMode {
    /// Zeroed arrays for `mode`.
    pub fn new(mode: Mode, shape: GridShape) -> Self {
        Self {
            mode,
            shape,
            cells: vec![SpectralCell::default(); shape.cell_count()],
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
    pub fn cells(&self) -> &[SpectralCell] {
        &self.cells
    }

    /// All cells, mutable.
    pub fn cells_mut(&mut self) -> &mut [SpectralCell] {
        &mut self.cells
    }

    /// One cell.
    pub fn cell(&self, at: CellIndex) -> &SpectralCell {
        &self.cells[self.shape.flat(at.iz, at.ir)]
    }

    /// One cell, mutable.
    pub fn cell_mut(&mut self, at: CellIndex) -> &mut SpectralCell {
        let i = self.shape.flat(at.iz, at.ir);
        &mut self.cells[i]
    }

    /// Copy one component out as a flat array.
    pub fn component(&self, component: SpectralComponent) -> Vec<Complex64> {
        self.cells.iter().map(|c| c.get(component)).collect()
    }

    /// Overwrite one component from a flat array.
    pub fn set_component(
        &mut self,
        component: SpectralComponent,
        values: &[Complex64],
    ) -> Result<(), GridError> {
        self.shape.check_len(component.name(), values.len())?;
        for (cell, &v) in self.cells.iter_mut().zip(values) {
            *cell.slot(component) = v;
        }
        Ok(())
    }

    /// Overwrite every cell from another mode of the same shape.
    pub fn copy_from(&mut self, other: &SpectralMode) -> Result<(), GridError> {
        self.shape.check_same("spectral mode", other.shape)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Run a kernel over every cell.
    pub fn apply<K, S>(&mut self, kernel: &K, scheduler: &S)
    where
        K: CellKernel<Cell = SpectralCell>,
        S: Scheduler,
    {
        scheduler.run(self.shape, &mut self.cells, kernel);
    }
}

/// Spectral arrays for modes 0 and 1.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralModeGrid {
    shape: GridShape,
    modes: [SpectralMode; 2],
}

impl SpectralModeGrid {
    /// Zeroed arrays on an `nz × nr` grid.
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            modes: Mode::ALL.map(|m| SpectralMode::new(m, shape)),
        }
    }

    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Arrays of one mode.
    pub fn mode(&self, mode: Mode) -> &SpectralMode {
        &self.modes[mode.index()]
    }

    /// Arrays of one mode, mutable.
    pub fn mode_mut(&mut self, mode: Mode) -> &mut SpectralMode {
        &mut self.modes[mode.index()]
    }

    /// Both modes, in mode order.
    pub fn modes(&self) -> &[SpectralMode; 2] {
        &self.modes
    }

    /// Run a kernel over every cell of one mode.
    pub fn apply<K, S>(&mut self, mode: Mode, kernel: &K, scheduler: &S)
    where
        K: CellKernel<Cell = SpectralCell>,
        S: Scheduler,
    {
        self.modes[mode.index()].apply(kernel, scheduler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psatd_kernel::Sequential;

    struct ConjugateE;

    impl CellKernel for ConjugateE {
        type Cell = SpectralCell;
        fn name(&self) -> &str {
            "conjugate_e"
        }
        fn apply(&self, _at: CellIndex, cell: &mut SpectralCell) {
            cell.e.p = cell.e.p.conj();
        }
    }

    #[test]
    fn get_and_slot_agree() {
        let mut cell = SpectralCell::default();
        for (i, c) in SpectralComponent::ALL.into_iter().enumerate() {
            *cell.slot(c) = Complex64::new(i as f64, 0.0);
        }
        for (i, c) in SpectralComponent::ALL.into_iter().enumerate() {
            assert_eq!(cell.get(c), Complex64::new(i as f64, 0.0));
        }
        assert_eq!(cell.rho_next, Complex64::new(10.0, 0.0));
    }

    #[test]
    fn first_non_finite_reports_component() {
        let mut cell = SpectralCell::default();
        assert_eq!(cell.first_non_finite(), None);
        cell.b.z = Complex64::new(0.0, f64::INFINITY);
        assert_eq!(cell.first_non_finite(), Some(SpectralComponent::Bz));
    }

    #[test]
    fn modes_are_independent() {
        let shape = GridShape::new(2, 3).unwrap();
        let mut grid = SpectralModeGrid::new(shape);
        grid.mode_mut(Mode::One).cell_mut(CellIndex::new(1, 2)).e.p = Complex64::new(0.0, 1.0);
        grid.apply(Mode::One, &ConjugateE, &Sequential);
        assert_eq!(
            grid.mode(Mode::One).cell(CellIndex::new(1, 2)).e.p,
            Complex64::new(0.0, -1.0)
        );
        assert!(grid
            .mode(Mode::Zero)
            .cells()
            .iter()
            .all(|c| *c == SpectralCell::default()));
    }

    #[test]
    fn copy_from_requires_same_shape() {
        let mut a = SpectralMode::new(Mode::Zero, GridShape::new(2, 2).unwrap());
        let b = SpectralMode::new(Mode::Zero, GridShape::new(4, 1).unwrap());
        assert!(matches!(
            a.copy_from(&b),
            Err(GridError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn component_length_checked() {
        let mut m = SpectralMode::new(Mode::Zero, GridShape::new(2, 2).unwrap());
        let err = m
            .set_component(SpectralComponent::RhoPrev, &[Complex64::default(); 3])
            .unwrap_err();
        assert!(matches!(err, GridError::LengthMismatch { name: "rho_prev", .. }));
    }
}

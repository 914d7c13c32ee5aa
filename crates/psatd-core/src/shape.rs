//! Grid dimensions, cell indexing, and azimuthal modes.

use crate::error::GridError;
use std::fmt;

/// Dimensions of a 2D `(z, r)` grid shared by every per-cell array of a grid.
///
/// Storage is row-major with `iz` as the slow axis: the flat index of cell
/// `(iz, ir)` is `iz * nr + ir`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    nz: usize,
    nr: usize,
}

impl GridShape {
    /// Largest accepted `nz * nr`. Keeps flat indices comfortably in range
    /// on 32-bit targets.
    pub const MAX_CELLS: usize = u32::MAX as usize;

    /// Create a shape with `nz` longitudinal and `nr` radial cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use psatd_core::GridShape;
    ///
    /// let shape = GridShape::new(4, 3).unwrap();
    /// assert_eq!(shape.cell_count(), 12);
    /// assert_eq!(shape.flat(1, 2), 5);
    /// assert!(GridShape::new(0, 3).is_err());
    /// ```
    pub fn new(nz: usize, nr: usize) -> Result<Self, GridError> {
        if nz == 0 || nr == 0 {
            return Err(GridError::EmptyGrid);
        }
        match nz.checked_mul(nr) {
            Some(n) if n <= Self::MAX_CELLS => Ok(Self { nz, nr }),
            _ => Err(GridError::DimensionTooLarge {
                nz,
                nr,
                max: Self::MAX_CELLS,
            }),
        }
    }

    /// Number of longitudinal cells.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Number of radial cells.
    pub fn nr(&self) -> usize {
        self.nr
    }

    /// Total number of cells (`nz * nr`).
    pub fn cell_count(&self) -> usize {
        self.nz * self.nr
    }

    /// Flat storage index of `(iz, ir)`. Does not bounds-check.
    pub fn flat(&self, iz: usize, ir: usize) -> usize {
        iz * self.nr + ir
    }

    /// Cell coordinates of a flat storage index.
    pub fn cell(&self, flat: usize) -> CellIndex {
        CellIndex {
            iz: flat / self.nr,
            ir: flat % self.nr,
        }
    }

    /// Whether `(iz, ir)` lies inside the grid.
    pub fn contains(&self, at: CellIndex) -> bool {
        at.iz < self.nz && at.ir < self.nr
    }

    /// Iterate over every cell in storage order.
    pub fn cells(self) -> impl Iterator<Item = CellIndex> {
        (0..self.cell_count()).map(move |i| self.cell(i))
    }

    /// Check that an array meant for this grid has exactly `cell_count()`
    /// entries.
    pub fn check_len(&self, name: &'static str, len: usize) -> Result<(), GridError> {
        if len != self.cell_count() {
            return Err(GridError::LengthMismatch {
                name,
                expected: self.cell_count(),
                actual: len,
            });
        }
        Ok(())
    }

    /// Check that another shape is identical to this one.
    pub fn check_same(&self, name: &'static str, other: GridShape) -> Result<(), GridError> {
        if *self != other {
            return Err(GridError::ShapeMismatch {
                name,
                expected: *self,
                actual: other,
            });
        }
        Ok(())
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.nz, self.nr)
    }
}

/// Coordinates of one grid cell: longitudinal index `iz`, radial index `ir`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Longitudinal index.
    pub iz: usize,
    /// Radial index.
    pub ir: usize,
}

impl CellIndex {
    /// Construct a cell index.
    pub fn new(iz: usize, ir: usize) -> Self {
        Self { iz, ir }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(iz={}, ir={})", self.iz, self.ir)
    }
}

/// Azimuthal Fourier mode evolved by the solver.
///
/// Modes never interact inside the field solver; each owns an independent
/// set of arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    /// Axisymmetric mode, m = 0.
    Zero,
    /// First azimuthal harmonic, m = 1.
    One,
}

impl Mode {
    /// Both modes, in index order.
    pub const ALL: [Mode; 2] = [Mode::Zero, Mode::One];

    /// Azimuthal index `m`.
    pub fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Mode for an azimuthal index, if supported.
    pub fn from_index(m: usize) -> Option<Self> {
        match m {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            _ => None,
        }
    }

    /// Weight applied to deposited quantities of this mode when converting
    /// sums to densities. Mode 0 carries half the weight of higher modes.
    pub fn azimuthal_weight(self) -> f64 {
        match self {
            Self::Zero => 1.0,
            Self::One => 2.0,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode {}", self.index())
    }
}

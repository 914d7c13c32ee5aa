//! Error types shared across the solver workspace.
//!
//! All shape and configuration problems are reported at construction time.
//! The per-cell kernels themselves never fail.

use crate::shape::{CellIndex, GridShape};
use std::error::Error;
use std::fmt;

/// Errors from grid construction and array shape checks.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A grid dimension is zero.
    EmptyGrid,
    /// `nz * nr` overflows or exceeds [`GridShape::MAX_CELLS`].
    DimensionTooLarge {
        /// Requested longitudinal size.
        nz: usize,
        /// Requested radial size.
        nr: usize,
        /// Largest accepted cell count.
        max: usize,
    },
    /// Two grids or arrays that must share a shape do not.
    ShapeMismatch {
        /// What was being checked.
        name: &'static str,
        /// The shape required.
        expected: GridShape,
        /// The shape found.
        actual: GridShape,
    },
    /// A flat or radial array has the wrong number of entries.
    LengthMismatch {
        /// Name of the offending array.
        name: &'static str,
        /// Required length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// A cell spacing is not finite and positive.
    InvalidSpacing {
        /// Which spacing (`dz` or `dr`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell along each axis"),
            Self::DimensionTooLarge { nz, nr, max } => {
                write!(f, "grid {nz}x{nr} exceeds the maximum of {max} cells")
            }
            Self::ShapeMismatch {
                name,
                expected,
                actual,
            } => write!(f, "{name}: expected shape {expected}, got {actual}"),
            Self::LengthMismatch {
                name,
                expected,
                actual,
            } => write!(f, "{name}: expected {expected} entries, got {actual}"),
            Self::InvalidSpacing { name, value } => {
                write!(f, "{name} must be finite and > 0, got {value}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from building a coefficient cache.
#[derive(Clone, Debug, PartialEq)]
pub enum CoefficientError {
    /// The wavenumber arrays do not fit the grid.
    Grid(GridError),
    /// `dt` is not finite and positive.
    InvalidTimestep {
        /// The rejected value.
        value: f64,
    },
    /// The Galilean frame velocity is not finite or `|V| >= c`.
    SuperluminalFrame {
        /// The rejected velocity, m/s.
        velocity: f64,
    },
    /// A coefficient evaluated to NaN or infinity.
    NonFinite {
        /// Name of the coefficient.
        name: &'static str,
        /// Cell at which it was detected.
        cell: CellIndex,
    },
}

impl fmt::Display for CoefficientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidTimestep { value } => {
                write!(f, "dt must be finite and > 0, got {value}")
            }
            Self::SuperluminalFrame { velocity } => {
                write!(f, "frame velocity must be finite with |V| < c, got {velocity}")
            }
            Self::NonFinite { name, cell } => {
                write!(f, "coefficient {name} is not finite at {cell}")
            }
        }
    }
}

impl Error for CoefficientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for CoefficientError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_array() {
        let e = GridError::LengthMismatch {
            name: "invvol",
            expected: 4,
            actual: 3,
        };
        assert_eq!(e.to_string(), "invvol: expected 4 entries, got 3");
    }

    #[test]
    fn coefficient_error_wraps_grid_error() {
        let e: CoefficientError = GridError::EmptyGrid.into();
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("grid: "));
    }

    #[test]
    fn non_finite_reports_cell() {
        let e = CoefficientError::NonFinite {
            name: "j_coef",
            cell: CellIndex::new(2, 1),
        };
        assert_eq!(e.to_string(), "coefficient j_coef is not finite at (iz=2, ir=1)");
    }
}

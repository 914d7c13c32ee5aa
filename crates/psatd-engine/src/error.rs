//! Errors from running a solver step.

use psatd_core::{CellIndex, GridError, Mode, SpectralComponent};
use psatd_grid::{DepositionError, TransformError};
use std::error::Error;
use std::fmt;

/// Direction of a spectral transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Interpolation grid to spectral grid.
    Forward,
    /// Spectral grid to interpolation grid.
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Errors from [`SpectralSolver::step`](crate::SpectralSolver::step).
///
/// On error the step is abandoned where it failed; the step counter does
/// not advance. Restore a [`GridState`](crate::GridState) to roll back.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// The deposition collaborator failed.
    Deposition {
        /// Mode being deposited.
        mode: Mode,
        /// The underlying error.
        source: DepositionError,
    },
    /// The transform collaborator failed.
    Transform {
        /// Mode being transformed.
        mode: Mode,
        /// Which direction failed.
        direction: Direction,
        /// The underlying error.
        source: TransformError,
    },
    /// A field became NaN or infinite after the push.
    NonFinite {
        /// Affected mode.
        mode: Mode,
        /// First offending component.
        component: SpectralComponent,
        /// First offending cell.
        cell: CellIndex,
    },
    /// A kernel was built against a grid of the wrong shape.
    Grid(GridError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposition { mode, source } => write!(f, "{mode}: {source}"),
            Self::Transform {
                mode,
                direction,
                source,
            } => write!(f, "{mode}: {direction} {source}"),
            Self::NonFinite {
                mode,
                component,
                cell,
            } => write!(
                f,
                "{mode}: non-finite {} at {cell} after push",
                component.name()
            ),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Deposition { source, .. } => Some(source),
            Self::Transform { source, .. } => Some(source),
            Self::NonFinite { .. } => None,
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for StepError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_mode_and_direction() {
        let e = StepError::Transform {
            mode: Mode::One,
            direction: Direction::Backward,
            source: TransformError {
                reason: "boom".into(),
            },
        };
        assert_eq!(e.to_string(), "mode 1: backward transform failed: boom");
        assert!(e.source().is_some());
    }

    #[test]
    fn non_finite_names_component() {
        let e = StepError::NonFinite {
            mode: Mode::Zero,
            component: SpectralComponent::Bz,
            cell: CellIndex::new(1, 2),
        };
        assert_eq!(e.to_string(), "mode 0: non-finite Bz at (iz=1, ir=2) after push");
        assert!(e.source().is_none());
    }
}

//! In-memory solver state for checkpoint and restart.
//!
//! Persisting a [`GridState`] is the caller's business; the solver only
//! produces one and accepts one back.

use psatd_core::{GridError, GridShape};
use psatd_grid::{InterpolationGrid, SpectralModeGrid};

/// Everything that evolves between steps.
///
/// Coefficients and filter weights are derived from the configuration and
/// are not part of the state.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    /// Number of completed steps.
    pub step_count: u64,
    /// Spectral arrays of both modes.
    pub spectral: SpectralModeGrid,
    /// Real-space arrays of both modes.
    pub interpolation: InterpolationGrid,
}

impl GridState {
    /// Grid shape of the stored arrays.
    pub fn shape(&self) -> GridShape {
        self.spectral.shape()
    }

    /// Check that both grids have `expected` shape.
    pub fn check_shape(&self, expected: GridShape) -> Result<(), GridError> {
        expected.check_same("checkpoint spectral grid", self.spectral.shape())?;
        expected.check_same("checkpoint interpolation grid", self.interpolation.shape())
    }
}

//! Spectral smoothing by real per-cell weights.

use crate::target::SpectralTarget;
use psatd_core::{CellIndex, GridError, GridShape};
use psatd_grid::{FilterWeights, SpectralCell};
use psatd_kernel::CellKernel;

/// Multiplies one spectral field by the filter weight of each cell.
#[derive(Clone, Copy, Debug)]
pub struct SpectralFilter<'a> {
    weights: &'a FilterWeights,
    target: SpectralTarget,
}

impl<'a> SpectralFilter<'a> {
    /// Filter `target` on grids of `shape`.
    pub fn new(
        shape: GridShape,
        weights: &'a FilterWeights,
        target: SpectralTarget,
    ) -> Result<Self, GridError> {
        shape.check_same("filter weights", weights.shape())?;
        Ok(Self { weights, target })
    }

    /// The field this filter scales.
    pub fn target(&self) -> SpectralTarget {
        self.target
    }
}

impl CellKernel for SpectralFilter<'_> {
    type Cell = SpectralCell;

    fn name(&self) -> &str {
        "filter"
    }

    fn apply(&self, at: CellIndex, cell: &mut SpectralCell) {
        let w = self.weights.at(at);
        match self.target {
            SpectralTarget::E => cell.e.scale(w),
            SpectralTarget::B => cell.b.scale(w),
            SpectralTarget::J => cell.j.scale(w),
            SpectralTarget::RhoPrev => cell.rho_prev *= w,
            SpectralTarget::RhoNext => cell.rho_next *= w,
        }
    }
}

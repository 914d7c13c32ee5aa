//! Conversion of deposited sums into densities.

use crate::target::Deposit;
use psatd_core::{CellIndex, GridError, GridShape};
use psatd_grid::{InterpCell, InterpolationMode};
use psatd_kernel::CellKernel;

/// Multiplies each cell at radial index `ir` by `invvol[ir]`.
#[derive(Clone, Debug)]
pub struct VolumeNormalizer {
    invvol: Vec<f64>,
    target: Deposit,
}

impl VolumeNormalizer {
    /// Normalizer for grids of `shape`.
    ///
    /// Fails if `invvol` does not hold exactly `shape.nr()` entries.
    pub fn new(shape: GridShape, invvol: Vec<f64>, target: Deposit) -> Result<Self, GridError> {
        if invvol.len() != shape.nr() {
            return Err(GridError::LengthMismatch {
                name: "invvol",
                expected: shape.nr(),
                actual: invvol.len(),
            });
        }
        Ok(Self { invvol, target })
    }

    /// Normalizer using the inverse volumes stored with a mode.
    pub fn for_mode(mode: &InterpolationMode, target: Deposit) -> Self {
        Self {
            invvol: mode.invvol().to_vec(),
            target,
        }
    }

    /// The buffers this normalizer scales.
    pub fn target(&self) -> Deposit {
        self.target
    }
}

impl CellKernel for VolumeNormalizer {
    type Cell = InterpCell;

    fn name(&self) -> &str {
        "divide_by_volume"
    }

    fn apply(&self, at: CellIndex, cell: &mut InterpCell) {
        let w = self.invvol[at.ir];
        if self.target.current() {
            cell.j.scale(w);
        }
        if self.target.charge() {
            cell.rho *= w;
        }
    }
}

//! Zeroing of interpolation-grid accumulation buffers.

use crate::target::Deposit;
use psatd_core::{CellIndex, Complex64, Cylindrical};
use psatd_grid::InterpCell;
use psatd_kernel::CellKernel;

/// Sets the targeted deposition buffers to exactly zero.
///
/// Runs before each deposition pass; `E` and `B` are left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridResetter {
    target: Deposit,
}

impl GridResetter {
    /// Reset `target` on every cell.
    pub fn new(target: Deposit) -> Self {
        Self { target }
    }

    /// The buffers this resetter clears.
    pub fn target(&self) -> Deposit {
        self.target
    }
}

impl CellKernel for GridResetter {
    type Cell = InterpCell;

    fn name(&self) -> &str {
        "reset"
    }

    fn apply(&self, _at: CellIndex, cell: &mut InterpCell) {
        if self.target.current() {
            cell.j = Cylindrical::zero();
        }
        if self.target.charge() {
            cell.rho = Complex64::new(0.0, 0.0);
        }
    }
}

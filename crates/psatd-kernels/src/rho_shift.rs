//! Two-level charge history.

use psatd_core::{CellIndex, Complex64};
use psatd_grid::SpectralCell;
use psatd_kernel::CellKernel;

/// `rho_prev := rho_next`, `rho_next := 0`.
///
/// Runs last in a step so the next deposition starts from a clean
/// `rho_next`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RhoHistoryShifter;

impl CellKernel for RhoHistoryShifter {
    type Cell = SpectralCell;

    fn name(&self) -> &str {
        "shift_rho"
    }

    fn apply(&self, _at: CellIndex, cell: &mut SpectralCell) {
        cell.rho_prev = cell.rho_next;
        cell.rho_next = Complex64::new(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psatd_core::{GridShape, Mode, SpectralComponent};
    use psatd_grid::SpectralMode;
    use psatd_kernel::Parallel;

    #[test]
    fn shift_moves_next_into_prev() {
        let shape = GridShape::new(3, 3).unwrap();
        let mut m = SpectralMode::new(Mode::One, shape);
        let next: Vec<_> = (0..9).map(|i| Complex64::new(i as f64, 1.0)).collect();
        m.set_component(SpectralComponent::RhoNext, &next).unwrap();
        m.set_component(SpectralComponent::RhoPrev, &[Complex64::new(-1.0, 0.0); 9])
            .unwrap();
        m.apply(&RhoHistoryShifter, &Parallel);
        assert_eq!(m.component(SpectralComponent::RhoPrev), next);
        assert!(m
            .component(SpectralComponent::RhoNext)
            .iter()
            .all(|v| v.re == 0.0 && v.im == 0.0));
    }
}

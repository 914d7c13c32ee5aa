//! Projection of the spectral current onto charge conservation.

use psatd_core::{CellIndex, GridError, GridShape, I};
use psatd_grid::{CoefficientCache, SpectralCell};
use psatd_kernel::CellKernel;

/// Adds a longitudinal correction to `J` so that
/// `j_corr_coef (rho_next − T rho_prev) + div J = 0` in every cell with
/// `k ≠ 0`.
///
/// ```text
/// F   = −inv_k2 (j_corr_coef (rho_next − T rho_prev) + div J)
/// Jp += kr F / 2,  Jm −= kr F / 2,  Jz −= i kz F
/// ```
///
/// The `k = 0` cell is left unchanged since `inv_k2` is zero there.
#[derive(Clone, Copy, Debug)]
pub struct CurrentCorrector<'a> {
    coeffs: &'a CoefficientCache,
}

impl<'a> CurrentCorrector<'a> {
    /// Corrector for grids of `shape`.
    pub fn new(shape: GridShape, coeffs: &'a CoefficientCache) -> Result<Self, GridError> {
        shape.check_same("coefficients", coeffs.shape())?;
        Ok(Self { coeffs })
    }
}

impl CellKernel for CurrentCorrector<'_> {
    type Cell = SpectralCell;

    fn name(&self) -> &str {
        "correct_currents"
    }

    fn apply(&self, at: CellIndex, cell: &mut SpectralCell) {
        let k = self.coeffs.at(at);
        let mismatch = k.j_corr_coef * (cell.rho_next - cell.rho_prev * k.t);
        let f = -k.inv_k2 * (mismatch + cell.j.divergence(k.kr, k.kz));
        cell.j.p += 0.5 * k.kr * f;
        cell.j.m -= 0.5 * k.kr * f;
        cell.j.z -= I * k.kz * f;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psatd_core::{Circular, Complex64, Mode};
    use psatd_grid::{SpectralMode, Wavenumbers};
    use psatd_kernel::Sequential;

    #[test]
    fn shape_mismatch_rejected() {
        let w = Wavenumbers::from_axes(&[0.0, 1.0], &[1.0]).unwrap();
        let cache = CoefficientCache::new(&w, Mode::Zero, 1e-15, 0.0).unwrap();
        let err = CurrentCorrector::new(GridShape::new(1, 2).unwrap(), &cache).unwrap_err();
        assert!(matches!(err, GridError::ShapeMismatch { .. }));
    }

    #[test]
    fn zero_wavenumber_cell_untouched() {
        let w = Wavenumbers::from_axes(&[0.0], &[0.0]).unwrap();
        let cache = CoefficientCache::new(&w, Mode::Zero, 1e-15, 0.0).unwrap();
        let mut m = SpectralMode::new(Mode::Zero, w.shape());
        let j = Circular::new(
            Complex64::new(1.0, 2.0),
            Complex64::new(3.0, 4.0),
            Complex64::new(5.0, 6.0),
        );
        m.cells_mut()[0].j = j;
        m.cells_mut()[0].rho_next = Complex64::new(7.0, 0.0);
        m.apply(&CurrentCorrector::new(w.shape(), &cache).unwrap(), &Sequential);
        assert_eq!(m.cells()[0].j, j);
    }

    #[test]
    fn already_consistent_current_is_unchanged() {
        // Static frame, rho constant in time: a transverse J satisfies the
        // continuity equation and must not be modified.
        let w = Wavenumbers::from_axes(&[2.0e5], &[1.0e5]).unwrap();
        let cache = CoefficientCache::new(&w, Mode::One, 1e-15, 0.0).unwrap();
        let mut m = SpectralMode::new(Mode::One, w.shape());
        let cell = &mut m.cells_mut()[0];
        cell.j = Circular::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
        );
        cell.rho_prev = Complex64::new(3.0, -1.0);
        cell.rho_next = Complex64::new(3.0, -1.0);
        let before = *cell;
        m.apply(&CurrentCorrector::new(w.shape(), &cache).unwrap(), &Sequential);
        let after = m.cells()[0];
        for (a, b) in after.j.components().iter().zip(before.j.components()) {
            assert!((a - b).norm() < 1e-12);
        }
    }
}

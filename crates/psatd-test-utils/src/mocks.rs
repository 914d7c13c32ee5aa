//! Mock collaborators for driving a solver in tests.

use psatd_core::{Complex64, Cylindrical, Mode, I};
use psatd_grid::{
    Deposition, DepositionError, InterpolationGrid, SpectralModeGrid, SpectralTransform,
    TransformError,
};

/// A transform that changes basis cell by cell without any spatial
/// transform: `p = (r − iθ)/2`, `m = (r + iθ)/2` forward and
/// `r = p + m`, `θ = i(p − m)` backward.
///
/// Counts calls, and can be told to fail.
#[derive(Debug, Default)]
pub struct MockTransform {
    pub forward_calls: usize,
    pub backward_calls: usize,
    pub fail_forward: bool,
}

impl MockTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transform whose forward direction always fails.
    pub fn failing() -> Self {
        Self {
            fail_forward: true,
            ..Self::default()
        }
    }
}

impl SpectralTransform for MockTransform {
    fn forward(
        &mut self,
        mode: Mode,
        interp: &InterpolationGrid,
        spectral: &mut SpectralModeGrid,
    ) -> Result<(), TransformError> {
        self.forward_calls += 1;
        if self.fail_forward {
            return Err(TransformError {
                reason: "mock forward failure".into(),
            });
        }
        if interp.shape() != spectral.shape() {
            return Err(TransformError {
                reason: format!("shape {} vs {}", interp.shape(), spectral.shape()),
            });
        }
        let src = interp.mode(mode).cells();
        for (dst, s) in spectral.mode_mut(mode).cells_mut().iter_mut().zip(src) {
            dst.j.p = 0.5 * (s.j.r - I * s.j.t);
            dst.j.m = 0.5 * (s.j.r + I * s.j.t);
            dst.j.z = s.j.z;
            dst.rho_next = s.rho;
        }
        Ok(())
    }

    fn backward(
        &mut self,
        mode: Mode,
        spectral: &SpectralModeGrid,
        interp: &mut InterpolationGrid,
    ) -> Result<(), TransformError> {
        self.backward_calls += 1;
        if interp.shape() != spectral.shape() {
            return Err(TransformError {
                reason: format!("shape {} vs {}", spectral.shape(), interp.shape()),
            });
        }
        let src = spectral.mode(mode).cells();
        for (dst, s) in interp.mode_mut(mode).cells_mut().iter_mut().zip(src) {
            dst.e = Cylindrical::new(s.e.p + s.e.m, I * (s.e.p - s.e.m), s.e.z);
            dst.b = Cylindrical::new(s.b.p + s.b.m, I * (s.b.p - s.b.m), s.b.z);
        }
        Ok(())
    }
}

/// Adds the same current and charge to every cell of the requested mode.
#[derive(Debug, Default)]
pub struct MockDeposition {
    pub current: Cylindrical,
    pub charge: Complex64,
    pub calls: usize,
    pub fail: bool,
}

impl MockDeposition {
    pub fn uniform(current: Cylindrical, charge: Complex64) -> Self {
        Self {
            current,
            charge,
            ..Self::default()
        }
    }

    /// A deposition that always fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Deposition for MockDeposition {
    fn deposit(&mut self, mode: Mode, grid: &mut InterpolationGrid) -> Result<(), DepositionError> {
        self.calls += 1;
        if self.fail {
            return Err(DepositionError {
                reason: "mock deposition failure".into(),
            });
        }
        for cell in grid.mode_mut(mode).cells_mut() {
            cell.j = cell.j + self.current;
            cell.rho += self.charge;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psatd_core::GridShape;

    #[test]
    fn forward_then_backward_restores_basis() {
        let shape = GridShape::new(2, 2).unwrap();
        let mut interp = InterpolationGrid::new(shape, 1.0, 1.0).unwrap();
        let mut spectral = SpectralModeGrid::new(shape);
        let j = Cylindrical::new(
            Complex64::new(1.0, 2.0),
            Complex64::new(-3.0, 0.5),
            Complex64::new(0.0, 1.0),
        );
        for cell in interp.mode_mut(Mode::One).cells_mut() {
            cell.j = j;
        }
        let mut t = MockTransform::new();
        t.forward(Mode::One, &interp, &mut spectral).unwrap();
        // Copy J into E so the backward direction can be checked.
        for cell in spectral.mode_mut(Mode::One).cells_mut() {
            cell.e = cell.j;
        }
        t.backward(Mode::One, &spectral, &mut interp).unwrap();
        for cell in interp.mode(Mode::One).cells() {
            for (a, b) in cell.e.components().iter().zip(j.components()) {
                assert!((a - b).norm() < 1e-15);
            }
        }
        assert_eq!((t.forward_calls, t.backward_calls), (1, 1));
    }
}

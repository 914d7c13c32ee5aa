//! Integration test: non-finite fields abort the step before the backward
//! transform, and a checkpoint rolls the solver back.

use psatd_core::constants::C;
use psatd_core::{CellIndex, Complex64, Cylindrical, GridShape, Mode};
use psatd_engine::{SolverConfig, SpectralSolver, StepError};
use psatd_kernel::Backend;
use psatd_test_utils::fixtures::test_wavenumbers;
use psatd_test_utils::{MockDeposition, MockTransform};

const NZ: usize = 6;
const NR: usize = 3;
const D: f64 = 1.0e-6;

fn solver(check_finite: bool) -> SpectralSolver {
    let config = SolverConfig {
        nz: NZ,
        nr: NR,
        dz: D,
        dr: D,
        dt: 0.5 * D / C,
        check_finite,
        backend: Backend::Sequential,
        ..SolverConfig::default()
    };
    let w = test_wavenumbers(NZ, NR, D, D);
    SpectralSolver::new(config, [w.clone(), w]).unwrap()
}

fn deposition() -> MockDeposition {
    MockDeposition::uniform(
        Cylindrical::new(
            Complex64::new(1.0e-12, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0e-12, 0.0),
        ),
        Complex64::new(1.0e-20, 0.0),
    )
}

fn poison(s: &mut SpectralSolver, mode: Mode, at: CellIndex) {
    s.spectral_mut().mode_mut(mode).cell_mut(at).e.z = Complex64::new(f64::NAN, 0.0);
}

// ── Tests ────────────────────────────────────────────────────────────

#[test]
fn nan_in_field_aborts_before_backward_transform() {
    let mut s = solver(true);
    let mut dep = deposition();
    let mut fft = MockTransform::new();
    s.step(&mut dep, &mut fft).unwrap();

    let at = CellIndex::new(2, 1);
    poison(&mut s, Mode::One, at);
    match s.step(&mut dep, &mut fft) {
        Err(StepError::NonFinite { mode, cell, .. }) => {
            assert_eq!(mode, Mode::One);
            assert_eq!(cell, at);
        }
        other => panic!("expected NonFinite, got {other:?}"),
    }
    assert_eq!(s.step_count(), 1);
    // Backward ran for both modes of the first step only.
    assert_eq!(fft.backward_calls, 2);
    assert_eq!(s.last_metrics().step, 1);
}

#[test]
fn nan_passes_through_when_check_disabled() {
    let mut s = solver(false);
    let mut dep = deposition();
    let mut fft = MockTransform::new();
    poison(&mut s, Mode::Zero, CellIndex::new(0, 0));
    s.step(&mut dep, &mut fft).unwrap();
    assert_eq!(s.step_count(), 1);
    assert!(s.last_metrics().stage("check_finite").is_none());
    assert!(s.check_finite().is_err());
}

#[test]
fn restore_rolls_back_after_failure() {
    let mut s = solver(true);
    let mut dep = deposition();
    let mut fft = MockTransform::new();
    for _ in 0..2 {
        s.step(&mut dep, &mut fft).unwrap();
    }
    let saved = s.snapshot();
    assert_eq!(saved.step_count, 2);

    poison(&mut s, Mode::Zero, CellIndex::new(1, 1));
    assert!(s.step(&mut dep, &mut fft).is_err());

    s.restore(saved.clone()).unwrap();
    assert_eq!(s.step_count(), 2);
    assert!(s.check_finite().is_ok());
    s.step(&mut dep, &mut fft).unwrap();
    assert_eq!(s.step_count(), 3);
}

#[test]
fn replay_from_snapshot_is_bitwise_identical() {
    let mut s = solver(true);
    let mut dep = deposition();
    let mut fft = MockTransform::new();
    s.step(&mut dep, &mut fft).unwrap();
    let saved = s.snapshot();
    for _ in 0..3 {
        s.step(&mut dep, &mut fft).unwrap();
    }
    let first_run = s.snapshot();

    s.restore(saved).unwrap();
    for _ in 0..3 {
        s.step(&mut dep, &mut fft).unwrap();
    }
    assert_eq!(s.snapshot(), first_run);
}

#[test]
fn restore_rejects_foreign_shape() {
    let mut s = solver(true);
    let mut other = s.snapshot();
    other.spectral = psatd_grid::SpectralModeGrid::new(GridShape::new(NR, NZ).unwrap());
    assert!(s.restore(other).is_err());
    assert_eq!(s.step_count(), 0);
}

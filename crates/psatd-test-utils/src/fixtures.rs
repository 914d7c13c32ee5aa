//! Seeded field and source fixtures.
//!
//! - [`rng`]: a deterministic ChaCha8 generator.
//! - [`test_wavenumbers`]: FFT `kz` and a Hankel-like `kr` axis.
//! - [`random_spectral_mode`]: every spectral array filled with noise.
//! - [`transverse_wave`]: a divergence-free `E` in every cell.
//! - [`impose_gauss`] / [`charge_conserving_sources`]: make a cell obey
//!   Gauss's law and the continuity equation.

use psatd_core::constants::EPSILON_0;
use psatd_core::{Circular, Complex64, GridShape, Mode, I};
use psatd_grid::{
    fft_wavenumbers, CellCoefficients, SpectralCell, SpectralMode, Wavenumbers,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Deterministic generator for `seed`.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Complex number with both parts uniform in `[-scale, scale)`.
pub fn random_complex<R: Rng>(rng: &mut R, scale: f64) -> Complex64 {
    Complex64::new(
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
    )
}

/// Circular vector with [`random_complex`] components.
pub fn random_circular<R: Rng>(rng: &mut R, scale: f64) -> Circular {
    Circular::new(
        random_complex(rng, scale),
        random_complex(rng, scale),
        random_complex(rng, scale),
    )
}

/// `kz = 2π fftfreq(nz, dz)` and `kr[ir] = (ir + 1) π / (nr dr)`.
///
/// The radial axis mimics the spacing of Hankel-transform wavenumbers and
/// never contains zero.
pub fn test_wavenumbers(nz: usize, nr: usize, dz: f64, dr: f64) -> Wavenumbers {
    let kz = fft_wavenumbers(nz, dz);
    let kr: Vec<f64> = (0..nr)
        .map(|ir| (ir as f64 + 1.0) * PI / (nr as f64 * dr))
        .collect();
    Wavenumbers::from_axes(&kz, &kr).expect("test wavenumber axes are non-empty")
}

/// A mode with every spectral array filled with uniform noise of
/// amplitude `scale`.
pub fn random_spectral_mode<R: Rng>(
    rng: &mut R,
    mode: Mode,
    shape: GridShape,
    scale: f64,
) -> SpectralMode {
    let mut m = SpectralMode::new(mode, shape);
    for cell in m.cells_mut() {
        cell.e = random_circular(rng, scale);
        cell.b = random_circular(rng, scale);
        cell.j = random_circular(rng, scale);
        cell.rho_prev = random_complex(rng, scale);
        cell.rho_next = random_complex(rng, scale);
    }
    m
}

/// `Ep = Em = amplitude`, `Ez = 0` in every cell, which has zero
/// divergence for any `(kz, kr)`. `B`, `J` and `rho` are zero.
pub fn transverse_wave(mode: Mode, shape: GridShape, amplitude: f64) -> SpectralMode {
    let mut m = SpectralMode::new(mode, shape);
    let a = Complex64::new(amplitude, 0.0);
    for cell in m.cells_mut() {
        cell.e = Circular::new(a, a, Complex64::new(0.0, 0.0));
    }
    m
}

/// Add a longitudinal part to `E` so that `div E = rho_prev / ε0`.
///
/// Leaves cells with `k = 0` untouched.
pub fn impose_gauss(cell: &mut SpectralCell, kz: f64, kr: f64) {
    let k2 = kz * kz + kr * kr;
    if k2 == 0.0 {
        return;
    }
    let residual = cell.rho_prev / EPSILON_0 - cell.e.divergence(kr, kz);
    let s = residual / k2;
    cell.e.p += 0.5 * kr * s;
    cell.e.m -= 0.5 * kr * s;
    cell.e.z -= I * kz * s;
}

/// Random `J` and `rho_prev`, with `rho_next` chosen so that
/// `j_corr_coef (rho_next − T rho_prev) + div J = 0`.
///
/// At `k = 0` the charge is set to zero and `J` is kept.
pub fn charge_conserving_sources<R: Rng>(
    rng: &mut R,
    cell: &mut SpectralCell,
    coeffs: &CellCoefficients,
    scale: f64,
) {
    cell.j = random_circular(rng, scale);
    if coeffs.inv_k2 == 0.0 {
        cell.rho_prev = Complex64::new(0.0, 0.0);
        cell.rho_next = Complex64::new(0.0, 0.0);
        return;
    }
    cell.rho_prev = random_complex(rng, scale);
    let div_j = cell.j.divergence(coeffs.kr, coeffs.kz);
    cell.rho_next = coeffs.t * cell.rho_prev - div_j / coeffs.j_corr_coef;
}

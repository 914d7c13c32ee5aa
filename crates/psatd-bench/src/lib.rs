//! Benchmark profiles for the PSATD field solver.
//!
//! - [`reference_profile`]: 256x128 grid (32K cells per mode)
//! - [`stress_profile`]: 1024x256 grid (256K cells per mode)
//! - [`build_solver`]: a solver on FFT `kz` and Hankel-like `kr` axes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::f64::consts::PI;

use psatd_core::constants::C;
use psatd_engine::{ConfigError, SolverConfig, SpectralSolver};
use psatd_kernel::Backend;

/// Reference profile: 256x128 grid, 0.1 µm cells, `dt = dz / c`,
/// charge-conserving correction on, binomial filter off.
pub fn reference_profile(backend: Backend) -> SolverConfig {
    let d = 1.0e-7;
    SolverConfig {
        nz: 256,
        nr: 128,
        dz: d,
        dr: d,
        dt: d / C,
        backend,
        ..SolverConfig::default()
    }
}

/// Stress profile: 1024x256 grid in a Galilean frame moving at `0.99c`.
pub fn stress_profile(backend: Backend) -> SolverConfig {
    SolverConfig {
        nz: 1024,
        nr: 256,
        v_galilean: 0.99 * C,
        ..reference_profile(backend)
    }
}

/// `kr[ir] = (ir + 1) π / (nr dr)`, the asymptotic spacing of Hankel
/// transform wavenumbers.
pub fn radial_wavenumbers(nr: usize, dr: f64) -> Vec<f64> {
    (0..nr)
        .map(|ir| (ir as f64 + 1.0) * PI / (nr as f64 * dr))
        .collect()
}

/// Build a solver for `config` with [`radial_wavenumbers`] on both modes.
pub fn build_solver(config: SolverConfig) -> Result<SpectralSolver, ConfigError> {
    let kr = radial_wavenumbers(config.nr, config.dr);
    SpectralSolver::with_radial_axes(config, [kr.as_slice(), kr.as_slice()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        for backend in [Backend::Sequential, Backend::Parallel] {
            assert!(reference_profile(backend).validate().is_ok());
            assert!(stress_profile(backend).validate().is_ok());
        }
    }

    #[test]
    fn radial_axis_is_positive_and_increasing() {
        let kr = radial_wavenumbers(16, 1.0e-7);
        assert!(kr[0] > 0.0);
        assert!(kr.windows(2).all(|w| w[1] > w[0]));
    }
}

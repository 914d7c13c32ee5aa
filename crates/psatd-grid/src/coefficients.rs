//! Precomputed per-cell PSATD coefficients.
//!
//! The coefficients are the exact one-step solution of Maxwell's equations
//! in a frame moving at `V` along `z`, for a current held constant over
//! the step and a charge density that obeys the continuity equation. At
//! `V = 0` they reduce to the standard PSATD set.

use crate::wavenumber::Wavenumbers;
use psatd_core::constants::{C, EPSILON_0, MU_0};
use psatd_core::{CellIndex, CoefficientError, Complex64, GridShape, Mode, I};

/// Coefficients of one `(kz, kr)` cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellCoefficients {
    /// Longitudinal wavenumber.
    pub kz: f64,
    /// Radial wavenumber.
    pub kr: f64,
    /// `1 / k²`, zero at `k = 0`.
    pub inv_k2: f64,
    /// `cos(ω dt)`.
    pub c: f64,
    /// `sin(ω dt) / ω`, `dt` at `ω = 0`.
    pub s_w: f64,
    /// Galilean phase factor `exp(i kz V dt)`.
    pub t: Complex64,
    /// Factor applied to `rho_prev` when `rho_next` is rebuilt from the
    /// current divergence.
    pub t_rho: Complex64,
    /// Weight of `rho_prev` in the electric-field update.
    pub rho_prev_coef: Complex64,
    /// Weight of `rho_next` in the electric-field update.
    pub rho_next_coef: Complex64,
    /// Weight of the current in the field update.
    pub j_coef: Complex64,
    /// Weight of the charge mismatch in the current correction.
    pub j_corr_coef: Complex64,
}

impl CellCoefficients {
    /// Vacuum coefficients for one cell.
    ///
    /// `dt` must be positive and `|v_galilean| < c`; [`CoefficientCache::new`]
    /// checks both before calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use psatd_grid::CellCoefficients;
    ///
    /// let k0 = CellCoefficients::psatd(0.0, 0.0, 1e-9, 0.0);
    /// assert_eq!(k0.c, 1.0);
    /// assert_eq!(k0.s_w, 1e-9);
    /// assert_eq!(k0.inv_k2, 0.0);
    /// ```
    pub fn psatd(kz: f64, kr: f64, dt: f64, v_galilean: f64) -> Self {
        let k2 = kz * kz + kr * kr;
        let mu_c2 = MU_0 * C * C;

        if k2 == 0.0 {
            return Self {
                kz,
                kr,
                inv_k2: 0.0,
                c: 1.0,
                s_w: dt,
                t: Complex64::new(1.0, 0.0),
                t_rho: Complex64::new(-1.0, 0.0),
                rho_prev_coef: Complex64::new(-C * C * dt * dt / (3.0 * EPSILON_0), 0.0),
                rho_next_coef: Complex64::new(C * C * dt * dt / (6.0 * EPSILON_0), 0.0),
                j_coef: Complex64::new(0.5 * mu_c2 * dt * dt, 0.0),
                j_corr_coef: Complex64::new(1.0 / dt, 0.0),
            };
        }

        let inv_k2 = 1.0 / k2;
        let w = C * k2.sqrt();
        let c = (w * dt).cos();
        let s_w = (w * dt).sin() / w;
        let kappa = kz * v_galilean;
        let half = 0.5 * kappa * dt;
        let t = Complex64::from_polar(1.0, kappa * dt);

        // i κ / (T − 1), written with T − 1 = 2i sin(κdt/2) exp(iκdt/2).
        let j_corr_coef = if kappa == 0.0 {
            Complex64::new(1.0 / dt, 0.0)
        } else {
            Complex64::from_polar(kappa / (2.0 * half.sin()), -half)
        };
        let t_rho = -1.0 / (j_corr_coef * dt);

        let j_coef = mu_c2 * (1.0 + t * (I * kappa * s_w - c)) / (w * w - kappa * kappa);
        let a = I * kappa * j_coef - mu_c2 * t * s_w;
        let rho_next_coef = (1.0 / EPSILON_0 + a * j_corr_coef) * inv_k2;
        let rho_prev_coef = t * (c / EPSILON_0 + a * j_corr_coef) * inv_k2;

        Self {
            kz,
            kr,
            inv_k2,
            c,
            s_w,
            t,
            t_rho,
            rho_prev_coef,
            rho_next_coef,
            j_coef,
            j_corr_coef,
        }
    }

    /// Name of the first coefficient that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        let real = [
            ("kz", self.kz),
            ("kr", self.kr),
            ("inv_k2", self.inv_k2),
            ("C", self.c),
            ("S_w", self.s_w),
        ];
        let complex = [
            ("T", self.t),
            ("T_rho", self.t_rho),
            ("rho_prev_coef", self.rho_prev_coef),
            ("rho_next_coef", self.rho_next_coef),
            ("j_coef", self.j_coef),
            ("j_corr_coef", self.j_corr_coef),
        ];
        real.iter()
            .find(|(_, v)| !v.is_finite())
            .map(|(name, _)| *name)
            .or_else(|| {
                complex
                    .iter()
                    .find(|(_, v)| !v.is_finite())
                    .map(|(name, _)| *name)
            })
    }
}

/// Coefficients for every cell of one mode, fixed for a given `dt` and `V`.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientCache {
    shape: GridShape,
    mode: Mode,
    dt: f64,
    v_galilean: f64,
    cells: Vec<CellCoefficients>,
}

impl CoefficientCache {
    /// Evaluate the coefficients for `mode` on the given wavenumbers.
    ///
    /// # Errors
    ///
    /// - [`CoefficientError::InvalidTimestep`] if `dt` is not finite and positive.
    /// - [`CoefficientError::SuperluminalFrame`] if `V` is not finite or `|V| >= c`.
    /// - [`CoefficientError::NonFinite`] if any coefficient is NaN or
    ///   infinite, including when a wavenumber itself is.
    pub fn new(
        wavenumbers: &Wavenumbers,
        mode: Mode,
        dt: f64,
        v_galilean: f64,
    ) -> Result<Self, CoefficientError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(CoefficientError::InvalidTimestep { value: dt });
        }
        if !(v_galilean.is_finite() && v_galilean.abs() < C) {
            return Err(CoefficientError::SuperluminalFrame {
                velocity: v_galilean,
            });
        }

        let shape = wavenumbers.shape();
        let mut cells = Vec::with_capacity(shape.cell_count());
        for (i, (&kz, &kr)) in wavenumbers.kz().iter().zip(wavenumbers.kr()).enumerate() {
            let coeffs = CellCoefficients::psatd(kz, kr, dt, v_galilean);
            if let Some(name) = coeffs.first_non_finite() {
                return Err(CoefficientError::NonFinite {
                    name,
                    cell: shape.cell(i),
                });
            }
            cells.push(coeffs);
        }

        log::debug!(
            "built {mode} coefficients on {shape} grid: dt={dt:e}, V={v_galilean:e}"
        );
        Ok(Self {
            shape,
            mode,
            dt,
            v_galilean,
            cells,
        })
    }

    /// Assemble a cache from explicit per-cell records.
    pub fn from_parts(
        shape: GridShape,
        mode: Mode,
        dt: f64,
        v_galilean: f64,
        cells: Vec<CellCoefficients>,
    ) -> Result<Self, CoefficientError> {
        shape.check_len("coefficients", cells.len())?;
        Ok(Self {
            shape,
            mode,
            dt,
            v_galilean,
            cells,
        })
    }

    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Mode these coefficients were built for.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Timestep.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Galilean frame velocity.
    pub fn v_galilean(&self) -> f64 {
        self.v_galilean
    }

    /// Coefficients at one cell.
    pub fn at(&self, at: CellIndex) -> &CellCoefficients {
        &self.cells[self.shape.flat(at.iz, at.ir)]
    }

    /// All cells, storage order.
    pub fn cells(&self) -> &[CellCoefficients] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f64 = 1.0e-15;

    fn close(a: Complex64, b: Complex64, tol: f64) -> bool {
        (a - b).norm() <= tol * b.norm().max(1e-300)
    }

    #[test]
    fn zero_wavenumber_limits() {
        let k = CellCoefficients::psatd(0.0, 0.0, DT, 0.3 * C);
        assert_eq!(k.t, Complex64::new(1.0, 0.0));
        assert_eq!(k.j_corr_coef, Complex64::new(1.0 / DT, 0.0));
        assert_eq!(k.t_rho, Complex64::new(-1.0, 0.0));
        assert_eq!(k.j_coef.re, 0.5 * MU_0 * C * C * DT * DT);
        assert!(k.first_non_finite().is_none());
    }

    #[test]
    fn static_frame_matches_standard_psatd() {
        let (kz, kr) = (2.0e6, 1.5e6);
        let k = CellCoefficients::psatd(kz, kr, DT, 0.0);
        let w2 = C * C * (kz * kz + kr * kr);
        let j_std = MU_0 * C * C * (1.0 - k.c) / w2;
        let next_std = C * C * (1.0 - k.s_w / DT) / (EPSILON_0 * w2);
        let prev_std = C * C * (k.c - k.s_w / DT) / (EPSILON_0 * w2);
        assert_eq!(k.t, Complex64::new(1.0, 0.0));
        assert!(close(k.t_rho, Complex64::new(-1.0, 0.0), 1e-15));
        assert!(close(k.j_coef, Complex64::new(j_std, 0.0), 1e-6));
        assert!(close(k.rho_next_coef, Complex64::new(next_std, 0.0), 1e-5));
        assert!(close(k.rho_prev_coef, Complex64::new(prev_std, 0.0), 1e-5));
    }

    #[test]
    fn small_velocity_is_continuous() {
        let (kz, kr) = (3.0e5, 4.0e5);
        let dt = 0.3 / (C * 5.0e5);
        let a = CellCoefficients::psatd(kz, kr, dt, 0.0);
        let b = CellCoefficients::psatd(kz, kr, dt, 1.0);
        assert!(close(b.j_coef, a.j_coef, 1e-6));
        assert!(close(b.rho_next_coef, a.rho_next_coef, 1e-6));
        assert!(close(b.j_corr_coef, a.j_corr_coef, 1e-6));
    }

    #[test]
    fn rejects_bad_timestep_and_velocity() {
        let w = Wavenumbers::from_axes(&[0.0, 1.0], &[1.0]).unwrap();
        assert_eq!(
            CoefficientCache::new(&w, Mode::Zero, 0.0, 0.0).unwrap_err(),
            CoefficientError::InvalidTimestep { value: 0.0 }
        );
        assert!(matches!(
            CoefficientCache::new(&w, Mode::Zero, 1.0, -C),
            Err(CoefficientError::SuperluminalFrame { .. })
        ));
        assert!(matches!(
            CoefficientCache::new(&w, Mode::Zero, 1.0, f64::NAN),
            Err(CoefficientError::SuperluminalFrame { .. })
        ));
    }

    #[test]
    fn non_finite_wavenumber_is_reported() {
        let w = Wavenumbers::from_axes(&[0.0, f64::NAN], &[0.0, 1.0]).unwrap();
        let err = CoefficientCache::new(&w, Mode::One, 1.0e-12, 0.0).unwrap_err();
        assert_eq!(
            err,
            CoefficientError::NonFinite {
                name: "kz",
                cell: CellIndex::new(1, 0),
            }
        );
    }

    #[test]
    fn from_parts_checks_length() {
        let shape = GridShape::new(2, 2).unwrap();
        let cell = CellCoefficients::psatd(0.0, 0.0, 1.0, 0.0);
        assert!(CoefficientCache::from_parts(shape, Mode::Zero, 1.0, 0.0, vec![cell; 3]).is_err());
        let cache =
            CoefficientCache::from_parts(shape, Mode::Zero, 1.0, 0.0, vec![cell; 4]).unwrap();
        assert_eq!(cache.at(CellIndex::new(1, 1)), &cell);
    }

    proptest! {
        #[test]
        fn galilean_phase_has_unit_modulus(
            kz in -1.0e6f64..1.0e6,
            kr in 0.0f64..1.0e6,
            beta in -0.99f64..0.99,
        ) {
            let k = CellCoefficients::psatd(kz, kr, DT, beta * C);
            prop_assert!((k.t.norm() - 1.0).abs() < 1e-12);
            prop_assert!(k.first_non_finite().is_none());
            // χ dt T_rho = −1 by construction.
            prop_assert!((k.j_corr_coef * DT * k.t_rho + 1.0).norm() < 1e-9);
        }
    }
}

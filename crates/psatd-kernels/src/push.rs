//! The analytic PSATD update of `E` and `B` over one timestep.
//!
//! With `c²` the speed of light squared and `M` the spectral curl in the
//! `(p, m, z)` basis, each cell is advanced as
//!
//! ```text
//! E' = T C E + c² T S_w (M B − μ0 J) + j_coef i kz V J + grad(rho_diff)
//! B' = T C B − T S_w M E_old + j_coef M J
//! ```
//!
//! where `grad` maps a scalar `s` to `(kr s/2, −kr s/2, −i kz s)`. The
//! charge term `rho_diff` either comes from the transformed `rho` arrays
//! directly or is rebuilt from the divergences of `E` and `J`
//! ([`PushOptions::use_true_rho`]).

use psatd_core::constants::{C2, EPSILON_0, MU_0};
use psatd_core::{CellIndex, Circular, GridError, GridShape, I};
use psatd_grid::{CoefficientCache, SpectralCell};
use psatd_kernel::CellKernel;

/// Switches for [`FieldPusher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PushOptions {
    /// Include the current and charge source terms. When false the push
    /// is a pure vacuum rotation.
    pub ptcl_feedback: bool,
    /// Take `rho_diff` from `rho_prev`/`rho_next`. When false it is rebuilt
    /// from `div E` and `div J`, which keeps Gauss's law tied to the fields.
    pub use_true_rho: bool,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            ptcl_feedback: true,
            use_true_rho: false,
        }
    }
}

/// Advances `E` and `B` by one timestep.
#[derive(Clone, Copy, Debug)]
pub struct FieldPusher<'a> {
    coeffs: &'a CoefficientCache,
    options: PushOptions,
}

impl<'a> FieldPusher<'a> {
    /// Pusher for grids of `shape`, using the cache's `dt` and `V`.
    pub fn new(
        shape: GridShape,
        coeffs: &'a CoefficientCache,
        options: PushOptions,
    ) -> Result<Self, GridError> {
        shape.check_same("coefficients", coeffs.shape())?;
        Ok(Self { coeffs, options })
    }

    /// Active switches.
    pub fn options(&self) -> PushOptions {
        self.options
    }
}

impl CellKernel for FieldPusher<'_> {
    type Cell = SpectralCell;

    fn name(&self) -> &str {
        "push_eb"
    }

    fn apply(&self, at: CellIndex, cell: &mut SpectralCell) {
        let k = self.coeffs.at(at);
        let (kz, kr) = (k.kz, k.kr);
        let tc = k.t * k.c;
        let ts = k.t * k.s_w;

        // B' reads the pre-update E.
        let e_old = cell.e;
        let b = cell.b;

        let curl_b = Circular::new(
            -I * 0.5 * kr * b.z + kz * b.p,
            -I * 0.5 * kr * b.z - kz * b.m,
            I * kr * b.p + I * kr * b.m,
        );
        let curl_e = Circular::new(
            -I * 0.5 * kr * e_old.z + kz * e_old.p,
            -I * 0.5 * kr * e_old.z - kz * e_old.m,
            I * kr * e_old.p + I * kr * e_old.m,
        );

        if !self.options.ptcl_feedback {
            cell.e.p = tc * e_old.p + C2 * ts * curl_b.p;
            cell.e.m = tc * e_old.m + C2 * ts * curl_b.m;
            cell.e.z = tc * e_old.z + C2 * ts * curl_b.z;
            cell.b.p = tc * b.p - ts * curl_e.p;
            cell.b.m = tc * b.m - ts * curl_e.m;
            cell.b.z = tc * b.z - ts * curl_e.z;
            return;
        }

        let j = cell.j;
        let rho_diff = if self.options.use_true_rho {
            k.rho_next_coef * cell.rho_next - k.rho_prev_coef * cell.rho_prev
        } else {
            let div_e = e_old.divergence(kr, kz);
            let div_j = j.divergence(kr, kz);
            (k.t * k.rho_next_coef - k.rho_prev_coef) * EPSILON_0 * div_e
                + k.t_rho * k.rho_next_coef * self.coeffs.dt() * div_j
        };
        let drift = k.j_coef * I * kz * self.coeffs.v_galilean();

        let src = curl_b - j * MU_0;
        cell.e.p = tc * e_old.p + 0.5 * kr * rho_diff + drift * j.p + C2 * ts * src.p;
        cell.e.m = tc * e_old.m - 0.5 * kr * rho_diff + drift * j.m + C2 * ts * src.m;
        cell.e.z = tc * e_old.z - I * kz * rho_diff + drift * j.z + C2 * ts * src.z;

        let curl_j = Circular::new(
            -I * 0.5 * kr * j.z + kz * j.p,
            -I * 0.5 * kr * j.z - kz * j.m,
            I * kr * j.p + I * kr * j.m,
        );
        cell.b.p = tc * b.p - ts * curl_e.p + k.j_coef * curl_j.p;
        cell.b.m = tc * b.m - ts * curl_e.m + k.j_coef * curl_j.m;
        cell.b.z = tc * b.z - ts * curl_e.z + k.j_coef * curl_j.z;
    }
}

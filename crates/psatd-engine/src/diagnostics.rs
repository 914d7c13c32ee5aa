//! Field diagnostics computed directly on the spectral grid.

use psatd_core::constants::{C2, EPSILON_0};
use psatd_core::{CellIndex, GridError, Mode, SpectralComponent};
use psatd_grid::{CoefficientCache, SpectralModeGrid};
use smallvec::SmallVec;
use std::fmt;

/// Which charge density Gauss's law is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RhoLevel {
    /// `rho_prev`: the charge at the start of the step (after the shift).
    Prev,
    /// `rho_next`: the charge at the end of the step (after the push).
    Next,
}

/// A spectral value that is NaN or infinite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonFiniteCell {
    /// Cell position.
    pub cell: CellIndex,
    /// First offending component in that cell.
    pub component: SpectralComponent,
}

impl fmt::Display for NonFiniteCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.component.name(), self.cell)
    }
}

/// Electromagnetic energy of one mode, up to a constant factor:
/// `Σ (2|Ep|² + 2|Em|² + |Ez|²) + c² (2|Bp|² + 2|Bm|² + |Bz|²)`.
pub fn field_energy(grid: &SpectralModeGrid, mode: Mode) -> f64 {
    grid.mode(mode)
        .cells()
        .iter()
        .map(|c| c.e.weighted_norm_sqr() + C2 * c.b.weighted_norm_sqr())
        .sum()
}

/// Largest `|div E − rho / ε0|` over the cells with `k ≠ 0`.
///
/// At `k = 0` the divergence vanishes identically, so that cell carries
/// no information about Gauss's law and is skipped.
pub fn gauss_residual(
    grid: &SpectralModeGrid,
    mode: Mode,
    coeffs: &CoefficientCache,
    level: RhoLevel,
) -> Result<f64, GridError> {
    grid.shape().check_same("coefficients", coeffs.shape())?;
    let residual = grid
        .mode(mode)
        .cells()
        .iter()
        .zip(coeffs.cells())
        .filter(|(_, k)| k.inv_k2 != 0.0)
        .map(|(cell, k)| {
            let rho = match level {
                RhoLevel::Prev => cell.rho_prev,
                RhoLevel::Next => cell.rho_next,
            };
            (cell.e.divergence(k.kr, k.kz) - rho / EPSILON_0).norm()
        })
        .fold(0.0, f64::max);
    Ok(residual)
}

/// The first cells (up to four) holding a non-finite value, in storage
/// order.
pub fn scan_non_finite(grid: &SpectralModeGrid, mode: Mode) -> SmallVec<[NonFiniteCell; 4]> {
    let m = grid.mode(mode);
    let shape = m.shape();
    m.cells()
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| {
            cell.first_non_finite().map(|component| NonFiniteCell {
                cell: shape.cell(i),
                component,
            })
        })
        .take(4)
        .collect()
}

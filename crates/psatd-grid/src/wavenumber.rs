//! Per-cell longitudinal and radial wavenumbers.

use psatd_core::{CellIndex, GridError, GridShape};
use std::f64::consts::PI;

/// `2π · fftfreq(n, d)`: discrete Fourier wavenumbers in numpy ordering
/// (zero, positive frequencies, then negative frequencies).
///
/// # Examples
///
/// ```
/// use psatd_grid::fft_wavenumbers;
///
/// let k = fft_wavenumbers(4, 1.0);
/// let q = std::f64::consts::PI / 2.0;
/// assert_eq!(k, vec![0.0, q, -2.0 * q, -q]);
/// ```
pub fn fft_wavenumbers(n: usize, d: f64) -> Vec<f64> {
    let scale = 2.0 * PI / (n as f64 * d);
    let half = n.div_ceil(2);
    (0..n)
        .map(|i| {
            let f = if i < half {
                i as f64
            } else {
                i as f64 - n as f64
            };
            f * scale
        })
        .collect()
}

/// `kz` and `kr` for every cell of a grid, in storage order.
#[derive(Clone, Debug, PartialEq)]
pub struct Wavenumbers {
    shape: GridShape,
    kz: Vec<f64>,
    kr: Vec<f64>,
}

impl Wavenumbers {
    /// Broadcast a longitudinal axis (`nz` values) and a radial axis
    /// (`nr` values) over the grid.
    pub fn from_axes(kz_axis: &[f64], kr_axis: &[f64]) -> Result<Self, GridError> {
        let shape = GridShape::new(kz_axis.len(), kr_axis.len())?;
        let mut kz = Vec::with_capacity(shape.cell_count());
        let mut kr = Vec::with_capacity(shape.cell_count());
        for &z in kz_axis {
            for &r in kr_axis {
                kz.push(z);
                kr.push(r);
            }
        }
        Ok(Self { shape, kz, kr })
    }

    /// Use full per-cell arrays, each of length `shape.cell_count()`.
    pub fn from_arrays(shape: GridShape, kz: Vec<f64>, kr: Vec<f64>) -> Result<Self, GridError> {
        shape.check_len("kz", kz.len())?;
        shape.check_len("kr", kr.len())?;
        Ok(Self { shape, kz, kr })
    }

    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// `(kz, kr)` at one cell.
    pub fn at(&self, at: CellIndex) -> (f64, f64) {
        let i = self.shape.flat(at.iz, at.ir);
        (self.kz[i], self.kr[i])
    }

    /// Longitudinal wavenumbers, storage order.
    pub fn kz(&self) -> &[f64] {
        &self.kz
    }

    /// Radial wavenumbers, storage order.
    pub fn kr(&self) -> &[f64] {
        &self.kr
    }
}

//! Real per-cell spectral filter weights.

use crate::wavenumber::Wavenumbers;
use psatd_core::{CellIndex, GridError, GridShape};

/// One real weight per spectral cell.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterWeights {
    shape: GridShape,
    weights: Vec<f64>,
}

impl FilterWeights {
    /// Binomial smoothing in both directions:
    /// `cos²(kz dz / 2) · cos²(kr dr / 2)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use psatd_core::CellIndex;
    /// use psatd_grid::{FilterWeights, Wavenumbers};
    ///
    /// let k = Wavenumbers::from_axes(&[0.0, std::f64::consts::PI], &[0.0]).unwrap();
    /// let w = FilterWeights::binomial(&k, 1.0, 1.0);
    /// assert_eq!(w.at(CellIndex::new(0, 0)), 1.0);
    /// assert!(w.at(CellIndex::new(1, 0)) < 1e-30);
    /// ```
    pub fn binomial(wavenumbers: &Wavenumbers, dz: f64, dr: f64) -> Self {
        let weights = wavenumbers
            .kz()
            .iter()
            .zip(wavenumbers.kr())
            .map(|(&kz, &kr)| {
                let cz = (0.5 * kz * dz).cos();
                let cr = (0.5 * kr * dr).cos();
                cz * cz * cr * cr
            })
            .collect();
        Self {
            shape: wavenumbers.shape(),
            weights,
        }
    }

    /// Use an explicit flat array of `shape.cell_count()` weights.
    pub fn from_vec(shape: GridShape, weights: Vec<f64>) -> Result<Self, GridError> {
        shape.check_len("filter weights", weights.len())?;
        Ok(Self { shape, weights })
    }

    /// All weights equal to `value`.
    pub fn uniform(shape: GridShape, value: f64) -> Self {
        Self {
            shape,
            weights: vec![value; shape.cell_count()],
        }
    }

    /// Pointwise square: applying it once equals applying `self` twice.
    pub fn squared(&self) -> Self {
        Self {
            shape: self.shape,
            weights: self.weights.iter().map(|w| w * w).collect(),
        }
    }

    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Weight at one cell.
    pub fn at(&self, at: CellIndex) -> f64 {
        self.weights[self.shape.flat(at.iz, at.ir)]
    }

    /// All weights, storage order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

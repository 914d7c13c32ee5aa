//! Interfaces to the collaborators around the field update: the
//! Hankel–Fourier transform and particle deposition.
//!
//! The solver only drives these; concrete implementations live with the
//! particle code.

use crate::interpolation::InterpolationGrid;
use crate::spectral::SpectralModeGrid;
use psatd_core::Mode;
use std::error::Error;
use std::fmt;

/// A spectral transform failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformError {
    /// Human-readable description of the failure.
    pub reason: String,
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform failed: {}", self.reason)
    }
}

impl Error for TransformError {}

/// Particle deposition failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositionError {
    /// Human-readable description of the failure.
    pub reason: String,
}

impl fmt::Display for DepositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deposition failed: {}", self.reason)
    }
}

impl Error for DepositionError {}

/// Per-mode map between the real-space and spectral grids.
///
/// Both directions are shape-preserving and change basis:
/// `(r, θ, z)` on the interpolation side, `(p, m, z)` on the spectral side.
pub trait SpectralTransform {
    /// Transform the deposited `J` and `rho` of `mode` into the spectral
    /// `J` and `rho_next`. Must leave `E`, `B` and `rho_prev` untouched.
    fn forward(
        &mut self,
        mode: Mode,
        interp: &InterpolationGrid,
        spectral: &mut SpectralModeGrid,
    ) -> Result<(), TransformError>;

    /// Transform the spectral `E` and `B` of `mode` back to real space.
    fn backward(
        &mut self,
        mode: Mode,
        spectral: &SpectralModeGrid,
        interp: &mut InterpolationGrid,
    ) -> Result<(), TransformError>;
}

/// Accumulates particle current and charge onto the interpolation grid.
pub trait Deposition {
    /// Add this step's deposits for `mode` to the (already zeroed) buffers.
    fn deposit(&mut self, mode: Mode, grid: &mut InterpolationGrid) -> Result<(), DepositionError>;
}

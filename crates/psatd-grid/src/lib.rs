//! Grid storage and coefficient caches for the PSATD solver.
//!
//! - [`InterpolationGrid`]: per-mode real-space fields and deposition
//!   buffers in the cylindrical basis, plus the inverse cell volumes used to
//!   normalize them.
//! - [`SpectralModeGrid`]: per-mode E, B, J and two-level rho in the
//!   circular-polarization basis.
//! - [`CoefficientCache`]: the immutable per-cell coefficients of the
//!   analytic update for one `(wavenumbers, dt, V)` configuration.
//! - [`Wavenumbers`] and [`FilterWeights`]: per-cell `kz`/`kr` arrays and
//!   spectral damping weights.
//! - [`SpectralTransform`] and [`Deposition`]: the seams to the transform
//!   library and the particle code.
//!
//! Grid types run any [`CellKernel`](psatd_kernel::CellKernel) over one
//! mode through their `apply` methods.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coefficients;
pub mod filter;
pub mod interpolation;
pub mod spectral;
pub mod transform;
pub mod wavenumber;

pub use coefficients::{CellCoefficients, CoefficientCache};
pub use filter::FilterWeights;
pub use interpolation::{inverse_volumes, InterpCell, InterpolationGrid, InterpolationMode};
pub use spectral::{SpectralCell, SpectralMode, SpectralModeGrid};
pub use transform::{Deposition, DepositionError, SpectralTransform, TransformError};
pub use wavenumber::{fft_wavenumbers, Wavenumbers};

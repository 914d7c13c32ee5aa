//! PSATD field solver for the first two azimuthal modes.
//!
//! Provides the top-level [`SpectralSolver`], which owns the interpolation
//! and spectral grids, caches the analytic coefficients, and runs the
//! per-step pipeline against an external [`Deposition`] and
//! [`SpectralTransform`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod checkpoint;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod metrics;
pub mod solver;

pub use checkpoint::GridState;
pub use config::{ConfigError, FilterMode, SolverConfig};
pub use diagnostics::{field_energy, gauss_residual, scan_non_finite, NonFiniteCell, RhoLevel};
pub use error::{Direction, StepError};
pub use metrics::StepMetrics;
pub use solver::SpectralSolver;

pub use psatd_grid::{Deposition, DepositionError, SpectralTransform, TransformError};

//! psatd: an analytic spectral Maxwell solver for the first two azimuthal
//! modes of a quasi-cylindrical particle-in-cell code.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all psatd sub-crates. The spatial transforms and the particle
//! deposition stay with the host code, which plugs them in through
//! [`prelude::SpectralTransform`] and [`prelude::Deposition`].
//!
//! # Quick start
//!
//! ```rust
//! use psatd::prelude::*;
//!
//! // An identity "transform" that only moves the charge across.
//! struct CopyRho;
//! impl SpectralTransform for CopyRho {
//!     fn forward(
//!         &mut self,
//!         mode: Mode,
//!         interp: &InterpolationGrid,
//!         spectral: &mut SpectralModeGrid,
//!     ) -> Result<(), TransformError> {
//!         let src = interp.mode(mode).cells();
//!         for (dst, s) in spectral.mode_mut(mode).cells_mut().iter_mut().zip(src) {
//!             dst.rho_next = s.rho;
//!         }
//!         Ok(())
//!     }
//!     fn backward(
//!         &mut self,
//!         _mode: Mode,
//!         _spectral: &SpectralModeGrid,
//!         _interp: &mut InterpolationGrid,
//!     ) -> Result<(), TransformError> {
//!         Ok(())
//!     }
//! }
//!
//! struct NoParticles;
//! impl Deposition for NoParticles {
//!     fn deposit(
//!         &mut self,
//!         _mode: Mode,
//!         _grid: &mut InterpolationGrid,
//!     ) -> Result<(), DepositionError> {
//!         Ok(())
//!     }
//! }
//!
//! let config = SolverConfig { nz: 16, nr: 8, ..SolverConfig::default() };
//! let kr: Vec<f64> = (1..=8).map(|i| i as f64 * 2.0e6).collect();
//! let axes = [kr.as_slice(), kr.as_slice()];
//! let mut solver = SpectralSolver::with_radial_axes(config, axes).unwrap();
//! let metrics = solver.step(&mut NoParticles, &mut CopyRho).unwrap();
//! assert_eq!(metrics.step, 1);
//! assert!(metrics.stage("push_eb").is_some());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `psatd-core` | Grid shape, modes, field bases, constants, errors |
//! | [`kernel`] | `psatd-kernel` | `CellKernel` trait and schedulers |
//! | [`grid`] | `psatd-grid` | Interpolation and spectral grids, coefficients, filters |
//! | [`kernels`] | `psatd-kernels` | Reset, volume, correction, push, filter, shift |
//! | [`engine`] | `psatd-engine` | `SpectralSolver`, configuration, diagnostics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid shape, modes, field bases and errors (`psatd-core`).
pub use psatd_core as types;

/// Per-cell kernel trait and the sequential and rayon schedulers
/// (`psatd-kernel`).
pub use psatd_kernel as kernel;

/// Grid storage, coefficient caches and collaborator traits
/// (`psatd-grid`).
pub use psatd_grid as grid;

/// The kernels that make up one step (`psatd-kernels`).
pub use psatd_kernels as kernels;

/// The solver and its configuration (`psatd-engine`).
///
/// [`engine::SpectralSolver`] owns both grids and runs the step pipeline.
pub use psatd_engine as engine;

/// Common imports for driving a solver.
pub mod prelude {
    // Core types
    pub use psatd_core::{
        CellIndex, Circular, Complex64, Cylindrical, GridError, GridShape, Mode,
    };

    // Grids and collaborators
    pub use psatd_grid::{
        CoefficientCache, Deposition, DepositionError, FilterWeights, InterpolationGrid,
        SpectralModeGrid, SpectralTransform, TransformError, Wavenumbers,
    };

    // Scheduling
    pub use psatd_kernel::Backend;

    // Engine
    pub use psatd_engine::{
        ConfigError, FilterMode, GridState, SolverConfig, SpectralSolver, StepError, StepMetrics,
    };
}

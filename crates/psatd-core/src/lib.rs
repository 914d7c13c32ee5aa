//! Core types for the cylindrical PSATD field solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid shape and cell indexing, the azimuthal [`Mode`], the two field
//! bases ([`Cylindrical`] for the interpolation grid, [`Circular`] for the
//! spectral grid), physical constants, and the error types shared by the
//! rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod field;
pub mod shape;

pub use error::{CoefficientError, GridError};
pub use field::{Circular, Cylindrical, InterpComponent, SpectralComponent};
pub use num_complex::Complex64;
pub use shape::{CellIndex, GridShape, Mode};

/// The imaginary unit as a [`Complex64`].
pub const I: Complex64 = Complex64::new(0.0, 1.0);

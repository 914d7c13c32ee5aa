//! Cell-kernel trait and schedulers for the PSATD solver.
//!
//! Every field operation is a [`CellKernel`]: a pure per-cell update with
//! no cross-cell coupling. A [`Scheduler`] decides how the cells of one
//! mode are visited. [`Sequential`] and [`Parallel`] call the same
//! `apply`, so switching backends never changes results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kernel;
pub mod scheduler;

pub use kernel::CellKernel;
pub use scheduler::{Backend, Parallel, Scheduler, Sequential};

//! Schedulers that visit every cell of a mode with a [`CellKernel`].
//!
//! Both schedulers iterate exactly `nz * nr` cells in rows of `nr`. The
//! parallel scheduler hands one `iz` row to each rayon task; inside a row
//! cells are processed in order, like the sequential loop.

use crate::kernel::CellKernel;
use psatd_core::{CellIndex, GridShape};
use rayon::prelude::*;
use std::fmt;

/// Strategy for running a kernel over one mode's cells.
pub trait Scheduler {
    /// Apply `kernel` to every cell.
    ///
    /// `cells` must hold exactly `shape.cell_count()` records in row-major
    /// `(iz, ir)` order. Grid types guarantee this at construction.
    fn run<K: CellKernel>(&self, shape: GridShape, cells: &mut [K::Cell], kernel: &K);
}

/// Plain nested loop over `iz` then `ir`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequential;

impl Scheduler for Sequential {
    fn run<K: CellKernel>(&self, shape: GridShape, cells: &mut [K::Cell], kernel: &K) {
        debug_assert_eq!(cells.len(), shape.cell_count());
        for (iz, row) in cells.chunks_mut(shape.nr()).enumerate() {
            for (ir, cell) in row.iter_mut().enumerate() {
                kernel.apply(CellIndex { iz, ir }, cell);
            }
        }
    }
}

/// Rayon data-parallel dispatch, one task per longitudinal row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parallel;

impl Scheduler for Parallel {
    fn run<K: CellKernel>(&self, shape: GridShape, cells: &mut [K::Cell], kernel: &K) {
        debug_assert_eq!(cells.len(), shape.cell_count());
        cells
            .par_chunks_mut(shape.nr())
            .enumerate()
            .for_each(|(iz, row)| {
                for (ir, cell) in row.iter_mut().enumerate() {
                    kernel.apply(CellIndex { iz, ir }, cell);
                }
            });
    }
}

/// Runtime choice between the two schedulers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    /// [`Sequential`] loop.
    Sequential,
    /// [`Parallel`] rayon dispatch.
    #[default]
    Parallel,
}

impl Scheduler for Backend {
    fn run<K: CellKernel>(&self, shape: GridShape, cells: &mut [K::Cell], kernel: &K) {
        match self {
            Self::Sequential => Sequential.run(shape, cells, kernel),
            Self::Parallel => Parallel.run(shape, cells, kernel),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

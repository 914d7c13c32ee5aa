//! The [`CellKernel`] trait.
//!
//! Kernels are stateless operators applied independently to every cell of
//! one azimuthal mode. Anything a kernel needs besides the cell itself
//! (coefficients, weights, switches) is borrowed at construction.

use psatd_core::CellIndex;

/// An elementwise grid operation.
///
/// # Contract
///
/// - `apply()` reads and writes only the cell it is given (plus read-only
///   data indexed by `at`). No cross-cell coupling.
/// - `apply()` is deterministic: the same inputs give bitwise-identical
///   outputs regardless of which scheduler calls it or in what order.
/// - `&self`: kernels are shared between worker threads, hence `Sync`.
///
/// # Examples
///
/// A kernel that doubles a scalar cell:
///
/// ```
/// use psatd_core::{CellIndex, GridShape};
/// use psatd_kernel::{CellKernel, Scheduler, Sequential};
///
/// struct Double;
///
/// impl CellKernel for Double {
///     type Cell = f64;
///     fn name(&self) -> &str { "double" }
///     fn apply(&self, _at: CellIndex, cell: &mut f64) { *cell *= 2.0; }
/// }
///
/// let shape = GridShape::new(2, 2).unwrap();
/// let mut cells = vec![1.0, 2.0, 3.0, 4.0];
/// Sequential.run(shape, &mut cells, &Double);
/// assert_eq!(cells, vec![2.0, 4.0, 6.0, 8.0]);
/// ```
pub trait CellKernel: Sync {
    /// Per-cell record this kernel updates.
    type Cell: Send;

    /// Human-readable name for logging and metrics.
    fn name(&self) -> &str;

    /// Update one cell in place.
    fn apply(&self, at: CellIndex, cell: &mut Self::Cell);
}

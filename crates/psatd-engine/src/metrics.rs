//! Per-step timing metrics for the field solver.
//!
//! [`StepMetrics`] captures the wall-clock cost of one call to
//! [`SpectralSolver::step`](crate::SpectralSolver::step), broken down by
//! pipeline stage.

use indexmap::IndexMap;

/// Timing collected during a single step.
///
/// All durations are in microseconds. Stage timings keep pipeline order,
/// so iterating `stage_us` replays the step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Index of the step these metrics describe (1 for the first step).
    pub step: u64,
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Per-stage execution times: `stage name -> microseconds`.
    pub stage_us: IndexMap<&'static str, u64>,
}

impl StepMetrics {
    /// Time spent in one stage, if it ran.
    pub fn stage(&self, name: &str) -> Option<u64> {
        self.stage_us.get(name).copied()
    }
}

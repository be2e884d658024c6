//! Helpers shared by the trajectory summaries.

use fwdtrace_sim::tracking::Trajectory;

/// Minimum-frequency test used by the tidy filter.
///
/// A non-positive threshold always passes. Otherwise the trajectory's peak
/// (latest point on ties) must reach it; empty trajectories never do.
#[inline]
pub fn passes_min_frequency(trajectory: &Trajectory, min_frequency: f64) -> bool {
    if min_frequency <= 0.0 {
        return true;
    }
    trajectory
        .peak()
        .is_some_and(|p| p.frequency >= min_frequency)
}

//! Combining trajectory sets from separate epochs or replicates.

use fwdtrace_sim::tracking::TrajectorySet;
use tracing::debug;

/// Merge two trajectory sets.
///
/// Every mutation of `first` keeps its position in the output, followed by
/// mutations found only in `second`. A mutation present in both gets
/// `first`'s points followed by `second`'s points; generations are neither
/// re-sorted nor deduplicated, so pass the chronologically earlier set as
/// `first` when joining consecutive epochs of one run.
pub fn merge_trajectories(first: &TrajectorySet, second: &TrajectorySet) -> TrajectorySet {
    let mut merged = first.clone();
    let mut shared = 0usize;
    for (mutation, trajectory) in second.iter() {
        if merged.contains(mutation) {
            shared += 1;
        }
        merged.append(*mutation, trajectory);
    }
    debug!(
        first = first.len(),
        second = second.len(),
        shared,
        "merged trajectory sets"
    );
    merged
}

/// Merge sets left to right in the order supplied.
///
/// The fold order is the caller's: `[a, b, c]` yields
/// `merge(merge(a, b), c)`.
pub fn merge_all<I>(sets: I) -> TrajectorySet
where
    I: IntoIterator<Item = TrajectorySet>,
{
    let mut sets = sets.into_iter();
    let Some(mut merged) = sets.next() else {
        return TrajectorySet::new();
    };
    for set in sets {
        merged = merge_trajectories(&merged, &set);
    }
    merged
}

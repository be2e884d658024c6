//! Long-format flattening of trajectory sets.

use super::utils::passes_min_frequency;
use fwdtrace_sim::tracking::{SelectedMutation, Trajectory, TrajectorySet};
use serde::{Deserialize, Serialize};

/// One trajectory point together with its mutation's static fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyRecord {
    pub origin: usize,
    pub generation: usize,
    pub position: f64,
    pub frequency: f64,
    pub effect: f64,
    pub label: u16,
}

/// Inclusion thresholds for [`tidy_trajectories`].
///
/// The defaults keep every non-empty trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TidyFilter {
    /// Minimum number of points. Trajectories ending at frequency 1.0 are exempt.
    pub min_sojourn: usize,
    /// Minimum peak frequency. Values <= 0.0 disable the test.
    pub min_frequency: f64,
    /// Drop trajectories whose last point is at or before this generation.
    /// `None` disables the test.
    pub remove_gone_before: Option<usize>,
    /// Drop mutations that arose after this generation.
    pub remove_arose_after: usize,
}

impl Default for TidyFilter {
    fn default() -> Self {
        Self {
            min_sojourn: 0,
            min_frequency: 0.0,
            remove_gone_before: None,
            remove_arose_after: usize::MAX,
        }
    }
}

impl TidyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_sojourn(mut self, min_sojourn: usize) -> Self {
        self.min_sojourn = min_sojourn;
        self
    }

    pub fn min_frequency(mut self, min_frequency: f64) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    pub fn remove_gone_before(mut self, generation: usize) -> Self {
        self.remove_gone_before = Some(generation);
        self
    }

    pub fn remove_arose_after(mut self, generation: usize) -> Self {
        self.remove_arose_after = generation;
        self
    }

    /// Whether `trajectory` of `mutation` passes every threshold.
    ///
    /// Empty trajectories never qualify.
    pub fn accepts(&self, mutation: &SelectedMutation, trajectory: &Trajectory) -> bool {
        let Some(last) = trajectory.last() else {
            return false;
        };
        (trajectory.len() >= self.min_sojourn || trajectory.ends_fixed())
            && mutation.origin <= self.remove_arose_after
            && self.remove_gone_before.map_or(true, |gone| last.generation > gone)
            && passes_min_frequency(trajectory, self.min_frequency)
    }
}

/// Flatten every qualifying trajectory into one record per point.
///
/// Records follow the set's insertion order, then point order.
pub fn tidy_trajectories(set: &TrajectorySet, filter: &TidyFilter) -> Vec<TidyRecord> {
    set.iter()
        .filter(|(mutation, trajectory)| filter.accepts(mutation, trajectory))
        .flat_map(|(mutation, trajectory)| {
            trajectory.points().iter().map(move |point| TidyRecord {
                origin: mutation.origin,
                generation: point.generation,
                position: mutation.position,
                frequency: point.frequency,
                effect: mutation.effect,
                label: mutation.label,
            })
        })
        .collect()
}

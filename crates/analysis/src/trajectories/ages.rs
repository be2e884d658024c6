//! Allele-age summaries: one record per qualifying trajectory.

use fwdtrace_sim::errors::ValidationError;
use fwdtrace_sim::tracking::TrajectorySet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Summary of one selected mutation's trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlleleAge {
    /// Effect size (selection coefficient) of the mutation
    pub effect: f64,
    /// Highest frequency observed (latest point on ties)
    pub max_frequency: f64,
    /// Frequency at the last recorded point
    pub last_frequency: f64,
    /// Generation the mutation arose in
    pub origin: usize,
    /// Number of recorded points
    pub sojourn: usize,
}

/// Thresholds for [`allele_ages_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeFilter {
    #[serde(default)]
    pub min_frequency: f64,
    #[serde(default)]
    pub min_sojourn: usize,
}

impl Default for AgeFilter {
    fn default() -> Self {
        Self {
            min_frequency: 0.0,
            min_sojourn: 0,
        }
    }
}

/// Summarize every trajectory with at least `min_sojourn` points whose
/// maximum frequency reaches `min_frequency`.
///
/// Output follows the set's insertion order. Fails without partial output if
/// `min_frequency` is negative or any trajectory is empty.
pub fn allele_ages(
    set: &TrajectorySet,
    min_frequency: f64,
    min_sojourn: usize,
) -> Result<Vec<AlleleAge>, ValidationError> {
    if min_frequency < 0.0 {
        return Err(ValidationError::NegativeMinFrequency(min_frequency));
    }
    let mut ages = Vec::new();
    for (mutation, trajectory) in set.iter() {
        let (Some(peak), Some(last)) = (trajectory.peak(), trajectory.last()) else {
            return Err(ValidationError::EmptyTrajectory {
                position: mutation.position,
                origin: mutation.origin,
            });
        };
        if trajectory.len() < min_sojourn || peak.frequency < min_frequency {
            continue;
        }
        ages.push(AlleleAge {
            effect: mutation.effect,
            max_frequency: peak.frequency,
            last_frequency: last.frequency,
            origin: mutation.origin,
            sojourn: trajectory.len(),
        });
    }
    Ok(ages)
}

/// [`allele_ages`] with thresholds from an [`AgeFilter`].
pub fn allele_ages_with(
    set: &TrajectorySet,
    filter: &AgeFilter,
) -> Result<Vec<AlleleAge>, ValidationError> {
    allele_ages(set, filter.min_frequency, filter.min_sojourn)
}

/// Summarize independent replicates in parallel.
///
/// Results are returned in the order of `sets`. If any replicate fails, the
/// whole call fails.
pub fn allele_ages_per_replicate(
    sets: &[TrajectorySet],
    filter: &AgeFilter,
) -> Result<Vec<Vec<AlleleAge>>, ValidationError> {
    sets.par_iter()
        .map(|set| allele_ages_with(set, filter))
        .collect()
}

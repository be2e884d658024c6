use crate::base::position_key;
use crate::errors::ConsistencyError;
use crate::population::PopulationSnapshot;
use crate::sampling::Site;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Population-level annotation of one sampled selected site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDetail {
    /// Selection coefficient
    pub effect: f64,
    /// Population frequency, count / 2N (1.0 for fixations)
    pub frequency: f64,
    /// Generation the mutation arose in
    pub origin: usize,
    /// Generation the sample was taken in
    pub generation: usize,
    pub label: u16,
    /// Locus index (0 in single-locus mode)
    pub locus: usize,
}

/// Annotate selected sites against the population's tables.
///
/// A site resolves to the segregating non-neutral mutation at its position
/// first and to the fixation table second.
pub fn selected_details<P>(
    sites: &[Site],
    population: &P,
    generation: usize,
    locus: usize,
) -> Result<Vec<SampleDetail>, ConsistencyError>
where
    P: PopulationSnapshot + ?Sized,
{
    let two_n = 2.0 * population.size() as f64;
    let mutations = population.mutations();

    let mut live: HashMap<u64, usize> = HashMap::new();
    for (key, m) in mutations.iter().enumerate() {
        if !m.neutral && population.count(key) > 0 {
            live.entry(position_key(m.position)).or_insert(key);
        }
    }

    sites
        .iter()
        .map(|site| {
            if let Some(&key) = live.get(&position_key(site.position)) {
                let m = &mutations[key];
                return Ok(SampleDetail {
                    effect: m.s,
                    frequency: f64::from(population.count(key)) / two_n,
                    origin: m.origin,
                    generation,
                    label: m.label,
                    locus,
                });
            }
            population
                .fixations()
                .iter()
                .find(|f| !f.neutral && position_key(f.position) == position_key(site.position))
                .map(|f| SampleDetail {
                    effect: f.s,
                    frequency: 1.0,
                    origin: f.origin,
                    generation,
                    label: f.label,
                    locus,
                })
                .ok_or(ConsistencyError::UnknownSampledSite(site.position))
        })
        .collect()
}

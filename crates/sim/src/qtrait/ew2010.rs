//! Eyre-Walker (2010) model relating fitness effects to trait effects.
//!
//! Reference: Eyre-Walker, A. (2010) PNAS 107:1752-1756,
//! doi:10.1073/pnas.0906182107.
//!
//! Each selected mutation with coefficient `s` in a population of N diploids
//! receives the trait effect
//!
//! ```text
//! e = d * sign(s) * (4N|s|)^tau * (1 + noise),  d ~ {-1, +1},  noise ~ N(0, sigma)
//! ```
//!
//! Effects are keyed by position alone: two selected mutations at one
//! position cannot be told apart and are rejected.

use crate::base::position_key;
use crate::errors::{ConsistencyError, ValidationError};
use crate::population::PopulationSnapshot;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Trait effect assigned to one selected mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectRecord {
    pub position: f64,
    /// Selection coefficient
    pub s: f64,
    /// Assigned trait effect
    pub effect: f64,
    /// Population frequency at assignment time, 2 * count / 4N
    pub frequency: f64,
}

/// Position-keyed collection of [`EffectRecord`]s, in assignment order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectMap {
    records: Vec<EffectRecord>,
    index: HashMap<u64, usize>,
}

impl EffectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; a second record at the same position is rejected.
    pub fn insert(&mut self, record: EffectRecord) -> Result<(), ValidationError> {
        let key = position_key(record.position);
        if self.index.contains_key(&key) {
            return Err(ValidationError::DuplicateSelectedPosition(record.position));
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, position: f64) -> Option<&EffectRecord> {
        self.index
            .get(&position_key(position))
            .map(|&i| &self.records[i])
    }

    /// Trait effect at `position`.
    pub fn effect(&self, position: f64) -> Option<f64> {
        self.get(position).map(|r| r.effect)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[EffectRecord] {
        &self.records
    }
}

/// Assign trait effects to every non-neutral mutation in the mutation table.
///
/// Per mutation, the random sign is drawn before the Gaussian noise term, so
/// the sequence of draws from `rng` is fixed by the table order.
pub fn assign_effects<R, P>(
    rng: &mut R,
    population: &P,
    tau: f64,
    sigma: f64,
) -> Result<EffectMap, ValidationError>
where
    R: Rng + ?Sized,
    P: PopulationSnapshot + ?Sized,
{
    let noise = Normal::new(0.0, sigma).map_err(|_| ValidationError::InvalidSigma(sigma))?;
    let four_n = 4.0 * population.size() as f64;

    let mut effects = EffectMap::new();
    for (key, m) in population.mutations().iter().enumerate() {
        if m.neutral {
            continue;
        }
        if effects.get(m.position).is_some() {
            return Err(ValidationError::DuplicateSelectedPosition(m.position));
        }
        let d = if rng.random::<f64>() < 0.5 { -1.0 } else { 1.0 };
        let mut power = (four_n * m.s.abs()).powf(tau);
        if m.s < 0.0 {
            power = -power;
        }
        let effect = d * power * (1.0 + noise.sample(rng));
        effects.insert(EffectRecord {
            position: m.position,
            s: m.s,
            effect,
            frequency: 2.0 * f64::from(population.count(key)) / four_n,
        })?;
    }
    debug!(assigned = effects.len(), tau, sigma, "assigned EW2010 effects");
    Ok(effects)
}

/// Trait value of every diploid: the sum of effects of the selected
/// mutations on both of its gametes.
///
/// Fails if a carried selected mutation has no effect in `effects`.
pub fn trait_values<P>(population: &P, effects: &EffectMap) -> Result<Vec<f64>, ConsistencyError>
where
    P: PopulationSnapshot + Sync + ?Sized,
{
    let mutations = population.mutations();
    population
        .diploids()
        .par_iter()
        .enumerate()
        .map(|(i, diploid)| {
            let (first, second) = population.diploid_gametes(diploid);
            first
                .selected
                .iter()
                .chain(second.selected.iter())
                .try_fold(0.0, |sum, &key| {
                    let position = mutations[key].position;
                    effects
                        .effect(position)
                        .map(|e| sum + e)
                        .ok_or(ConsistencyError::UnknownEffectPosition {
                            diploid: i,
                            position,
                        })
                })
        })
        .collect()
}

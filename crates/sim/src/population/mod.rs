//! Population snapshots.
//!
//! The evolutionary engine owns the population; the components in this crate
//! only read it once per generation through [`PopulationSnapshot`].
//! [`Population`] is a plain in-memory implementation of that view.

mod gamete;
mod mutation;

pub use gamete::{Diploid, Gamete};
pub use mutation::{Fixation, Mutation};

use serde::{Deserialize, Serialize};

/// Read-only view of a population at one generation.
///
/// `mutation_counts()[k]` is the number of gametes in the population that
/// carry mutation key `k`. Every key referenced by a gamete must index both
/// `mutations()` and `mutation_counts()`, and every gamete index referenced
/// by a diploid must index `gametes()`.
pub trait PopulationSnapshot {
    /// Mutation table, indexed by mutation key.
    fn mutations(&self) -> &[Mutation];

    /// Allele counts, indexed by mutation key.
    fn mutation_counts(&self) -> &[u32];

    /// Mutations that fixed and were removed from the mutation table's
    /// segregating set.
    fn fixations(&self) -> &[Fixation];

    /// Gamete pool.
    fn gametes(&self) -> &[Gamete];

    /// Diploid individuals.
    fn diploids(&self) -> &[Diploid];

    /// Number of diploids (N).
    fn size(&self) -> usize {
        self.diploids().len()
    }

    /// The two gametes of a diploid.
    fn diploid_gametes(&self, diploid: &Diploid) -> (&Gamete, &Gamete) {
        let gametes = self.gametes();
        (&gametes[diploid.first], &gametes[diploid.second])
    }

    /// Allele count for a mutation key, 0 if the key is unknown.
    fn count(&self, key: usize) -> u32 {
        self.mutation_counts().get(key).copied().unwrap_or(0)
    }
}

/// An in-memory population of diploids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    mutations: Vec<Mutation>,
    counts: Vec<u32>,
    fixations: Vec<Fixation>,
    gametes: Vec<Gamete>,
    diploids: Vec<Diploid>,
}

impl Population {
    /// Create a population and tally allele counts from its diploids.
    pub fn new(mutations: Vec<Mutation>, gametes: Vec<Gamete>, diploids: Vec<Diploid>) -> Self {
        let mut pop = Self {
            counts: Vec::new(),
            mutations,
            fixations: Vec::new(),
            gametes,
            diploids,
        };
        pop.recount();
        pop
    }

    /// Create a population from tables maintained by an engine, trusting the
    /// supplied counts.
    pub fn from_parts(
        mutations: Vec<Mutation>,
        counts: Vec<u32>,
        fixations: Vec<Fixation>,
        gametes: Vec<Gamete>,
        diploids: Vec<Diploid>,
    ) -> Self {
        Self {
            mutations,
            counts,
            fixations,
            gametes,
            diploids,
        }
    }

    /// Set the fixation table.
    pub fn with_fixations(mut self, fixations: Vec<Fixation>) -> Self {
        self.fixations = fixations;
        self
    }

    /// Append a fixation record.
    pub fn push_fixation(&mut self, fixation: Fixation) {
        self.fixations.push(fixation);
    }

    /// Recompute allele counts by walking every diploid's two gametes.
    pub fn recount(&mut self) {
        let mut counts = vec![0u32; self.mutations.len()];
        for diploid in &self.diploids {
            for index in [diploid.first, diploid.second] {
                let Some(gamete) = self.gametes.get(index) else {
                    continue;
                };
                for key in gamete.keys() {
                    if let Some(c) = counts.get_mut(key) {
                        *c += 1;
                    }
                }
            }
        }
        self.counts = counts;
    }

    /// Check if the population has no diploids.
    pub fn is_empty(&self) -> bool {
        self.diploids.is_empty()
    }
}

impl PopulationSnapshot for Population {
    fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    fn mutation_counts(&self) -> &[u32] {
        &self.counts
    }

    fn fixations(&self) -> &[Fixation] {
        &self.fixations
    }

    fn gametes(&self) -> &[Gamete] {
        &self.gametes
    }

    fn diploids(&self) -> &[Diploid] {
        &self.diploids
    }
}

//! Selected-mutation frequency tracking.
//!
//! A [`TrajectorySet`] maps each selected mutation to the sequence of
//! frequencies observed for it. The engine (or [`TrajectorySet::observe`])
//! appends one point per recorded generation; the analysis crate merges,
//! summarizes and flattens the finished sets.

mod trajectory;

pub use trajectory::{Trajectory, TrajectoryPoint};

use crate::base::position_key;
use crate::population::{Mutation, PopulationSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Identity of a tracked mutation.
///
/// Two records denote the same mutation when position, origin generation and
/// effect size all match exactly. The label is carried along but is not part
/// of the identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectedMutation {
    pub position: f64,
    pub origin: usize,
    pub effect: f64,
    #[serde(default)]
    pub label: u16,
}

impl SelectedMutation {
    pub fn new(position: f64, origin: usize, effect: f64) -> Self {
        Self {
            position,
            origin,
            effect,
            label: 0,
        }
    }

    pub fn with_label(mut self, label: u16) -> Self {
        self.label = label;
        self
    }
}

impl From<&Mutation> for SelectedMutation {
    fn from(m: &Mutation) -> Self {
        Self {
            position: m.position,
            origin: m.origin,
            effect: m.s,
            label: m.label,
        }
    }
}

impl PartialEq for SelectedMutation {
    fn eq(&self, other: &Self) -> bool {
        position_key(self.position) == position_key(other.position)
            && self.origin == other.origin
            && position_key(self.effect) == position_key(other.effect)
    }
}

impl Eq for SelectedMutation {}

impl Hash for SelectedMutation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        position_key(self.position).hash(state);
        self.origin.hash(state);
        position_key(self.effect).hash(state);
    }
}

/// A mutation together with its frequency history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedMutation {
    pub mutation: SelectedMutation,
    pub trajectory: Trajectory,
}

/// Insertion-ordered mapping from [`SelectedMutation`] to [`Trajectory`].
///
/// Keys are unique. Iteration follows first-insertion order, which is the
/// order every analysis output follows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TrackedMutation>", into = "Vec<TrackedMutation>")]
pub struct TrajectorySet {
    entries: Vec<TrackedMutation>,
    index: HashMap<SelectedMutation, usize>,
}

impl TrajectorySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked mutations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record one observation for `mutation`, creating its entry on first use.
    pub fn record(&mut self, mutation: SelectedMutation, generation: usize, frequency: f64) {
        self.entry(mutation).push(generation, frequency);
    }

    /// Append a whole trajectory for `mutation`. Existing points stay first.
    pub fn append(&mut self, mutation: SelectedMutation, trajectory: &Trajectory) {
        self.entry(mutation).extend_from(trajectory);
    }

    /// Trajectory recorded for `mutation`, if any.
    pub fn get(&self, mutation: &SelectedMutation) -> Option<&Trajectory> {
        self.index
            .get(mutation)
            .map(|&i| &self.entries[i].trajectory)
    }

    pub fn contains(&self, mutation: &SelectedMutation) -> bool {
        self.index.contains_key(mutation)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SelectedMutation, &Trajectory)> {
        self.entries.iter().map(|e| (&e.mutation, &e.trajectory))
    }

    /// Record the current frequency of every segregating selected mutation.
    ///
    /// Frequencies are allele counts over the 2N gametes of the population.
    /// Mutations with a zero count are skipped, so a mutation that was lost
    /// simply stops receiving points.
    pub fn observe<P: PopulationSnapshot + ?Sized>(&mut self, population: &P, generation: usize) {
        let two_n = 2 * population.size();
        if two_n == 0 {
            return;
        }
        for (key, mutation) in population.mutations().iter().enumerate() {
            if mutation.neutral {
                continue;
            }
            let count = population.count(key);
            if count == 0 {
                continue;
            }
            self.record(
                SelectedMutation::from(mutation),
                generation,
                f64::from(count) / two_n as f64,
            );
        }
    }

    fn entry(&mut self, mutation: SelectedMutation) -> &mut Trajectory {
        let i = match self.index.get(&mutation) {
            Some(&i) => i,
            None => {
                self.entries.push(TrackedMutation {
                    mutation,
                    trajectory: Trajectory::new(),
                });
                let i = self.entries.len() - 1;
                self.index.insert(mutation, i);
                i
            }
        };
        &mut self.entries[i].trajectory
    }
}

impl From<Vec<TrackedMutation>> for TrajectorySet {
    fn from(entries: Vec<TrackedMutation>) -> Self {
        let mut set = Self::new();
        for e in entries {
            set.append(e.mutation, &e.trajectory);
        }
        set
    }
}

impl From<TrajectorySet> for Vec<TrackedMutation> {
    fn from(set: TrajectorySet) -> Self {
        set.entries
    }
}

use serde::{Deserialize, Serialize};

/// A haploid genome: the mutation keys it carries, split by class.
///
/// Keys index into the population's mutation table. Neutral and selected
/// mutations are kept in separate lists so that fitness and trait code only
/// has to walk the selected ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gamete {
    /// Keys of neutral mutations
    pub neutral: Vec<usize>,
    /// Keys of selected mutations
    pub selected: Vec<usize>,
}

impl Gamete {
    /// Create a gamete with no mutations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gamete from neutral and selected key lists.
    pub fn with_mutations(neutral: Vec<usize>, selected: Vec<usize>) -> Self {
        Self { neutral, selected }
    }

    /// Iterate over every mutation key carried, neutral first.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.neutral.iter().chain(self.selected.iter()).copied()
    }

    /// Total number of mutations carried.
    pub fn len(&self) -> usize {
        self.neutral.len() + self.selected.len()
    }

    /// Return `true` if the gamete carries no mutations.
    pub fn is_empty(&self) -> bool {
        self.neutral.is_empty() && self.selected.is_empty()
    }
}

/// A diploid individual: indices of its two gametes in the gamete pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diploid {
    pub first: usize,
    pub second: usize,
}

impl Diploid {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

use serde::{Deserialize, Serialize};

/// One entry of a population's mutation table.
///
/// Entries are addressed by their index in the table (the mutation key).
/// A key whose allele count dropped to zero may still hold an entry until
/// the engine recycles it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    /// Genomic position
    pub position: f64,
    /// Selection coefficient (0.0 for neutral sites)
    pub s: f64,
    /// Whether the mutation is neutral
    pub neutral: bool,
    /// Generation in which the mutation arose
    pub origin: usize,
    /// Opaque user label
    #[serde(default)]
    pub label: u16,
}

impl Mutation {
    /// Create a neutral mutation.
    pub fn neutral(position: f64, origin: usize) -> Self {
        Self {
            position,
            s: 0.0,
            neutral: true,
            origin,
            label: 0,
        }
    }

    /// Create a selected mutation with selection coefficient `s`.
    pub fn selected(position: f64, s: f64, origin: usize) -> Self {
        Self {
            position,
            s,
            neutral: false,
            origin,
            label: 0,
        }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: u16) -> Self {
        self.label = label;
        self
    }
}

/// A mutation that reached fixation and was moved to the fixation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixation {
    pub position: f64,
    pub s: f64,
    pub neutral: bool,
    pub origin: usize,
    /// Generation at which the mutation fixed
    pub fixed_at: usize,
    #[serde(default)]
    pub label: u16,
}

impl Fixation {
    /// Record `mutation` as fixed at generation `fixed_at`.
    pub fn from_mutation(mutation: &Mutation, fixed_at: usize) -> Self {
        Self {
            position: mutation.position,
            s: mutation.s,
            neutral: mutation.neutral,
            origin: mutation.origin,
            fixed_at,
            label: mutation.label,
        }
    }
}

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Half-open genomic interval `[start, end)` delimiting one locus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocusBoundary {
    pub start: f64,
    pub end: f64,
}

impl LocusBoundary {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The interval covering every position.
    pub const fn whole_genome() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    #[inline]
    pub fn contains(&self, position: f64) -> bool {
        self.start <= position && position < self.end
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start < self.end {
            Ok(())
        } else {
            Err(ValidationError::InvalidLocus {
                start: self.start,
                end: self.end,
            })
        }
    }
}

impl From<(f64, f64)> for LocusBoundary {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

static WHOLE_GENOME: [LocusBoundary; 1] = [LocusBoundary::whole_genome()];

/// How the genome is partitioned for sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum LocusLayout {
    /// One locus spanning the whole genome.
    Single,
    /// Independent loci, sampled and reported in the given order.
    Multi(Vec<LocusBoundary>),
}

impl LocusLayout {
    /// An empty boundary list means single-locus mode.
    pub fn from_boundaries(boundaries: Vec<LocusBoundary>) -> Self {
        if boundaries.is_empty() {
            Self::Single
        } else {
            Self::Multi(boundaries)
        }
    }

    /// Locus intervals in reporting order; index 0 is locus 0.
    pub fn boundaries(&self) -> &[LocusBoundary] {
        match self {
            Self::Single => &WHOLE_GENOME,
            Self::Multi(b) => b,
        }
    }

    pub fn num_loci(&self) -> usize {
        self.boundaries().len()
    }

    pub fn is_multi_locus(&self) -> bool {
        matches!(self, Self::Multi(_))
    }
}

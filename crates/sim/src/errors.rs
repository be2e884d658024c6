//! Error types for trajectory validation, effect assignment and sampling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Arguments or data that violate a documented contract of an operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Minimum frequency filters must be non-negative.
    #[error("minimum frequency must be >= 0.0, got {0}")]
    NegativeMinFrequency(f64),

    /// A trajectory with no recorded points was supplied.
    #[error("frequency trajectory is empty (position {position}, origin {origin})")]
    EmptyTrajectory { position: f64, origin: usize },

    /// Two non-neutral mutations share the exact same position.
    #[error("multiple selected mutations at position {0}")]
    DuplicateSelectedPosition(f64),

    /// Effect-size noise needs a finite, non-negative standard deviation.
    #[error("invalid noise standard deviation: {0}")]
    InvalidSigma(f64),

    /// A sampler must draw at least one gamete.
    #[error("sample size must be greater than zero")]
    InvalidSampleSize,

    /// Locus intervals are half-open and must not be empty or reversed.
    #[error("invalid locus boundary [{start}, {end})")]
    InvalidLocus { start: f64, end: f64 },
}

/// Supplied tables disagree with each other.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyError {
    /// A diploid carries a selected mutation that has no assigned effect.
    #[error("diploid {diploid} contains a mutation at unknown position {position}")]
    UnknownEffectPosition { diploid: usize, position: f64 },

    /// A sampled selected site is neither segregating nor fixed in the population.
    #[error("sampled selected site at position {0} is neither segregating nor fixed")]
    UnknownSampledSite(f64),
}

/// Failures of the gzip output streams.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not open {} in truncate mode: {source}", .path.display())]
    Truncate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not append to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors surfaced by [`crate::sampling::Sampler`] construction and invocation.
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to read sampler configuration {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse sampler configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("failed to serialize sampler RNG state: {0}")]
    RngState(#[from] bincode::Error),
}

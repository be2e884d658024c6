//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use fwdtrace_sim::prelude::*;
//!
//! let mut set = TrajectorySet::new();
//! set.record(SelectedMutation::new(0.5, 0, 0.01), 1, 0.05);
//! assert_eq!(set.len(), 1);
//! ```

pub use crate::errors::{ConsistencyError, SamplerError, StorageError, ValidationError};
pub use crate::population::{Diploid, Fixation, Gamete, Mutation, Population, PopulationSnapshot};
pub use crate::qtrait::{assign_effects, trait_values, EffectMap, EffectRecord};
pub use crate::sampling::{
    LocusBoundary, LocusLayout, SampleDetail, SampleResult, Sampler, SamplerConfig,
    SeparatedSample, Site,
};
pub use crate::tracking::{SelectedMutation, Trajectory, TrajectoryPoint, TrajectorySet};

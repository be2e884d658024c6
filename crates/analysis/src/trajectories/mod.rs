//! Trajectory analysis: merging replicates or epochs, allele-age summaries
//! and long-format flattening.

pub mod ages;
pub mod merge;
pub mod tidy;
pub mod utils;

pub use ages::{allele_ages, allele_ages_per_replicate, allele_ages_with, AgeFilter, AlleleAge};
pub use merge::{merge_all, merge_trajectories};
pub use tidy::{tidy_trajectories, TidyFilter, TidyRecord};

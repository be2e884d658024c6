//! Analysis of selected-mutation frequency trajectories recorded by
//! `fwdtrace-sim`.
//!
//! - [`trajectories`]: merging sets, allele-age summaries, tidy flattening
//! - [`export`]: CSV/JSON writers for the resulting records

pub mod export;
pub mod trajectories;

pub use export::{write_ages_csv, write_json, write_tidy_csv, ExportError};
pub use trajectories::{
    allele_ages, allele_ages_per_replicate, allele_ages_with, merge_all, merge_trajectories,
    tidy_trajectories, AgeFilter, AlleleAge, TidyFilter, TidyRecord,
};

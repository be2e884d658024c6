//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use fwdtrace::prelude::*;
//!
//! let mut set = TrajectorySet::new();
//! set.record(SelectedMutation::new(0.5, 0, 0.01), 1, 1.0);
//! let rows = tidy_trajectories(&set, &TidyFilter::new().min_sojourn(5));
//! assert_eq!(rows.len(), 1);
//! ```

pub use fwdtrace_analysis::{
    allele_ages, allele_ages_per_replicate, allele_ages_with, merge_all, merge_trajectories,
    tidy_trajectories, write_ages_csv, write_json, write_tidy_csv, AgeFilter, AlleleAge,
    ExportError, TidyFilter, TidyRecord,
};
pub use fwdtrace_sim::prelude::*;

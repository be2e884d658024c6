//! fwdtrace: trajectory analysis and reproducible sampling for forward-time
//! population genetic simulations.
//!
//! The per-generation side (population snapshots, frequency tracking, the
//! gamete sampler and EW2010 trait effects) lives in [`sim`]. Post-run
//! summaries of recorded trajectories live in [`analysis`].

pub use fwdtrace_analysis as analysis;
pub use fwdtrace_sim as sim;

pub mod prelude;

pub use analysis::{allele_ages, merge_trajectories, tidy_trajectories};
pub use sim::{Population, PopulationSnapshot, SelectedMutation, Trajectory, TrajectorySet};

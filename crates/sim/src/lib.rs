//! # Simulation Crate
//!
//! The `sim` crate holds the per-generation side of fwdtrace: the population
//! snapshot model consumed from an evolutionary engine, frequency tracking of
//! selected mutations, periodic gamete sampling with gzip output, and the
//! EW2010 quantitative-trait effect model.

pub mod base;
pub mod errors;
pub mod population;
pub mod prelude;
pub mod qtrait;
pub mod random;
pub mod sampling;
pub mod storage;
pub mod tracking;

pub use population::{Population, PopulationSnapshot};
pub use tracking::{SelectedMutation, Trajectory, TrajectoryPoint, TrajectorySet};

//! Base helpers shared by the population, tracking and effect modules.

mod position;

pub use position::{position_key, same_position};

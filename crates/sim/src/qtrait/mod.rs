//! Quantitative-trait models layered on selected mutations.

pub mod ew2010;

pub use ew2010::{assign_effects, trait_values, EffectMap, EffectRecord};

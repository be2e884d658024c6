//! Periodic gamete sampling.
//!
//! A [`Sampler`] is invoked once per chosen generation. Each invocation draws
//! gametes per locus, splits the variable sites into neutral and selected
//! blocks, writes the blocks to optional gzip outputs, and keeps the blocks
//! plus per-site annotations in memory.

mod config;
mod details;
mod layout;
mod sample;
mod sampler;

pub use config::SamplerConfig;
pub use details::{selected_details, SampleDetail};
pub use layout::{LocusBoundary, LocusLayout};
pub use sample::{
    draw_gametes, drop_consecutive_duplicates, separate_sample, SeparatedSample, Site,
};
pub use sampler::{SampleResult, Sampler};

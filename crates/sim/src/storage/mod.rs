//! Persistence of sampler output.
//!
//! Samples are written as `ms`-style text blocks into gzip streams that are
//! reopened in append mode for every write.

mod gz;
mod ms;

pub use gz::GzAppender;
pub use ms::ms_block;

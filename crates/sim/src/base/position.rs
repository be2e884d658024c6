//! Exact identity for real-valued genomic positions.
//!
//! Positions are compared bit-for-bit rather than within a tolerance: two
//! mutations are at the same site only if their coordinates are identical.
//! The one exception is signed zero, which is folded so that `-0.0` and
//! `0.0` name the same site.

/// Hashable key for a position (or any other real-valued identity field).
#[inline]
pub fn position_key(position: f64) -> u64 {
    if position == 0.0 {
        0.0f64.to_bits()
    } else {
        position.to_bits()
    }
}

/// Return `true` if two positions name the same site.
#[inline]
pub fn same_position(a: f64, b: f64) -> bool {
    position_key(a) == position_key(b)
}

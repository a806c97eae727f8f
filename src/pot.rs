//! Power-of-two classification and rounding for texture dimensions.
//!
//! Older GPU targets require power-of-two texture sizes; content processors
//! use these helpers to decide whether a bitmap needs resizing and what size
//! to resize it to.

/// Returns true iff `v` has exactly one bit set.
///
/// Zero is not a power of two. (The bare bit trick `v & (v - 1) == 0` also
/// accepts zero; the extra guard rejects it.)
#[inline]
pub fn is_power_of_two(v: u32) -> bool {
    v != 0 && v & (v - 1) == 0
}

/// Returns the smallest power of two ≥ `v`, or `v` itself if it already is one.
///
/// `next_power_of_two(0)` is 1. `v` must be ≤ 2³¹; larger values cannot round
/// up within `u32`.
#[inline]
pub fn next_power_of_two(v: u32) -> u32 {
    debug_assert!(v <= 1 << 31, "{v} cannot round up within u32");
    if is_power_of_two(v) {
        return v;
    }
    let mut nearest = 1u32;
    while nearest < v {
        nearest <<= 1;
    }
    nearest
}

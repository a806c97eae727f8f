//! Typed pixel-slice wrappers over the byte-level swizzles, plus structural
//! color comparison across the two channel orders.
//!
//! These operate on [`rgb`] crate pixel types instead of raw bytes. A typed
//! slice is always a whole number of pixels, so the alignment validation of
//! the byte-level entry points cannot fire here; the in-place wrappers are
//! infallible, and the copying wrappers only fail when the destination is
//! too small.

use bytemuck::cast_slice_mut;
use rgb::{Bgra, Rgba};

use crate::SizeError;

/// Reorders `B,G,R,A` pixels to `R,G,B,A` in place.
///
/// The returned slice is the same memory reinterpreted with the new channel
/// order. An empty slice is a no-op.
pub fn bgra_to_rgba_mut(pixels: &mut [Bgra<u8>]) -> &mut [Rgba<u8>] {
    if !pixels.is_empty() {
        crate::swizzle::bgra_to_rgba_inplace(cast_slice_mut(pixels))
            .expect("typed pixel slice is always whole pixels");
    }
    cast_slice_mut(pixels)
}

/// Reorders `R,G,B,A` pixels to `B,G,R,A` in place.
pub fn rgba_to_bgra_mut(pixels: &mut [Rgba<u8>]) -> &mut [Bgra<u8>] {
    if !pixels.is_empty() {
        crate::swizzle::rgba_to_bgra_inplace(cast_slice_mut(pixels))
            .expect("typed pixel slice is always whole pixels");
    }
    cast_slice_mut(pixels)
}

/// Copies `B,G,R,A` pixels into `R,G,B,A` pixels.
///
/// Fails with [`SizeError::PixelCountMismatch`] if `dst` cannot hold `src`'s
/// pixels. An empty `src` is a no-op.
pub fn bgra_to_rgba_buf(src: &[Bgra<u8>], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    if src.is_empty() {
        return Ok(());
    }
    crate::swizzle::bgra_to_rgba(bytemuck::cast_slice(src), cast_slice_mut(dst))
}

/// Copies `R,G,B,A` pixels into `B,G,R,A` pixels.
pub fn rgba_to_bgra_buf(src: &[Rgba<u8>], dst: &mut [Bgra<u8>]) -> Result<(), SizeError> {
    if src.is_empty() {
        return Ok(());
    }
    crate::swizzle::rgba_to_bgra(bytemuck::cast_slice(src), cast_slice_mut(dst))
}

/// Compares a platform `B,G,R,A` color and an engine `R,G,B,A` color channel
/// by channel, ignoring the byte layouts.
///
/// Equal iff all four channels match.
#[inline]
pub fn colors_equal(platform: Bgra<u8>, engine: Rgba<u8>) -> bool {
    platform.a == engine.a
        && platform.r == engine.r
        && platform.g == engine.g
        && platform.b == engine.b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bgra(b: u8, g: u8, r: u8, a: u8) -> Bgra<u8> {
        Bgra { b, g, r, a }
    }

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
        Rgba { r, g, b, a }
    }

    #[test]
    fn inplace_reorders_and_preserves_channels() {
        let mut pixels = vec![bgra(10, 20, 30, 40), bgra(50, 60, 70, 80)];
        let out = bgra_to_rgba_mut(&mut pixels);
        assert_eq!(out[0], rgba(30, 20, 10, 40));
        assert_eq!(out[1], rgba(70, 60, 50, 80));
    }

    #[test]
    fn inplace_round_trips() {
        let mut pixels = vec![rgba(1, 2, 3, 4), rgba(200, 150, 100, 50)];
        let original = pixels.clone();
        let as_bgra = rgba_to_bgra_mut(&mut pixels);
        let back = bgra_to_rgba_mut(as_bgra);
        assert_eq!(back, &original[..]);
    }

    #[test]
    fn empty_slices_are_no_ops() {
        let mut bgra_pixels: Vec<Bgra<u8>> = Vec::new();
        assert!(bgra_to_rgba_mut(&mut bgra_pixels).is_empty());

        let mut rgba_pixels: Vec<Rgba<u8>> = Vec::new();
        assert!(rgba_to_bgra_mut(&mut rgba_pixels).is_empty());

        let mut dst: Vec<Rgba<u8>> = Vec::new();
        assert_eq!(bgra_to_rgba_buf(&[], &mut dst), Ok(()));
        let mut dst: Vec<Bgra<u8>> = Vec::new();
        assert_eq!(rgba_to_bgra_buf(&[], &mut dst), Ok(()));
    }

    #[test]
    fn buf_copy_matches_inplace() {
        let src: Vec<Bgra<u8>> = (0..64u8)
            .map(|i| bgra(i, i.wrapping_mul(3), i.wrapping_mul(7), 255 - i))
            .collect();
        let mut dst = vec![rgba(0, 0, 0, 0); src.len()];
        bgra_to_rgba_buf(&src, &mut dst).unwrap();

        let mut inplace = src.clone();
        let expected = bgra_to_rgba_mut(&mut inplace);
        assert_eq!(dst, expected);
    }

    #[test]
    fn buf_copy_rejects_short_destination() {
        let src = vec![bgra(0, 0, 0, 0); 4];
        let mut dst = vec![rgba(0, 0, 0, 0); 3];
        assert_eq!(
            bgra_to_rgba_buf(&src, &mut dst),
            Err(SizeError::PixelCountMismatch)
        );
    }

    #[test]
    fn equal_colors_compare_equal_across_layouts() {
        let p = bgra(30, 20, 10, 40);
        let e = rgba(10, 20, 30, 40);
        assert!(colors_equal(p, e));
    }

    #[test]
    fn any_single_channel_difference_compares_unequal() {
        let e = rgba(10, 20, 30, 40);
        assert!(!colors_equal(bgra(30, 20, 11, 40), e)); // r
        assert!(!colors_equal(bgra(30, 21, 10, 40), e)); // g
        assert!(!colors_equal(bgra(31, 20, 10, 40), e)); // b
        assert!(!colors_equal(bgra(30, 20, 10, 41), e)); // a
    }

    #[test]
    fn equality_ignores_byte_order_not_values() {
        // Same raw bytes in both layouts are NOT the same color.
        let p = bgra(1, 2, 3, 4);
        let e = rgba(1, 2, 3, 4);
        assert!(!colors_equal(p, e));
        assert!(colors_equal(p, rgba(3, 2, 1, 4)));
    }
}

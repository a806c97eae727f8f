// ---------------------------------------------------------------------------
// B↔R channel swizzle with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant! — contiguous (single call)
// and strided (loop over rows, single dispatch).
// ---------------------------------------------------------------------------

use crate::SizeError;
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;

#[cfg(test)]
mod tests;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize, bpp: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(bpp) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(
    src_len: usize,
    src_bpp: usize,
    dst_len: usize,
    dst_bpp: usize,
) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(src_bpp) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < (src_len / src_bpp) * dst_bpp {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Utility
// ===========================================================================

#[inline(always)]
fn swap_br_u32(v: u32) -> u32 {
    (v & 0xFF00_FF00) | (v.rotate_left(16) & 0x00FF_00FF)
}

// ===========================================================================
// Public API — contiguous
// ===========================================================================

/// Swap B↔R channels in-place for 4bpp pixels (BGRA↔RGBA).
///
/// Bytes 1 and 3 of every pixel (green and alpha) are untouched. The buffer
/// length must be a nonzero multiple of 4; a trailing partial pixel is
/// rejected with [`SizeError::NotPixelAligned`] rather than silently skipped.
pub fn bgra_to_rgba_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len(), 4)?;
    incant!(swap_br_impl(buf), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

/// Copy 4bpp pixels, swapping B↔R (BGRA→RGBA or RGBA→BGRA).
pub fn bgra_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), 4, dst.len(), 4)?;
    incant!(copy_swap_br_impl(src, dst), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Swap B↔R in-place for a strided 4bpp image (BGRA↔RGBA).
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or written.
/// The buffer must be at least `(height - 1) * stride + width * 4` bytes.
pub fn bgra_to_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride, 4)?;
    incant!(
        swap_br_strided(buf, width, height, stride),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

/// Copy 4bpp pixels between strided buffers, swapping B↔R.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start of
/// consecutive rows in the source and destination buffers respectively.
/// Padding bytes between rows are never read or written.
pub fn bgra_to_rgba_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    check_strided(src.len(), width, height, src_stride, 4)?;
    check_strided(dst.len(), width, height, dst_stride, 4)?;
    incant!(
        copy_swap_br_strided(src, dst, width, height, src_stride, dst_stride),
        [v3, arm_v2, wasm128, scalar]
    );
    Ok(())
}

// ===========================================================================
// Aliases — the swap is symmetric, so both directions get a name
// ===========================================================================

/// Alias for [`bgra_to_rgba_inplace`] — same swap operation.
#[inline(always)]
pub fn rgba_to_bgra_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    bgra_to_rgba_inplace(buf)
}

/// Alias for [`bgra_to_rgba`] — same swap operation.
#[inline(always)]
pub fn rgba_to_bgra(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    bgra_to_rgba(src, dst)
}

/// Alias for [`bgra_to_rgba_inplace_strided`] — same swap operation.
#[inline(always)]
pub fn rgba_to_bgra_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    bgra_to_rgba_inplace_strided(buf, width, height, stride)
}

/// Alias for [`bgra_to_rgba_strided`] — same swap operation.
#[inline(always)]
pub fn rgba_to_bgra_strided(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
) -> Result<(), SizeError> {
    bgra_to_rgba_strided(src, dst, width, height, src_stride, dst_stride)
}

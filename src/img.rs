//! Whole-image channel-order swaps on [`imgref`] types.
//!
//! These handle strided image buffers row by row through the SIMD-dispatched
//! core swizzles. Available with the `imgref` feature.
//!
//! ```rust
//! use rgb::{Bgra, Rgba};
//! use imgref::ImgVec;
//! use mipkit::img;
//!
//! let bgra_img = ImgVec::new(vec![Bgra { b: 3u8, g: 2, r: 1, a: 4 }; 100], 10, 10);
//! let rgba_img: ImgVec<Rgba<u8>> = img::swap_bgra_to_rgba(bgra_img);
//! ```

use imgref::{ImgRef, ImgVec};
use rgb::{Bgra, Rgba};

/// Converts an `ImgVec<Bgra<u8>>` to `ImgVec<Rgba<u8>>` in place.
///
/// Swaps B↔R per row and reinterprets the buffer; the allocation is reused.
pub fn swap_bgra_to_rgba(mut img: ImgVec<Bgra<u8>>) -> ImgVec<Rgba<u8>> {
    let w = img.width();
    let h = img.height();
    let stride = img.stride();
    for row in img.rows_mut().filter(|row| !row.is_empty()) {
        crate::swizzle::bgra_to_rgba_inplace(bytemuck::cast_slice_mut(row))
            .expect("image row is always whole pixels");
    }
    let buf: Vec<Rgba<u8>> = bytemuck::allocation::cast_vec(img.into_buf());
    ImgVec::new_stride(buf, w, h, stride)
}

/// Converts an `ImgVec<Rgba<u8>>` to `ImgVec<Bgra<u8>>` in place.
pub fn swap_rgba_to_bgra(mut img: ImgVec<Rgba<u8>>) -> ImgVec<Bgra<u8>> {
    let w = img.width();
    let h = img.height();
    let stride = img.stride();
    for row in img.rows_mut().filter(|row| !row.is_empty()) {
        crate::swizzle::rgba_to_bgra_inplace(bytemuck::cast_slice_mut(row))
            .expect("image row is always whole pixels");
    }
    let buf: Vec<Bgra<u8>> = bytemuck::allocation::cast_vec(img.into_buf());
    ImgVec::new_stride(buf, w, h, stride)
}

/// Converts `ImgRef<Bgra<u8>>` to a new tightly packed `ImgVec<Rgba<u8>>`.
pub fn convert_bgra_to_rgba(img: ImgRef<'_, Bgra<u8>>) -> ImgVec<Rgba<u8>> {
    let w = img.width();
    let h = img.height();
    let mut dst = ImgVec::new(vec![Rgba::default(); w * h], w, h);
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        if src_row.is_empty() {
            continue;
        }
        crate::swizzle::bgra_to_rgba(
            bytemuck::cast_slice(src_row),
            bytemuck::cast_slice_mut(dst_row),
        )
        .expect("image rows are always whole pixels");
    }
    dst
}

/// Converts `ImgRef<Rgba<u8>>` to a new tightly packed `ImgVec<Bgra<u8>>`.
pub fn convert_rgba_to_bgra(img: ImgRef<'_, Rgba<u8>>) -> ImgVec<Bgra<u8>> {
    let w = img.width();
    let h = img.height();
    let mut dst = ImgVec::new(vec![Bgra::default(); w * h], w, h);
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        if src_row.is_empty() {
            continue;
        }
        crate::swizzle::rgba_to_bgra(
            bytemuck::cast_slice(src_row),
            bytemuck::cast_slice_mut(dst_row),
        )
        .expect("image rows are always whole pixels");
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_bgra_to_rgba_img() {
        let img = ImgVec::new(vec![Bgra { b: 0u8, g: 128, r: 255, a: 200 }; 4], 2, 2);
        let rgba = swap_bgra_to_rgba(img);
        assert_eq!(rgba.width(), 2);
        assert_eq!(rgba.height(), 2);
        assert_eq!(rgba.buf()[0], Rgba::new(255, 128, 0, 200));
    }

    #[test]
    fn test_swap_round_trip_img() {
        let px = Rgba::new(9u8, 8, 7, 6);
        let img = ImgVec::new(vec![px; 9], 3, 3);
        let back = swap_bgra_to_rgba(swap_rgba_to_bgra(img));
        assert!(back.buf().iter().all(|&p| p == px));
    }

    #[test]
    fn test_strided_image() {
        // 3 pixels wide with stride 4; the padding column must not corrupt
        // the output.
        let buf = vec![
            Bgra { b: 3u8, g: 2, r: 1, a: 4 },
            Bgra { b: 7, g: 6, r: 5, a: 8 },
            Bgra { b: 11, g: 10, r: 9, a: 12 },
            Bgra::default(),
            Bgra { b: 15, g: 14, r: 13, a: 16 },
            Bgra { b: 19, g: 18, r: 17, a: 20 },
            Bgra { b: 23, g: 22, r: 21, a: 24 },
            Bgra::default(),
        ];
        let img = ImgVec::new_stride(buf, 3, 2, 4);
        let rgba = convert_bgra_to_rgba(img.as_ref());
        assert_eq!(rgba.width(), 3);
        assert_eq!(rgba.height(), 2);
        assert_eq!(rgba.buf()[0], Rgba::new(1, 2, 3, 4));
        assert_eq!(rgba.buf()[5], Rgba::new(21, 22, 23, 24));
    }
}

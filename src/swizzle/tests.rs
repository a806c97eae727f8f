use super::*;
use archmage::testing::{CompileTimePolicy, for_each_token_permutation};

fn policy() -> CompileTimePolicy {
    if std::env::var_os("CI").is_some() {
        CompileTimePolicy::Fail
    } else {
        CompileTimePolicy::WarnStderr
    }
}

// --- Helpers to generate test data ---

fn make_4bpp(n_pixels: usize) -> Vec<u8> {
    (0..n_pixels * 4).map(|i| (i % 251) as u8).collect()
}

// --- Reference (scalar-only) implementation for comparison ---

fn ref_swap_br(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    out
}

// Test sizes: small (remainder only), medium (SIMD + remainder), large (multiple SIMD chunks)
const TEST_PIXEL_COUNTS: &[usize] = &[1, 2, 3, 7, 8, 15, 16, 31, 32, 33, 63, 64, 65, 100];

// -----------------------------------------------------------------------
// SIMD-dispatched operations — tested at every capability tier
// -----------------------------------------------------------------------

#[test]
fn permutation_swap_br_inplace() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in TEST_PIXEL_COUNTS {
            let mut data = make_4bpp(n);
            let expected = ref_swap_br(&data);
            bgra_to_rgba_inplace(&mut data).unwrap();
            assert_eq!(data, expected, "swap_br_inplace n={n} tier={perm}");
        }
    });
    std::eprintln!("swap_br_inplace: {report}");
}

#[test]
fn permutation_copy_swap_br() {
    let report = for_each_token_permutation(policy(), |perm| {
        for &n in TEST_PIXEL_COUNTS {
            let src = make_4bpp(n);
            let expected = ref_swap_br(&src);
            let mut dst = vec![0u8; n * 4];
            bgra_to_rgba(&src, &mut dst).unwrap();
            assert_eq!(dst, expected, "copy_swap_br n={n} tier={perm}");
        }
    });
    std::eprintln!("copy_swap_br: {report}");
}

#[test]
fn permutation_strided_swap_br() {
    let report = for_each_token_permutation(policy(), |perm| {
        // 10 pixels wide, stride 48 bytes (12 pixels × 4bpp), 4 rows
        let w = 10;
        let h = 4;
        let stride = 48;
        let mut buf = vec![0xCCu8; stride * h];
        for y in 0..h {
            for x in 0..w {
                let i = y * stride + x * 4;
                buf[i] = (y * w + x) as u8;
                buf[i + 1] = 100;
                buf[i + 2] = 200;
                buf[i + 3] = 255;
            }
        }
        let orig = buf.clone();
        bgra_to_rgba_inplace_strided(&mut buf, w, h, stride).unwrap();
        for y in 0..h {
            for x in 0..w {
                let i = y * stride + x * 4;
                let o = &orig[i..i + 4];
                assert_eq!(
                    &buf[i..i + 4],
                    &[o[2], o[1], o[0], o[3]],
                    "strided swap y={y} x={x} tier={perm}"
                );
            }
            // Padding bytes after the active row are untouched
            for i in y * stride + w * 4..y * stride + stride {
                assert_eq!(buf[i], 0xCC, "padding clobbered at {i} tier={perm}");
            }
        }
    });
    std::eprintln!("strided_swap_br: {report}");
}

#[test]
fn permutation_strided_copy_swap_br() {
    let report = for_each_token_permutation(policy(), |perm| {
        let w = 7;
        let h = 3;
        let src_stride = w * 4 + 8;
        let dst_stride = w * 4 + 4;
        let src: Vec<u8> = (0..src_stride * h).map(|i| (i % 251) as u8).collect();
        let mut dst = vec![0xEEu8; dst_stride * h];
        bgra_to_rgba_strided(&src, &mut dst, w, h, src_stride, dst_stride).unwrap();
        for y in 0..h {
            for x in 0..w {
                let si = y * src_stride + x * 4;
                let di = y * dst_stride + x * 4;
                assert_eq!(
                    &dst[di..di + 4],
                    &[src[si + 2], src[si + 1], src[si], src[si + 3]],
                    "strided copy y={y} x={x} tier={perm}"
                );
            }
            for i in y * dst_stride + w * 4..y * dst_stride + dst_stride {
                assert_eq!(dst[i], 0xEE, "dst padding clobbered at {i} tier={perm}");
            }
        }
    });
    std::eprintln!("strided_copy_swap_br: {report}");
}

// -----------------------------------------------------------------------
// Contract properties
// -----------------------------------------------------------------------

#[test]
fn swap_is_its_own_inverse() {
    for &n in TEST_PIXEL_COUNTS {
        let original = make_4bpp(n);
        let mut data = original.clone();
        bgra_to_rgba_inplace(&mut data).unwrap();
        bgra_to_rgba_inplace(&mut data).unwrap();
        assert_eq!(data, original, "double swap must restore original, n={n}");
    }
}

#[test]
fn swap_touches_only_bytes_0_and_2() {
    let original = make_4bpp(33);
    let mut data = original.clone();
    bgra_to_rgba_inplace(&mut data).unwrap();
    for (px, orig) in data.chunks_exact(4).zip(original.chunks_exact(4)) {
        assert_eq!(px[1], orig[1]);
        assert_eq!(px[3], orig[3]);
        assert_eq!(px[0], orig[2]);
        assert_eq!(px[2], orig[0]);
    }
}

#[test]
fn two_pixel_bgra_extracts_to_rgba() {
    // [B0,G0,R0,A0, B1,G1,R1,A1] → [R0,G0,B0,A0, R1,G1,B1,A1]
    let mut data = vec![10u8, 20, 30, 40, 50, 60, 70, 80];
    bgra_to_rgba_inplace(&mut data).unwrap();
    assert_eq!(data, [30, 20, 10, 40, 70, 60, 50, 80]);
}

// -----------------------------------------------------------------------
// Size validation
// -----------------------------------------------------------------------

#[test]
fn test_size_errors() {
    assert_eq!(
        bgra_to_rgba_inplace(&mut [0; 5]),
        Err(SizeError::NotPixelAligned)
    );
    assert_eq!(
        bgra_to_rgba_inplace(&mut [0; 0]),
        Err(SizeError::NotPixelAligned)
    );
    assert_eq!(
        bgra_to_rgba(&[0; 8], &mut [0; 4]),
        Err(SizeError::PixelCountMismatch)
    );
    assert_eq!(
        bgra_to_rgba(&[0; 7], &mut [0; 8]),
        Err(SizeError::NotPixelAligned)
    );
}

#[test]
fn test_strided_size_errors() {
    // stride < width * bpp
    assert_eq!(
        bgra_to_rgba_inplace_strided(&mut [0; 32], 2, 2, 4),
        Err(SizeError::InvalidStride)
    );
    // buffer too small
    assert_eq!(
        bgra_to_rgba_inplace_strided(&mut [0; 10], 2, 2, 8),
        Err(SizeError::InvalidStride)
    );
    // zero width
    assert_eq!(
        bgra_to_rgba_inplace_strided(&mut [0; 8], 0, 1, 8),
        Err(SizeError::InvalidStride)
    );
    // zero height
    assert_eq!(
        bgra_to_rgba_inplace_strided(&mut [0; 8], 2, 0, 8),
        Err(SizeError::InvalidStride)
    );
}

#[test]
fn test_aliases_match() {
    let data = make_4bpp(16);

    let mut a = data.clone();
    let mut b = data.clone();
    bgra_to_rgba_inplace(&mut a).unwrap();
    rgba_to_bgra_inplace(&mut b).unwrap();
    assert_eq!(a, b);
}

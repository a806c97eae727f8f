//! # mipkit
//!
//! *Get your textures in line before they ship.*
//!
//! Texture content-processing utilities: SIMD-accelerated `B,G,R,A` ↔
//! `R,G,B,A` channel swizzles, power-of-two dimension helpers, and a bitmap
//! resize pipeline that rebuilds a texture's top mip level. Supports x86-64
//! AVX2, ARM NEON, and WASM SIMD128 with automatic fallback to scalar code.
//!
//! ## Core operations (always available)
//!
//! The swizzle functions in the crate root operate on raw `&[u8]` /
//! `&mut [u8]` slices, contiguous or strided. [`bitmap`] and [`content`]
//! build the lock/extract/resize pipeline on top of them; [`pot`] holds the
//! dimension helpers and [`typed`] the [`rgb`]-typed wrappers plus the
//! cross-layout color comparison.
//!
//! ## Feature flags
//!
//! - **`imgref`** — Whole-image swaps using [`imgref`] types
//!   (`ImgRef`, `ImgVec`).

#![forbid(unsafe_code)]

mod error;
mod swizzle;

pub use error::SizeError;
pub use swizzle::*;

pub mod bitmap;
pub mod content;
pub mod pot;
pub mod typed;

#[cfg(feature = "imgref")]
pub mod img;

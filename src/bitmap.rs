//! Platform-order bitmap surface: `B,G,R,A` rows, possibly padded.
//!
//! [`Bitmap`] models the surface a platform imaging API hands back: bottom
//! byte order `B,G,R,A`, row stride at least `4 * width` with padding bytes
//! the pixel operations never touch. Reading pixels goes through a scoped
//! [`BitmapLock`]; [`Bitmap::get_data`] wraps the lock/copy/unlock/swizzle
//! sequence into one call that yields engine-order `R,G,B,A` bytes.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::SizeError;

/// Pixel layout of a [`Bitmap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PixelFormat {
    /// 8 bits per channel, bytes `B,G,R,A`.
    Bgra8,
}

impl PixelFormat {
    /// Bytes per pixel.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgra8 => 4,
        }
    }
}

/// An owned `B,G,R,A` pixel surface with row stride.
#[derive(Debug)]
pub struct Bitmap {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl Bitmap {
    /// Allocates a zeroed bitmap with tight rows (`stride == 4 * width`).
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Bitmap {
        assert!(width > 0 && height > 0, "bitmap dimensions must be nonzero");
        let stride = width as usize * 4;
        Bitmap {
            data: vec![0u8; stride * height as usize],
            width,
            height,
            stride,
        }
    }

    /// Wraps existing `B,G,R,A` bytes, validating the stride geometry.
    pub fn from_raw(
        data: Vec<u8>,
        width: u32,
        height: u32,
        stride: usize,
    ) -> Result<Bitmap, SizeError> {
        crate::swizzle::check_strided(data.len(), width as usize, height as usize, stride, 4)?;
        Ok(Bitmap {
            data,
            width,
            height,
            stride,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes, ≥ `4 * width`.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn pixel_format(&self) -> PixelFormat {
        PixelFormat::Bgra8
    }

    /// Locks the pixels for reading. The lock releases when the guard drops.
    pub fn lock(&self) -> BitmapLock<'_> {
        BitmapLock { bitmap: self }
    }

    /// Extracts the pixel memory as engine-order `R,G,B,A` bytes.
    ///
    /// Locks the surface, copies its raw memory, releases the lock, then
    /// swizzles the copy row by row. The result keeps this bitmap's stride;
    /// padding bytes are copied through untouched. The bitmap itself stays
    /// `B,G,R,A`.
    pub fn get_data(&self) -> Vec<u8> {
        let mut out = {
            let lock = self.lock();
            lock.bytes().to_vec()
        };
        crate::swizzle::bgra_to_rgba_inplace_strided(
            &mut out,
            self.width as usize,
            self.height as usize,
            self.stride,
        )
        .expect("bitmap geometry is validated at construction");
        out
    }

    /// Returns a new bitmap stretched to `width` × `height` with bilinear
    /// filtering. `self` is unchanged.
    ///
    /// The resampler averages channels independently, so it is fed the
    /// `B,G,R,A` bytes as-is; the result keeps platform order.
    ///
    /// # Panics
    ///
    /// Panics if either target dimension is zero.
    pub fn resized(&self, width: u32, height: u32) -> Bitmap {
        assert!(width > 0 && height > 0, "bitmap dimensions must be nonzero");
        let src = RgbaImage::from_raw(self.width, self.height, self.get_tight_rows())
            .expect("tight rows match the dimensions");
        let dst = imageops::resize(&src, width, height, FilterType::Triangle);
        Bitmap {
            data: dst.into_raw(),
            width,
            height,
            stride: width as usize * 4,
        }
    }

    /// Copies the rows without padding, keeping `B,G,R,A` order.
    fn get_tight_rows(&self) -> Vec<u8> {
        let row_bytes = self.width as usize * 4;
        let mut out = Vec::with_capacity(row_bytes * self.height as usize);
        for y in 0..self.height as usize {
            let start = y * self.stride;
            out.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        out
    }

    /// Mutable access to the raw `B,G,R,A` bytes, padding included.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Scoped read access to a [`Bitmap`]'s pixels.
///
/// Mirrors a platform lock-bits handle: the borrow prevents mutation for the
/// guard's lifetime, and dropping the guard releases the surface.
pub struct BitmapLock<'a> {
    bitmap: &'a Bitmap,
}

impl BitmapLock<'_> {
    /// The locked `B,G,R,A` bytes, padding included.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bitmap.data
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.bitmap.stride
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.bitmap.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bitmap.height
    }
}

//! Content-pipeline texture container: a source [`Bitmap`] plus the processed
//! engine-order mip data derived from it.
//!
//! [`TextureContent::resize`] replays what a texture processor does when a
//! target requires different dimensions: stretch the source, extract its
//! pixels as `R,G,B,A`, and rebuild the face list as a single chain whose only
//! level is the new top. Any previously generated mips are discarded, since
//! they describe the old dimensions.

use crate::bitmap::Bitmap;
use crate::pot::next_power_of_two;
use crate::SizeError;

/// One mip level: tightly packed `R,G,B,A` bytes with known dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBitmapContent {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBitmapContent {
    /// Creates a level filled with transparent black.
    pub fn new(width: u32, height: u32) -> PixelBitmapContent {
        PixelBitmapContent {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Replaces the pixel bytes. The length must be exactly
    /// `4 * width * height`.
    pub fn set_pixel_data(&mut self, data: Vec<u8>) -> Result<(), SizeError> {
        if data.len() != self.width as usize * self.height as usize * 4 {
            return Err(SizeError::PixelCountMismatch);
        }
        self.pixels = data;
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The `R,G,B,A` bytes, row-major, no padding.
    #[inline]
    pub fn pixel_data(&self) -> &[u8] {
        &self.pixels
    }
}

/// An ordered run of mip levels, largest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MipmapChain {
    levels: Vec<PixelBitmapContent>,
}

impl MipmapChain {
    /// Starts a chain from its top level.
    pub fn new(top: PixelBitmapContent) -> MipmapChain {
        MipmapChain { levels: vec![top] }
    }

    pub fn push(&mut self, level: PixelBitmapContent) {
        self.levels.push(level);
    }

    #[inline]
    pub fn levels(&self) -> &[PixelBitmapContent] {
        &self.levels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Checks that each level after the first halves the previous one,
    /// clamped at 1.
    pub fn validate_sizes(&self) -> bool {
        self.levels.windows(2).all(|pair| {
            pair[1].width == (pair[0].width / 2).max(1)
                && pair[1].height == (pair[0].height / 2).max(1)
        })
    }
}

/// A texture asset mid-processing: the platform-order source surface and the
/// engine-order faces derived from it.
///
/// A 2D texture carries one face; the type holds a list so cube faces fit the
/// same shape.
pub struct TextureContent {
    bitmap: Bitmap,
    faces: Vec<MipmapChain>,
}

impl TextureContent {
    /// Wraps a source bitmap with no processed faces yet.
    pub fn new(bitmap: Bitmap) -> TextureContent {
        TextureContent {
            bitmap,
            faces: Vec::new(),
        }
    }

    #[inline]
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    #[inline]
    pub fn faces(&self) -> &[MipmapChain] {
        &self.faces
    }

    /// Stretches the source to `width` × `height` and rebuilds the face list
    /// as one chain holding only the new top level.
    ///
    /// The old source is dropped only once the replacement and its extracted
    /// pixels exist, so a panic mid-way leaves `self` unchanged.
    ///
    /// # Panics
    ///
    /// Panics if either target dimension is zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        let resized = self.bitmap.resized(width, height);
        let data = resized.get_data();

        let mut top = PixelBitmapContent::new(width, height);
        top.set_pixel_data(data)
            .expect("extracted pixels always match the resized dimensions");

        self.bitmap = resized;
        self.faces.clear();
        self.faces.push(MipmapChain::new(top));
    }

    /// Resizes only if a dimension is not a power of two, rounding each
    /// dimension up independently. Returns true if a resize happened.
    pub fn resize_to_power_of_two(&mut self) -> bool {
        let w = next_power_of_two(self.bitmap.width());
        let h = next_power_of_two(self.bitmap.height());
        if w == self.bitmap.width() && h == self.bitmap.height() {
            return false;
        }
        self.resize(w, h);
        true
    }
}

//! The immutable pixel buffer every transformation consumes and produces.
//!
//! An [`Image`] owns exactly `width * height` colors in row-major order
//! (index = `y * width + x`). The invariant is checked once, at construction;
//! afterwards the buffer is never mutated. Transformations build a new image
//! instead.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::color::Color;
use crate::error::{EditError, Result};

/// A row-major RGB image with non-zero dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

/// Number of pixels a `width x height` image holds, if it fits in memory.
fn expected_len(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

impl Image {
    /// Build an image from row-major colors.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::InvalidDimensions`] if either dimension is zero or
    /// `pixels.len() != width * height`.
    pub fn from_buffer(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 || expected_len(width, height) != Some(pixels.len()) {
            return Err(EditError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a solid-color image.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let len = expected_len(width, height).ok_or(EditError::InvalidDimensions {
            width,
            height,
            len: 0,
        })?;
        Self::from_buffer(width, height, vec![color; len])
    }

    /// Build an image from packed `0x00RRGGBB` integers (codec interop).
    pub fn from_packed_buffer(width: u32, height: u32, packed: &[u32]) -> Result<Self> {
        let pixels = packed.iter().copied().map(Color::from_packed).collect();
        Self::from_buffer(width, height, pixels)
    }

    /// Build an image from interleaved RGB8 bytes (3 bytes per pixel).
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 3 != 0 {
            return Err(EditError::InvalidDimensions {
                width,
                height,
                len: bytes.len() / 3,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Color::rgb(px[0], px[1], px[2]))
            .collect();
        Self::from_buffer(width, height, pixels)
    }

    /// Build an image from an `image::RgbImage`.
    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_rgb8(width, height, img.as_raw())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Row-major pixel colors.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Color> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Color at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfBounds`] when `(x, y)` lies outside the image.
    pub fn at(&self, x: u32, y: u32) -> Result<Color> {
        if x >= self.width || y >= self.height {
            return Err(EditError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                w: 1,
                h: 1,
                image_width: self.width,
                image_height: self.height,
            });
        }
        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Row-major packed `0x00RRGGBB` integers for the codec boundary.
    pub fn to_packed_buffer(&self) -> Vec<u32> {
        self.pixels.iter().map(|c| c.to_packed()).collect()
    }

    /// Interleaved RGB8 bytes (3 bytes per pixel).
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }

    /// Convert to an `image::RgbImage` for encoding.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width as usize;
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgb(self.pixels[y as usize * width + x as usize].to_bytes())
        })
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

//! Blending a foreground image onto the current (background) image.

use crate::blend::BlendMode;
use crate::error::{EditError, Result};
use crate::raster::Image;

/// Composites a fixed foreground image over whatever image it is applied to.
#[derive(Debug, Clone, PartialEq)]
pub struct Blend {
    foreground: Image,
    mode: BlendMode,
}

impl Blend {
    pub fn new(foreground: Image, mode: BlendMode) -> Self {
        Self { foreground, mode }
    }

    pub fn foreground(&self) -> &Image {
        &self.foreground
    }

    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    /// Combine every pixel pair, in row-major order, into a new image.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::DimensionMismatch`] if the foreground and
    /// `background` differ in width or height.
    pub fn apply(&self, background: &Image) -> Result<Image> {
        if self.foreground.dimensions() != background.dimensions() {
            return Err(EditError::DimensionMismatch {
                foreground: self.foreground.dimensions(),
                background: background.dimensions(),
            });
        }

        let pixels = self
            .foreground
            .pixels()
            .iter()
            .zip(background.pixels())
            .map(|(&fg, &bg)| self.mode.combine(fg, bg))
            .collect();

        Image::from_buffer(background.width(), background.height(), pixels)
    }
}

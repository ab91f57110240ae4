//! WASM-compatible wrapper types for image data.

use pixelsmith_core::{EditError, Image};
use wasm_bindgen::prelude::*;

/// An RGB image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. Keep images in WASM memory and only
/// extract pixels when a canvas needs repainting.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for `ImageData`.
    pub fn rgba(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect()
    }
}

impl JsImage {
    pub(crate) fn from_image(image: &Image) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.to_rgb8(),
        }
    }

    /// Validate and convert to a core image.
    pub(crate) fn to_image(&self) -> Result<Image, EditError> {
        Image::from_rgb8(self.width, self.height, &self.pixels)
    }
}

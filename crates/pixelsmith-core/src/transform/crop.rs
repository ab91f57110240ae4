//! Rectangular crop in pixel coordinates.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner
//! - `x` grows to the right, `y` grows downward
//! - The region must lie entirely inside the source image
//!
//! Output pixel `(i, j)` is source pixel `(x + i, y + j)`. There is no
//! interpolation or resampling.

use serde::{Deserialize, Serialize};

use crate::error::{EditError, Result};
use crate::raster::Image;

/// A crop region. Coordinates are signed so that negative input parses and is
/// then rejected as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Crop {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check the region against an image of the given size.
    fn check_bounds(&self, image_width: u32, image_height: u32) -> Result<()> {
        let fits = |start: i64, len: i64, limit: u32| {
            start >= 0
                && len >= 0
                && start
                    .checked_add(len)
                    .is_some_and(|end| end <= limit as i64)
        };

        if fits(self.x, self.width, image_width) && fits(self.y, self.height, image_height) {
            Ok(())
        } else {
            Err(EditError::OutOfBounds {
                x: self.x,
                y: self.y,
                w: self.width,
                h: self.height,
                image_width,
                image_height,
            })
        }
    }

    /// Extract the region as a new image.
    ///
    /// # Errors
    ///
    /// - [`EditError::OutOfBounds`] if the region is not fully inside `image`
    /// - [`EditError::InvalidDimensions`] if the region is empty
    pub fn apply(&self, image: &Image) -> Result<Image> {
        self.check_bounds(image.width(), image.height())?;

        // Bounds are validated, so these fit in usize.
        let (x, y) = (self.x as usize, self.y as usize);
        let (w, h) = (self.width as usize, self.height as usize);

        let mut output = Vec::with_capacity(w * h);
        for row in image.rows().skip(y).take(h) {
            output.extend_from_slice(&row[x..x + w]);
        }

        Image::from_buffer(self.width as u32, self.height as u32, output)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::Color;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=40, 1u32..=40)
    }

    /// Strategy for an image size plus a region that fits inside it.
    fn region_strategy() -> impl Strategy<Value = ((u32, u32), Crop)> {
        dimensions_strategy().prop_flat_map(|(w, h)| {
            (0..w, 0..h).prop_flat_map(move |(x, y)| {
                (1..=(w - x), 1..=(h - y)).prop_map(move |(cw, ch)| {
                    ((w, h), Crop::new(x as i64, y as i64, cw as i64, ch as i64))
                })
            })
        })
    }

    /// Create a test image with unique pixel values based on position.
    fn create_test_image(width: u32, height: u32) -> Image {
        let pixels = (0..width * height).map(Color::from_packed).collect();
        Image::from_buffer(width, height, pixels).unwrap()
    }

    proptest! {
        /// Property: Full crop returns the original image.
        #[test]
        fn prop_full_crop_is_identity((width, height) in dimensions_strategy()) {
            let img = create_test_image(width, height);
            let result = Crop::new(0, 0, width as i64, height as i64).apply(&img).unwrap();
            prop_assert_eq!(result, img);
        }

        /// Property: Output has exactly the requested size.
        #[test]
        fn prop_output_matches_region(((width, height), crop) in region_strategy()) {
            let img = create_test_image(width, height);
            let result = crop.apply(&img).unwrap();
            prop_assert_eq!(result.width() as i64, crop.width);
            prop_assert_eq!(result.height() as i64, crop.height);
        }

        /// Property: Output pixel (i, j) is input pixel (x + i, y + j).
        #[test]
        fn prop_direct_reindexing(((width, height), crop) in region_strategy()) {
            let img = create_test_image(width, height);
            let result = crop.apply(&img).unwrap();
            for j in 0..result.height() {
                for i in 0..result.width() {
                    let src = img.at(crop.x as u32 + i, crop.y as u32 + j).unwrap();
                    prop_assert_eq!(result.at(i, j).unwrap(), src);
                }
            }
        }

        /// Property: Cropping a sub-region of a crop equals one absolute crop.
        #[test]
        fn prop_crop_composition(
            ((width, height), outer) in region_strategy(),
            fx in 0.0f64..1.0, fy in 0.0f64..1.0, fw in 0.0f64..1.0, fh in 0.0f64..1.0,
        ) {
            let img = create_test_image(width, height);
            let first = outer.apply(&img).unwrap();

            let ix = (fx * outer.width as f64) as i64;
            let iy = (fy * outer.height as f64) as i64;
            let iw = 1 + (fw * (outer.width - ix - 1) as f64) as i64;
            let ih = 1 + (fh * (outer.height - iy - 1) as f64) as i64;

            let nested = Crop::new(ix, iy, iw, ih).apply(&first).unwrap();
            let absolute = Crop::new(outer.x + ix, outer.y + iy, iw, ih).apply(&img).unwrap();
            prop_assert_eq!(nested, absolute);
        }

        /// Property: Any region reaching past the right edge is rejected.
        #[test]
        fn prop_overhang_rejected(
            (width, height) in dimensions_strategy(),
            overhang in 1i64..10,
        ) {
            let img = create_test_image(width, height);
            let crop = Crop::new(0, 0, width as i64 + overhang, height as i64);
            let is_out_of_bounds = matches!(crop.apply(&img), Err(EditError::OutOfBounds { .. }));
            prop_assert!(is_out_of_bounds);
        }
    }
}

//! Image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use serde::{Deserialize, Serialize};

use super::{CodecError, CodecOptions};
use crate::raster::Image;

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

impl Orientation {
    /// Read the orientation tag from an image container.
    ///
    /// Returns `Orientation::Normal` if there is no EXIF data.
    pub fn from_exif(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(bytes);
        let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
            return Orientation::Normal;
        };
        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default()
    }

    fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Orientation::Normal => img,
            Orientation::FlipHorizontal => img.fliph(),
            Orientation::Rotate180 => img.rotate180(),
            Orientation::FlipVertical => img.flipv(),
            Orientation::Transpose => img.rotate90().fliph(),
            Orientation::Rotate90CW => img.rotate90(),
            Orientation::Transverse => img.rotate270().fliph(),
            Orientation::Rotate270CW => img.rotate270(),
        }
    }
}

/// Decode an encoded image (any format the `image` crate was built with).
///
/// # Errors
///
/// Returns `CodecError::InvalidFormat` if the format cannot be recognised and
/// `CodecError::CorruptedFile` if decoding fails.
pub fn decode_bytes(bytes: &[u8], options: &CodecOptions) -> Result<Image, CodecError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        return Err(CodecError::InvalidFormat);
    }

    let mut img = reader
        .decode()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;

    if options.apply_orientation {
        img = Orientation::from_exif(bytes).apply(img);
    }

    Image::from_rgb_image(&img.into_rgb8()).map_err(|e| CodecError::CorruptedFile(e.to_string()))
}

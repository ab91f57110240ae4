//! JPEG and PNG encoding for `save`.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};

use super::{CodecError, CodecOptions};
use crate::raster::Image;

/// Formats the encoder can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(CodecError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Encode an image to bytes.
///
/// JPEG quality comes from `options.jpeg_quality`, clamped to 1-100.
pub fn encode_bytes(
    image: &Image,
    format: OutputFormat,
    options: &CodecOptions,
) -> Result<Vec<u8>, CodecError> {
    let pixels = image.to_rgb8();
    let (width, height) = image.dimensions();
    let mut buffer = Cursor::new(Vec::new());

    let result = match format {
        OutputFormat::Jpeg => {
            let quality = options.jpeg_quality.clamp(1, 100);
            JpegEncoder::new_with_quality(&mut buffer, quality).write_image(
                &pixels,
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        OutputFormat::Png => {
            PngEncoder::new(&mut buffer).write_image(&pixels, width, height, ExtendedColorType::Rgb8)
        }
    };
    result.map_err(|e| CodecError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gray(width: u32, height: u32) -> Image {
        Image::filled(width, height, Color::rgb(128, 128, 128)).unwrap()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.jpg")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("a.JPEG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("dir/b.png")).unwrap(), OutputFormat::Png);
        assert!(matches!(
            OutputFormat::from_path(Path::new("c.gif")),
            Err(CodecError::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let jpeg = encode_bytes(&gray(100, 100), OutputFormat::Jpeg, &CodecOptions::default()).unwrap();

        // SOI and EOI markers
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_png_signature() {
        let png = encode_bytes(&gray(10, 10), OutputFormat::Png, &CodecOptions::default()).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let img = gray(10, 10);
        for quality in [0, 255] {
            let options = CodecOptions {
                jpeg_quality: quality,
                ..Default::default()
            };
            assert!(encode_bytes(&img, OutputFormat::Jpeg, &options).is_ok());
        }
    }
}

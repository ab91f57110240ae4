//! Codec boundary: turning paths and bytes into [`Image`]s and back.
//!
//! This module provides:
//! - Byte-level decoding with EXIF orientation correction ([`decode_bytes`])
//! - Byte-level JPEG/PNG encoding ([`encode_bytes`])
//! - The [`ImageCodec`] collaborator trait the dispatcher loads and saves through
//! - [`FileCodec`] (filesystem) and [`MemoryCodec`] (path-keyed map) implementations
//!
//! Codec failures are reported as [`CodecError`] and surface to the editing
//! session as [`EditError::IoFailure`](crate::EditError::IoFailure).

mod decode;
mod encode;
mod file;
mod memory;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::Image;

pub use decode::{decode_bytes, Orientation};
pub use encode::{encode_bytes, OutputFormat};
pub use file::FileCodec;
pub use memory::MemoryCodec;

/// Error types for image decoding and encoding.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The bytes are not a recognised image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The output format cannot be written.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Encoding failed inside the image library.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Nothing is stored under the requested path.
    #[error("No image found at {}", .0.display())]
    NotFound(PathBuf),

    /// Filesystem error while reading or writing.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options shared by decoding and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// JPEG quality (1-100). Out-of-range values are clamped at encode time.
    pub jpeg_quality: u8,
    /// Apply EXIF orientation when decoding.
    pub apply_orientation: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: 90,
            apply_orientation: true,
        }
    }
}

/// The decode/encode collaborator used by the dispatcher.
pub trait ImageCodec {
    /// Produce the image stored at `path`.
    fn decode(&self, path: &Path) -> Result<Image, CodecError>;

    /// Store `image` at `path`.
    fn encode(&mut self, image: &Image, path: &Path) -> Result<(), CodecError>;
}

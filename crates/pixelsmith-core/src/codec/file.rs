//! Filesystem-backed codec.

use std::path::Path;

use tracing::debug;

use super::{decode_bytes, encode_bytes, CodecError, CodecOptions, ImageCodec, OutputFormat};
use crate::raster::Image;

/// Reads and writes image files on disk.
#[derive(Debug, Clone, Default)]
pub struct FileCodec {
    options: CodecOptions,
}

impl FileCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }
}

impl ImageCodec for FileCodec {
    fn decode(&self, path: &Path) -> Result<Image, CodecError> {
        let bytes = std::fs::read(path).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read image file");
        decode_bytes(&bytes, &self.options)
    }

    fn encode(&mut self, image: &Image, path: &Path) -> Result<(), CodecError> {
        let format = OutputFormat::from_path(path)?;
        let bytes = encode_bytes(image, format, &self.options)?;
        std::fs::write(path, &bytes).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote image file");
        Ok(())
    }
}

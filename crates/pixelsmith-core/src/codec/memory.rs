//! In-memory codec keyed by path.
//!
//! Used where there is no filesystem (the browser front end) and by tests.
//! Images are stored already decoded, so `save` followed by `load` returns
//! the exact same pixels.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{decode_bytes, CodecError, CodecOptions, ImageCodec};
use crate::raster::Image;

#[derive(Debug, Clone, Default)]
pub struct MemoryCodec {
    images: HashMap<PathBuf, Image>,
}

impl MemoryCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an image under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, image: Image) {
        self.images.insert(path.into(), image);
    }

    /// Decode encoded bytes and store the result under `path`.
    pub fn insert_encoded(
        &mut self,
        path: impl Into<PathBuf>,
        bytes: &[u8],
        options: &CodecOptions,
    ) -> Result<&Image, CodecError> {
        let image = decode_bytes(bytes, options)?;
        match self.images.entry(path.into()) {
            Entry::Occupied(mut slot) => {
                slot.insert(image);
                Ok(slot.into_mut())
            }
            Entry::Vacant(slot) => Ok(slot.insert(image)),
        }
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Image> {
        self.images.get(path.as_ref())
    }

    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Image> {
        self.images.remove(path.as_ref())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Stored paths in sorted order.
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.images.keys().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }
}

impl ImageCodec for MemoryCodec {
    fn decode(&self, path: &Path) -> Result<Image, CodecError> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| CodecError::NotFound(path.to_path_buf()))
    }

    fn encode(&mut self, image: &Image, path: &Path) -> Result<(), CodecError> {
        self.images.insert(path.to_path_buf(), image.clone());
        Ok(())
    }
}

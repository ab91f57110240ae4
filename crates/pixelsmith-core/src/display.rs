//! The display collaborator: the single "current image" slot.

use crate::raster::Image;

/// Holds and renders the current image.
///
/// `show` replaces the slot wholesale. Implementations never edit the image
/// they hold.
pub trait ImageDisplay {
    fn show(&mut self, image: Image);

    fn current(&self) -> Option<&Image>;
}

/// A display that only keeps the slot, with a count of publications.
#[derive(Debug, Clone, Default)]
pub struct SlotDisplay {
    current: Option<Image>,
    published: usize,
}

impl SlotDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times an image has been shown.
    pub fn published(&self) -> usize {
        self.published
    }

    pub fn take(&mut self) -> Option<Image> {
        self.current.take()
    }
}

impl ImageDisplay for SlotDisplay {
    fn show(&mut self, image: Image) {
        self.current = Some(image);
        self.published += 1;
    }

    fn current(&self) -> Option<&Image> {
        self.current.as_ref()
    }
}

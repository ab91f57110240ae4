//! Terminal display: reports each published image and optionally writes a
//! preview file that an external viewer can watch.

use std::path::PathBuf;

use pixelsmith_core::codec::{encode_bytes, OutputFormat};
use pixelsmith_core::{CodecOptions, Image, ImageDisplay, SlotDisplay};
use tracing::{info, warn};

pub struct PreviewDisplay {
    slot: SlotDisplay,
    target: Option<PreviewTarget>,
}

struct PreviewTarget {
    path: PathBuf,
    format: OutputFormat,
    options: CodecOptions,
}

impl PreviewDisplay {
    /// Display without a preview file.
    pub fn terminal() -> Self {
        Self {
            slot: SlotDisplay::new(),
            target: None,
        }
    }

    /// Display that rewrites `path` on every change.
    pub fn with_file(path: PathBuf, options: CodecOptions) -> anyhow::Result<Self> {
        let format = OutputFormat::from_path(&path)?;
        Ok(Self {
            slot: SlotDisplay::new(),
            target: Some(PreviewTarget {
                path,
                format,
                options,
            }),
        })
    }

    pub fn published(&self) -> usize {
        self.slot.published()
    }

    fn write_preview(&self, image: &Image) {
        let Some(target) = &self.target else {
            return;
        };
        let written = encode_bytes(image, target.format, &target.options)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| std::fs::write(&target.path, bytes).map_err(anyhow::Error::from));
        match written {
            Ok(()) => info!(path = %target.path.display(), "preview updated"),
            // The edit itself succeeded; a stale preview is only worth a warning.
            Err(err) => warn!(path = %target.path.display(), "preview not written: {err}"),
        }
    }
}

impl ImageDisplay for PreviewDisplay {
    fn show(&mut self, image: Image) {
        println!("{}x{}", image.width(), image.height());
        self.write_preview(&image);
        self.slot.show(image);
    }

    fn current(&self) -> Option<&Image> {
        self.slot.current()
    }
}

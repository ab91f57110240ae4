//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use pixelsmith_core::CodecOptions;

/// Interactive image editor.
///
/// Reads one command per line: `load <path>`, `crop <x> <y> <w> <h>`,
/// `blend <path> <mode>`, `save <path>`, `exit`.
#[derive(Debug, Parser)]
#[command(name = "pixelsmith", version, about)]
pub struct Args {
    /// Image to load before reading commands
    pub image: Option<PathBuf>,

    /// Re-encode the current image to this file after every change
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// JPEG quality used by `save` and the preview (1-100)
    #[arg(long, default_value_t = 90)]
    pub quality: u8,

    /// Do not apply EXIF orientation when loading
    #[arg(long)]
    pub no_orientation: bool,

    /// Prompt printed before each command in interactive mode
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            jpeg_quality: self.quality,
            apply_orientation: !self.no_orientation,
        }
    }
}

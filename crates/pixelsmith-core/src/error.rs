//! Error types shared by the image model, transformations and the dispatcher.

use thiserror::Error;

use crate::codec::CodecError;

/// Result alias used throughout the editing core.
pub type Result<T> = std::result::Result<T, EditError>;

/// Errors reported for a single editing command.
///
/// None of these terminate an editing session: the dispatcher surfaces them
/// for the offending line and keeps accepting input.
#[derive(Debug, Error)]
pub enum EditError {
    /// The pixel buffer does not hold exactly `width * height` colors, or a
    /// dimension is zero.
    #[error("Invalid dimensions: {width}x{height} image cannot hold {len} pixels")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    /// A crop region or pixel coordinate falls outside the image.
    #[error(
        "Region {w}x{h} at ({x}, {y}) lies outside the {image_width}x{image_height} image"
    )]
    OutOfBounds {
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        image_width: u32,
        image_height: u32,
    },

    /// Blend operands differ in size.
    #[error(
        "Dimension mismatch: foreground is {}x{} but background is {}x{}",
        .foreground.0, .foreground.1, .background.0, .background.1
    )]
    DimensionMismatch {
        foreground: (u32, u32),
        background: (u32, u32),
    },

    /// A command line could not be parsed into a directive or transformation.
    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    /// The codec collaborator failed to read or write an image.
    #[error("I/O failure: {0}")]
    IoFailure(String),

    /// An edit was requested before any image was loaded.
    #[error("No image loaded; use `load <path>` first")]
    NoImage,
}

impl From<CodecError> for EditError {
    fn from(err: CodecError) -> Self {
        EditError::IoFailure(err.to_string())
    }
}

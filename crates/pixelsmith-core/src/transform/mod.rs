//! Image transformations: crop and foreground blend.
//!
//! Every transformation is a pure function from one [`Image`] to a new one.
//! The input is borrowed and never modified, so a failed transformation
//! leaves the caller's image exactly as it was.
//!
//! # Command Grammar
//!
//! ```text
//! crop  <x> <y> <w> <h>      integers, region must lie inside the image
//! blend <path> <mode>        foreground image at path, mode name
//! <anything else>            no-op
//! ```

mod blend;
mod crop;

use std::path::Path;

use tracing::debug;

use crate::blend::BlendMode;
use crate::codec::ImageCodec;
use crate::command::Tokens;
use crate::error::Result;
use crate::raster::Image;

pub use blend::Blend;
pub use crop::Crop;

/// A parsed transformation, ready to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    Crop(Crop),
    Blend(Blend),
    Noop,
}

impl Transformation {
    /// Parse a command line.
    ///
    /// `blend` loads its foreground image through `codec` at parse time.
    /// Unknown directives produce [`Transformation::Noop`]; unknown blend mode
    /// names produce [`BlendMode::NoBlend`]. Crop arguments are strict.
    ///
    /// # Errors
    ///
    /// - [`EditError::MalformedCommand`](crate::EditError::MalformedCommand)
    ///   for missing or non-integer crop arguments, or a blend without path/mode
    /// - [`EditError::IoFailure`](crate::EditError::IoFailure) if the blend
    ///   foreground cannot be decoded
    pub fn parse<C: ImageCodec + ?Sized>(line: &str, codec: &C) -> Result<Self> {
        let Some(mut tokens) = Tokens::new(line) else {
            return Ok(Transformation::Noop);
        };

        let transformation = match tokens.directive() {
            "crop" => Transformation::Crop(Crop::new(
                tokens.next_int("x")?,
                tokens.next_int("y")?,
                tokens.next_int("width")?,
                tokens.next_int("height")?,
            )),
            "blend" => {
                let path = tokens.next_arg("a foreground image path")?;
                let mode = tokens.next_arg("a blend mode")?;
                Self::blend_from_path(Path::new(path), mode, codec)?
            }
            _ => Transformation::Noop,
        };

        debug!(transformation = transformation.name(), "parsed transformation");
        Ok(transformation)
    }

    /// Load the foreground through `codec` and resolve `mode_name`.
    pub fn blend_from_path<C: ImageCodec + ?Sized>(
        path: &Path,
        mode_name: &str,
        codec: &C,
    ) -> Result<Self> {
        let foreground = codec.decode(path)?;
        Ok(Transformation::Blend(Blend::new(
            foreground,
            BlendMode::parse(mode_name),
        )))
    }

    /// Apply to `image`, producing a new image.
    pub fn process(&self, image: &Image) -> Result<Image> {
        match self {
            Transformation::Crop(crop) => crop.apply(image),
            Transformation::Blend(blend) => blend.apply(image),
            Transformation::Noop => Ok(image.clone()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transformation::Crop(_) => "crop",
            Transformation::Blend(_) => "blend",
            Transformation::Noop => "noop",
        }
    }
}

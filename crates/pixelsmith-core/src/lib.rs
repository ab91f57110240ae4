//! Pixelsmith Core - interactive image editing pipeline
//!
//! This crate provides the pixel model, the transformations that can be
//! applied to it, and the command interpreter that drives an editing session.
//!
//! # Module Structure
//!
//! - `color` - Saturating RGB colors and the packed 24-bit interop format
//! - `raster` - The immutable [`Image`] pixel buffer
//! - `blend` - Blend modes combining a foreground and background color
//! - `transform` - Crop and blend transformations and their command parser
//! - `command` - Tokenizing and session directives (`load`, `save`, `exit`)
//! - `dispatcher` - The line-at-a-time [`CommandDispatcher`]
//! - `codec` - Decode/encode collaborators (filesystem and in-memory)
//! - `display` - The current-image slot collaborator
//!
//! # Example
//!
//! ```ignore
//! use pixelsmith_core::{CommandDispatcher, FileCodec, SlotDisplay};
//!
//! let mut session = CommandDispatcher::new(FileCodec::default(), SlotDisplay::new());
//! session.dispatch("load photo.jpg")?;
//! session.dispatch("crop 10 10 50 50")?;
//! session.dispatch("save cropped.png")?;
//! ```

pub mod blend;
pub mod codec;
pub mod color;
pub mod command;
pub mod dispatcher;
pub mod display;
pub mod error;
pub mod raster;
pub mod transform;

pub use blend::BlendMode;
pub use codec::{CodecError, CodecOptions, FileCodec, ImageCodec, MemoryCodec};
pub use color::Color;
pub use dispatcher::{CommandDispatcher, DispatcherState, Outcome, RunSummary};
pub use display::{ImageDisplay, SlotDisplay};
pub use error::{EditError, Result};
pub use raster::Image;
pub use transform::{Blend, Crop, Transformation};

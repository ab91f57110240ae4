//! Browser editing session.
//!
//! There is no filesystem in the browser, so images are registered by name
//! from bytes (or raw pixels) and commands refer to those names as paths:
//!
//! ```typescript
//! const session = new EditorSession(90);
//! session.register_image("photo.jpg", new Uint8Array(await file.arrayBuffer()));
//! session.execute("load photo.jpg");
//! session.execute("crop 10 10 200 200");
//! const img = session.current();
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(img.rgba()), img.width), 0, 0);
//! ```

use std::path::Path;

use pixelsmith_core::codec::{encode_bytes, OutputFormat};
use pixelsmith_core::{
    BlendMode, CodecError, CodecOptions, CommandDispatcher, EditError, ImageCodec, ImageDisplay,
    MemoryCodec, Outcome, SlotDisplay,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::JsImage;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Snapshot of the session for UI state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionStatus {
    running: bool,
    width: Option<u32>,
    height: Option<u32>,
    published: usize,
    images: Vec<String>,
}

#[wasm_bindgen]
pub struct EditorSession {
    dispatcher: CommandDispatcher<MemoryCodec, SlotDisplay>,
    options: CodecOptions,
}

#[wasm_bindgen]
impl EditorSession {
    /// Create a session. `jpeg_quality` is used by `export_jpeg`.
    #[wasm_bindgen(constructor)]
    pub fn new(jpeg_quality: u8) -> EditorSession {
        let options = CodecOptions {
            jpeg_quality,
            ..Default::default()
        };
        EditorSession {
            dispatcher: CommandDispatcher::new(MemoryCodec::new(), SlotDisplay::new()),
            options,
        }
    }

    /// Decode encoded image bytes (JPEG/PNG) and register them under `name`.
    pub fn register_image(&mut self, name: &str, bytes: &[u8]) -> Result<(), JsValue> {
        self.register_encoded(name, bytes).map_err(to_js)
    }

    /// Register raw RGB pixels under `name`.
    pub fn register_pixels(&mut self, name: &str, image: &JsImage) -> Result<(), JsValue> {
        let image = image.to_image().map_err(to_js)?;
        self.dispatcher.codec_mut().insert(name, image);
        Ok(())
    }

    /// Run one command line. Returns a short description of what happened.
    pub fn execute(&mut self, line: &str) -> Result<String, JsValue> {
        self.execute_line(line).map(|o| describe(&o)).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.dispatcher.is_running()
    }

    /// The current image, if any has been loaded.
    pub fn current(&self) -> Option<JsImage> {
        self.dispatcher.display().current().map(JsImage::from_image)
    }

    /// Encode a registered (or saved) image as JPEG.
    pub fn export_jpeg(&self, name: &str) -> Result<Vec<u8>, JsValue> {
        self.export(name, OutputFormat::Jpeg).map_err(to_js)
    }

    /// Encode a registered (or saved) image as PNG.
    pub fn export_png(&self, name: &str) -> Result<Vec<u8>, JsValue> {
        self.export(name, OutputFormat::Png).map_err(to_js)
    }

    /// `{ running, width, height, published, images }`
    pub fn status(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.snapshot()).map_err(to_js)
    }
}

impl EditorSession {
    fn register_encoded(&mut self, name: &str, bytes: &[u8]) -> Result<(), CodecError> {
        let options = self.options;
        self.dispatcher
            .codec_mut()
            .insert_encoded(name, bytes, &options)?;
        Ok(())
    }

    fn execute_line(&mut self, line: &str) -> Result<Outcome, EditError> {
        self.dispatcher.dispatch(line)
    }

    fn export(&self, name: &str, format: OutputFormat) -> Result<Vec<u8>, CodecError> {
        let image = self.dispatcher.codec().decode(Path::new(name))?;
        encode_bytes(&image, format, &self.options)
    }

    fn snapshot(&self) -> SessionStatus {
        let current = self.dispatcher.display().current();
        SessionStatus {
            running: self.dispatcher.is_running(),
            width: current.map(|img| img.width()),
            height: current.map(|img| img.height()),
            published: self.dispatcher.display().published(),
            images: self
                .dispatcher
                .codec()
                .paths()
                .into_iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Skipped => "skipped".to_string(),
        Outcome::Loaded { width, height } => format!("loaded {width}x{height}"),
        Outcome::Applied {
            transformation,
            width,
            height,
        } => format!("{transformation} {width}x{height}"),
        Outcome::Saved(path) => format!("saved {}", path.display()),
        Outcome::Exited => "exited".to_string(),
    }
}

/// Blend mode names understood by the `blend` command.
#[wasm_bindgen]
pub fn blend_modes() -> js_sys::Array {
    BlendMode::NAMES.iter().map(|&name| JsValue::from_str(name)).collect()
}

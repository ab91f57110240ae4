//! Pixelsmith WASM - WebAssembly bindings for Pixelsmith
//!
//! This crate exposes the pixelsmith-core editing session to JavaScript so a
//! browser canvas can act as the display.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `session` - The command-driven editing session
//!
//! # Usage
//!
//! ```typescript
//! import init, { EditorSession } from '@pixelsmith/wasm';
//!
//! await init();
//! const session = new EditorSession(90);
//! session.register_image("a.jpg", bytes);
//! session.execute("load a.jpg");
//! ```

use wasm_bindgen::prelude::*;

mod session;
mod types;

pub use session::{blend_modes, EditorSession};
pub use types::JsImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

//! Squash WASM - WebAssembly bindings for Squash
//!
//! This crate provides WASM bindings to expose the squash-core compression
//! pipeline to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `session` - Per-file compression session (load once, recompress on
//!   every quality change)
//! - `compress` - One-shot compression and small helpers
//! - `types` - WASM-compatible wrapper types for compression results
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession } from '@squash/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Load an uploaded file
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const session = new JsSession(bytes, file.type, file.name);
//!
//! // Recompress on every slider change (0-100)
//! const output = session.compress(slider.value);
//! console.log(`${output.size_label} -> ${output.file_name}`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod session;
mod types;

// Re-export public types
pub use compress::{compress_image, format_file_size, is_image_mime};
pub use session::JsSession;
pub use types::JsOutput;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

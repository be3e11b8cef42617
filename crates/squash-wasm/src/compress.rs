//! One-shot compression bindings and small helpers.
//!
//! `compress_image` covers the simple embed case (no session reuse); pages
//! that recompress on slider changes should hold a `JsSession` instead so
//! the file is only decoded once.

use squash_core::{Compressor, DefaultCodec, Quality};
use wasm_bindgen::prelude::*;

use crate::types::JsOutput;

/// Load, recompress, and select output in one call.
///
/// # Arguments
///
/// * `bytes` - The file bytes as a `Uint8Array`
/// * `mime_type` - The file's declared type; must match `image/*`
/// * `file_name` - The original file name, used for download naming
/// * `quality_percent` - Quality in the 0-100 slider range
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const output = compress_image(bytes, file.type, file.name, 80);
/// const blob = new Blob([output.bytes()], { type: output.mime_type });
/// ```
#[wasm_bindgen]
pub fn compress_image(
    bytes: &[u8],
    mime_type: &str,
    file_name: &str,
    quality_percent: f32,
) -> Result<JsOutput, JsValue> {
    let compressor = Compressor::new(DefaultCodec);
    let session = compressor
        .load(bytes.to_vec(), mime_type, file_name)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    compressor
        .compress(&session, Quality::from_percent(quality_percent))
        .map(JsOutput::from_output)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format a byte count the way the size labels do ("1.5 KB").
///
/// Negative or non-finite input formats as zero.
#[wasm_bindgen]
pub fn format_file_size(bytes: f64) -> String {
    let bytes = if bytes.is_finite() && bytes > 0.0 {
        bytes as u64
    } else {
        0
    };
    squash_core::format_file_size(bytes)
}

/// The `image/*` filter applied before accepting a dropped file.
#[wasm_bindgen]
pub fn is_image_mime(mime_type: &str) -> bool {
    squash_core::is_image_mime(mime_type)
}

//! WASM-compatible wrapper types for compression results.
//!
//! This module provides JavaScript-friendly types that wrap the core Squash
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use serde::Serialize;
use squash_core::Output;
use wasm_bindgen::prelude::*;

/// The outcome of one recompression, exposed to JavaScript.
///
/// Wraps the core output selection: either the re-encoded bytes, or the
/// original file when re-encoding failed to shrink it (check
/// `original_recommended`).
///
/// # Memory Management
///
/// The output bytes live in WASM memory. `bytes()` copies them into
/// JavaScript memory as a `Uint8Array`; wasm-bindgen's finalizer releases
/// the WASM side automatically.
#[wasm_bindgen]
pub struct JsOutput {
    inner: Output,
}

#[wasm_bindgen]
impl JsOutput {
    /// Bytes to preview and download. Copies into JavaScript memory.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes().to_vec()
    }

    /// Byte length of the selected output.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_length()
    }

    /// MIME type of the selected output.
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// Suggested download name: `compressed_<name>` when compression won,
    /// the original name otherwise.
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name().to_string()
    }

    /// True when re-encoding would have grown the file and the original
    /// is recommended instead.
    #[wasm_bindgen(getter)]
    pub fn original_recommended(&self) -> bool {
        self.inner.original_recommended()
    }

    /// Size label for the UI, e.g. "1.5 KB" or
    /// "1.5 KB (original recommended)".
    #[wasm_bindgen(getter)]
    pub fn size_label(&self) -> String {
        self.inner.size_label()
    }

    /// Plain-object summary of the outcome for UI consumption:
    /// `{ byteLength, mimeType, fileName, originalRecommended, sizeLabel }`.
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        let summary = OutputSummary {
            byte_length: self.inner.byte_length(),
            mime_type: self.inner.mime_type(),
            file_name: self.inner.file_name(),
            original_recommended: self.inner.original_recommended(),
            size_label: self.inner.size_label(),
        };
        serde_wasm_bindgen::to_value(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsOutput {
    /// Wrap a core output. Internal constructor used by the bindings.
    pub(crate) fn from_output(inner: Output) -> Self {
        Self { inner }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputSummary<'a> {
    byte_length: usize,
    mime_type: &'a str,
    file_name: &'a str,
    original_recommended: bool,
    size_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use squash_core::EncodedResult;

    #[test]
    fn test_js_output_compressed_getters() {
        let output = Output::Compressed {
            result: EncodedResult::new(vec![0u8; 1536], "image/jpeg"),
            file_name: "compressed_photo.jpg".to_string(),
        };
        let js = JsOutput::from_output(output);

        assert_eq!(js.byte_length(), 1536);
        assert_eq!(js.mime_type(), "image/jpeg");
        assert_eq!(js.file_name(), "compressed_photo.jpg");
        assert!(!js.original_recommended());
        assert_eq!(js.size_label(), "1.5 KB");
        assert_eq!(js.bytes().len(), 1536);
    }

    #[test]
    fn test_js_output_original_getters() {
        let output = Output::Original {
            bytes: vec![9u8; 1024],
            mime_type: "image/png".to_string(),
            file_name: "icon.png".to_string(),
        };
        let js = JsOutput::from_output(output);

        assert_eq!(js.byte_length(), 1024);
        assert_eq!(js.file_name(), "icon.png");
        assert!(js.original_recommended());
        assert_eq!(js.size_label(), "1 KB (original recommended)");
    }
}

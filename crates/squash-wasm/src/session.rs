//! Compression session bindings.
//!
//! A session is created once per uploaded file and holds the decoded
//! bitmap, so slider changes recompress without re-decoding. Request
//! tokens let asynchronous callers (e.g. a Web Worker round trip) discard
//! results that finish out of order.

use squash_core::{Compressor, DefaultCodec, Quality, RequestTicket, Session};
use wasm_bindgen::prelude::*;

use crate::types::JsOutput;

/// A loaded source image plus the compressor, exposed to JavaScript.
#[wasm_bindgen]
pub struct JsSession {
    session: Session,
    compressor: Compressor<DefaultCodec>,
}

#[wasm_bindgen]
impl JsSession {
    /// Decode and measure an uploaded file.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The file bytes as a `Uint8Array`
    /// * `mime_type` - The file's declared type; must match `image/*`
    /// * `file_name` - The original file name, used for download naming
    ///
    /// # Errors
    ///
    /// Returns an error if the MIME type is not an image type, the file is
    /// empty, or the bytes cannot be decoded.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8], mime_type: &str, file_name: &str) -> Result<JsSession, JsValue> {
        let compressor = Compressor::new(DefaultCodec);
        let session = compressor
            .load(bytes.to_vec(), mime_type, file_name)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(JsSession {
            session,
            compressor,
        })
    }

    /// Decoded width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.session.width()
    }

    /// Decoded height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.session.height()
    }

    /// Byte length of the original file.
    #[wasm_bindgen(getter)]
    pub fn original_byte_length(&self) -> usize {
        self.session.original_byte_length()
    }

    /// Size label for the original file, e.g. "2.37 MB".
    #[wasm_bindgen(getter)]
    pub fn original_size_label(&self) -> String {
        squash_core::format_file_size(self.session.original_byte_length() as u64)
    }

    /// The uploaded file's name.
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.session.file_name().to_string()
    }

    /// The declared MIME type of the uploaded file.
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.session.mime_type().to_string()
    }

    /// Recompress at a quality between 0 and 100 (the slider range).
    ///
    /// Idempotent: the same quality always recomputes from the stored
    /// bitmap and yields the same output.
    pub fn compress(&self, quality_percent: f32) -> Result<JsOutput, JsValue> {
        let quality = Quality::from_percent(quality_percent);
        self.compressor
            .compress(&self.session, quality)
            .map(JsOutput::from_output)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Issue a request token, superseding all earlier ones.
    ///
    /// For callers that run compression asynchronously and may see results
    /// resolve out of order: take a token before starting, and check
    /// `is_current` before displaying the finished result.
    pub fn begin_request(&mut self) -> u64 {
        self.session.begin_request().value()
    }

    /// Whether a token still identifies the latest request.
    pub fn is_current(&self, token: u64) -> bool {
        self.session.is_current(RequestTicket::from(token))
    }
}

/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Minimal valid JPEG bytes (1x1 pixel)
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];

    #[wasm_bindgen_test]
    fn test_session_loads_and_measures() {
        let session = JsSession::new(MINIMAL_JPEG, "image/jpeg", "photo.jpg").unwrap();

        assert_eq!(session.width(), 1);
        assert_eq!(session.height(), 1);
        assert_eq!(session.original_byte_length(), MINIMAL_JPEG.len());
        assert_eq!(session.file_name(), "photo.jpg");
    }

    #[wasm_bindgen_test]
    fn test_session_rejects_non_image() {
        let result = JsSession::new(&[1, 2, 3], "text/plain", "notes.txt");
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_session_rejects_corrupt_image() {
        let result = JsSession::new(&[0, 1, 2, 3], "image/jpeg", "broken.jpg");
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_session_compress_selects_consistent_output() {
        let session = JsSession::new(MINIMAL_JPEG, "image/jpeg", "photo.jpg").unwrap();
        let output = session.compress(80.0).unwrap();

        // Either branch is valid for a tiny input; naming must match it
        if output.original_recommended() {
            assert_eq!(output.file_name(), "photo.jpg");
            assert_eq!(output.byte_length(), MINIMAL_JPEG.len());
        } else {
            assert_eq!(output.file_name(), "compressed_photo.jpg");
            assert!(output.byte_length() < MINIMAL_JPEG.len());
        }
    }

    #[wasm_bindgen_test]
    fn test_request_tokens_supersede() {
        let mut session = JsSession::new(MINIMAL_JPEG, "image/jpeg", "photo.jpg").unwrap();

        let first = session.begin_request();
        let second = session.begin_request();

        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }
}

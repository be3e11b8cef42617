//! Output selection: compressed bytes or the original file.

use crate::bytesize::format_file_size;
use crate::session::Session;

/// Prefix attached to the suggested download name when compression won.
const COMPRESSED_PREFIX: &str = "compressed_";

/// Bytes produced by one re-encode pass.
#[derive(Debug, Clone)]
pub struct EncodedResult {
    bytes: Vec<u8>,
    mime_type: String,
}

impl EncodedResult {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// The outcome of one recompression: whichever of the re-encoded bytes and
/// the original file the user should download.
#[derive(Debug, Clone)]
pub enum Output {
    /// The re-encoded bytes were smaller.
    Compressed {
        result: EncodedResult,
        /// Suggested download name, `compressed_<original name>`.
        file_name: String,
    },
    /// Re-encoding did not shrink the file; the original is recommended.
    Original {
        bytes: Vec<u8>,
        mime_type: String,
        /// The original file name, unchanged.
        file_name: String,
    },
}

/// Pick the smaller of the re-encoded bytes and the original file.
///
/// This is the pipeline's sole recovery path: re-encoding an
/// already-optimized or lossless input can grow it, in which case the
/// original file wins and the UI should say so.
pub fn select_output(encoded: EncodedResult, session: &Session) -> Output {
    if encoded.byte_length() >= session.original_byte_length() {
        Output::Original {
            bytes: session.original_bytes().to_vec(),
            mime_type: session.mime_type().to_string(),
            file_name: session.file_name().to_string(),
        }
    } else {
        let file_name = format!("{COMPRESSED_PREFIX}{}", session.file_name());
        Output::Compressed {
            result: encoded,
            file_name,
        }
    }
}

impl Output {
    /// The bytes to preview and download.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Output::Compressed { result, .. } => result.bytes(),
            Output::Original { bytes, .. } => bytes,
        }
    }

    pub fn byte_length(&self) -> usize {
        self.bytes().len()
    }

    pub fn mime_type(&self) -> &str {
        match self {
            Output::Compressed { result, .. } => result.mime_type(),
            Output::Original { mime_type, .. } => mime_type,
        }
    }

    /// Suggested download file name.
    pub fn file_name(&self) -> &str {
        match self {
            Output::Compressed { file_name, .. } | Output::Original { file_name, .. } => file_name,
        }
    }

    /// True when re-encoding failed to shrink the file and the original
    /// should be kept.
    pub fn original_recommended(&self) -> bool {
        matches!(self, Output::Original { .. })
    }

    /// Human-readable size label for display next to the preview.
    pub fn size_label(&self) -> String {
        let size = format_file_size(self.byte_length() as u64);
        if self.original_recommended() {
            format!("{size} (original recommended)")
        } else {
            size
        }
    }
}

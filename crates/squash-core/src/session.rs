//! Compression session: the loaded source image plus request tracking.
//!
//! One session corresponds to one uploaded file. Every recompression is an
//! independent recomputation from the session's stored bitmap, so there is
//! no state machine; the only mutable state is the request counter used to
//! detect superseded recompressions.

use crate::codec::{Bitmap, Codec};
use crate::format::ImageFormat;
use crate::pipeline::CompressError;

/// Ticket identifying one recompression request.
///
/// Tickets are issued in increasing order and only the most recently
/// issued one is current. A result computed under a superseded ticket must
/// be discarded by the caller instead of displayed; this is what prevents
/// a slow early encode from overwriting the result of a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// The raw ticket value, for callers that move tickets across a
    /// language boundary.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for RequestTicket {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A loaded source image.
///
/// Owns the original file bytes (kept verbatim for the original-is-smaller
/// fallback) and the decoded bitmap that recompression starts from.
#[derive(Debug)]
pub struct Session {
    file_name: String,
    mime_type: String,
    format: ImageFormat,
    bytes: Vec<u8>,
    bitmap: Bitmap,
    last_ticket: u64,
}

impl Session {
    /// Decode and measure an uploaded file.
    ///
    /// # Errors
    ///
    /// Returns `CompressError::NotAnImage` if the declared MIME type does
    /// not match `image/*`, `CompressError::EmptyInput` for a zero-byte
    /// file, and propagates codec failures for undecodable content.
    pub fn load<C: Codec>(
        codec: &C,
        bytes: Vec<u8>,
        mime_type: &str,
        file_name: &str,
    ) -> Result<Self, CompressError> {
        if bytes.is_empty() {
            return Err(CompressError::EmptyInput);
        }

        let format = ImageFormat::from_mime(mime_type).ok_or_else(|| {
            CompressError::NotAnImage {
                mime_type: mime_type.to_string(),
            }
        })?;

        let bitmap = codec.decode(&bytes)?;

        Ok(Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            format,
            bytes,
            bitmap,
            last_ticket: 0,
        })
    }

    /// The uploaded file's name, used for download naming.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The declared MIME type of the uploaded file.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Format parsed from the declared MIME type.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// The original file bytes, unmodified.
    pub fn original_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte length of the original file.
    pub fn original_byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// The decoded bitmap recompression starts from.
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Decoded width in pixels.
    pub fn width(&self) -> u32 {
        self.bitmap.width
    }

    /// Decoded height in pixels.
    pub fn height(&self) -> u32 {
        self.bitmap.height
    }

    /// Issue a ticket for a new recompression, superseding all earlier
    /// tickets.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.last_ticket += 1;
        RequestTicket(self.last_ticket)
    }

    /// Whether the ticket still identifies the latest request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.last_ticket
    }
}

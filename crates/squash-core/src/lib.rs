//! Squash Core - Image compression library
//!
//! This crate provides the core compression functionality for Squash:
//! decoding an uploaded image, deriving target dimensions from a single
//! quality value, re-encoding, and selecting whichever of the original
//! and the re-encoded bytes is smaller.

pub mod bytesize;
pub mod codec;
pub mod format;
pub mod output;
pub mod pipeline;
pub mod session;

pub use bytesize::format_file_size;
pub use codec::{Bitmap, Codec, CodecError, DefaultCodec, FilterType};
pub use format::{is_image_mime, EncodeTarget, ImageFormat};
pub use output::{select_output, EncodedResult, Output};
pub use pipeline::{target_dimensions, CompressError, Compressor};
pub use session::{RequestTicket, Session};

/// Compression quality, clamped to `0.0..=1.0`.
///
/// For lossy targets the value maps onto the encoder's quality scale. PNG
/// has no lossy quality control, so the value drives a downscale factor
/// instead (see [`pipeline::target_dimensions`]).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quality(f32);

impl Quality {
    /// Create a quality value, clamping into `0.0..=1.0`.
    ///
    /// Non-finite input falls back to 1.0 (leave the image untouched).
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(1.0)
        }
    }

    /// Create from the 0-100 range exposed by a quality slider.
    pub fn from_percent(percent: f32) -> Self {
        Self::new(percent / 100.0)
    }

    /// The raw value in `0.0..=1.0`.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Map onto the JPEG encoder's 1-100 scale.
    ///
    /// Quality 0 still encodes (at the encoder's minimum) rather than
    /// producing an invalid setting.
    pub fn jpeg_quality(self) -> u8 {
        ((self.0 * 100.0).round() as u8).clamp(1, 100)
    }

    /// Linear downscale factor applied to PNG dimensions: 0.5 at quality
    /// 0, 1.0 at quality 1.
    pub fn png_scale(self) -> f64 {
        0.5 + f64::from(self.0) * 0.5
    }
}

//! The platform codec: decode, resample, and re-encode primitives.
//!
//! This module provides functionality for:
//! - Decoding uploaded image bytes (format guessed from content)
//! - Resampling to target dimensions
//! - Re-encoding as PNG (lossless) or JPEG (quality 1-100)
//!
//! # Architecture
//!
//! The compression pipeline treats the codec as an injected capability
//! ([`Codec`]) so tests can substitute a scripted implementation.
//! [`DefaultCodec`] is the production implementation backed by the
//! `image` crate. All operations are synchronous and single-threaded
//! within WASM.

mod decode;
mod encode;
mod resize;
mod types;

pub use decode::decode_image;
pub use encode::{encode_jpeg, encode_png};
pub use resize::resize;
pub use types::{Bitmap, CodecError, FilterType, Orientation};

use crate::format::EncodeTarget;
use crate::Quality;

/// Decode/encode capability used by the compression pipeline.
pub trait Codec {
    /// Decode raw file bytes into an RGBA bitmap.
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap, CodecError>;

    /// Encode a bitmap in the given target format.
    ///
    /// PNG is lossless and ignores `quality`; JPEG maps it onto the
    /// encoder's 1-100 scale.
    fn encode(
        &self,
        bitmap: &Bitmap,
        target: EncodeTarget,
        quality: Quality,
    ) -> Result<Vec<u8>, CodecError>;
}

/// Codec backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodec;

impl Codec for DefaultCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap, CodecError> {
        decode_image(bytes)
    }

    fn encode(
        &self,
        bitmap: &Bitmap,
        target: EncodeTarget,
        quality: Quality,
    ) -> Result<Vec<u8>, CodecError> {
        match target {
            EncodeTarget::Png => encode_png(bitmap),
            EncodeTarget::Jpeg => encode_jpeg(bitmap, quality.jpeg_quality()),
        }
    }
}

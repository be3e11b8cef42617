//! The compression pipeline: dimension decision, re-encode, output
//! selection.
//!
//! Data flow: file -> decode -> dimension decision -> re-encode -> size
//! comparison -> output selection. Each recompression is an independent,
//! idempotent recomputation from the session's stored bitmap.

use thiserror::Error;

use crate::codec::{resize, Codec, CodecError, FilterType};
use crate::format::ImageFormat;
use crate::output::{select_output, EncodedResult, Output};
use crate::session::Session;
use crate::Quality;

/// Errors surfaced by session loading and recompression.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The declared MIME type is not an image type.
    #[error("Not an image file: {mime_type}")]
    NotAnImage { mime_type: String },

    /// The uploaded file contained no bytes.
    #[error("Empty input file")]
    EmptyInput,

    /// Decode, resample, or encode failure from the codec.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Compute the dimensions the source is resampled to before re-encoding.
///
/// Non-PNG formats keep their original dimensions; only the encoder's
/// quality setting varies. PNG has no lossy quality knob, so size
/// reduction is faked by downscaling: quality 0 maps to half size,
/// quality 1 to the original size, linearly in between. Scaled dimensions
/// are floored and never drop below one pixel.
pub fn target_dimensions(
    width: u32,
    height: u32,
    format: ImageFormat,
    quality: Quality,
) -> (u32, u32) {
    if format != ImageFormat::Png {
        return (width, height);
    }

    let scale = quality.png_scale();
    let scaled_width = ((f64::from(width) * scale).floor() as u32).max(1);
    let scaled_height = ((f64::from(height) * scale).floor() as u32).max(1);
    (scaled_width, scaled_height)
}

/// The compression orchestrator.
///
/// Stateless apart from the injected codec and filter choice; every call
/// recomputes from the session's stored bitmap.
#[derive(Debug, Clone)]
pub struct Compressor<C: Codec> {
    codec: C,
    filter: FilterType,
}

impl<C: Codec> Compressor<C> {
    /// Create a compressor around a codec.
    ///
    /// Resampling defaults to Lanczos3, the high-quality filter.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            filter: FilterType::Lanczos3,
        }
    }

    /// Override the resampling filter.
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// The injected codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Load an uploaded file into a session (decode and measure).
    pub fn load(
        &self,
        bytes: Vec<u8>,
        mime_type: &str,
        file_name: &str,
    ) -> Result<Session, CompressError> {
        Session::load(&self.codec, bytes, mime_type, file_name)
    }

    /// Recompress the session's source at the given quality.
    ///
    /// PNG inputs stay PNG and shrink by downscaling; every other format
    /// is re-encoded as JPEG at the given quality. If the re-encoded bytes
    /// are not smaller than the original file, the original is selected
    /// instead.
    pub fn compress(&self, session: &Session, quality: Quality) -> Result<Output, CompressError> {
        let (width, height) =
            target_dimensions(session.width(), session.height(), session.format(), quality);

        let resampled = resize(session.bitmap(), width, height, self.filter)?;

        let target = session.format().encode_target();
        let bytes = self.codec.encode(&resampled, target, quality)?;
        let encoded = EncodedResult::new(bytes, target.mime_type());

        Ok(select_output(encoded, session))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

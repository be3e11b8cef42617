//! PNG and JPEG encoders for the re-encode step.
//!
//! JPEG takes a 1-100 quality setting; PNG is lossless and has no quality
//! knob (size reduction for PNG happens upstream, by downscaling).

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{Bitmap, CodecError};

/// Encode a bitmap to JPEG bytes.
///
/// # Arguments
///
/// * `bitmap` - RGBA source bitmap; the alpha channel is dropped (JPEG has
///   no alpha)
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Errors
///
/// Returns `CodecError::InvalidDimensions` for zero width/height,
/// `CodecError::InvalidPixelData` if the pixel buffer doesn't match the
/// dimensions, and `CodecError::EncodingFailed` if the encoder fails.
pub fn encode_jpeg(bitmap: &Bitmap, quality: u8) -> Result<Vec<u8>, CodecError> {
    validate(bitmap)?;

    // Clamp quality to the encoder's valid range (1-100)
    let quality = quality.clamp(1, 100);

    // JPEG carries no alpha; take the RGB bytes of each pixel
    let rgb: Vec<u8> = bitmap
        .pixels
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&rgb, bitmap.width, bitmap.height, ExtendedColorType::Rgb8)
        .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a bitmap to PNG bytes. Lossless; alpha is preserved.
///
/// # Errors
///
/// Same validation errors as [`encode_jpeg`].
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, CodecError> {
    validate(bitmap)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| CodecError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn validate(bitmap: &Bitmap) -> Result<(), CodecError> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(CodecError::InvalidDimensions {
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    let expected = (bitmap.width as usize) * (bitmap.height as usize) * 4;
    if bitmap.pixels.len() != expected {
        return Err(CodecError::InvalidPixelData {
            expected,
            actual: bitmap.pixels.len(),
        });
    }

    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

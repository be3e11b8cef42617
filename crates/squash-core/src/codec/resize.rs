//! Resampling to the target dimensions.
//!
//! This is the "draw onto a canvas of the new size" step: the decoded
//! bitmap is resampled into a buffer of exactly the requested dimensions.

use super::{Bitmap, CodecError, FilterType};

/// Resample a bitmap to exact dimensions.
///
/// # Errors
///
/// Returns `CodecError::InvalidDimensions` if either target dimension is
/// zero and `CodecError::CorruptedFile` if the source pixel buffer does
/// not match its dimensions.
pub fn resize(
    bitmap: &Bitmap,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Bitmap, CodecError> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if bitmap.width == width && bitmap.height == height {
        return Ok(bitmap.clone());
    }

    let rgba = bitmap
        .to_rgba_image()
        .ok_or_else(|| CodecError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba, width, height, filter.to_image_filter());

    Ok(Bitmap::from_rgba_image(resized))
}

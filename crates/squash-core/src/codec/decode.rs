//! Image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{Bitmap, CodecError, Orientation};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The format is guessed from the content rather than from the declared
/// MIME type, which matches what a browser does with a dropped file.
/// Orientation correction keeps re-encoded output upright, the way a
/// canvas draw would.
///
/// # Errors
///
/// Returns `CodecError::InvalidFormat` if the content is not a recognized
/// image format and `CodecError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, CodecError> {
    // Extract EXIF orientation before decoding
    let orientation = extract_orientation(bytes);

    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(CodecError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| CodecError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);

    Ok(Bitmap::from_rgba_image(oriented.into_rgba8()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

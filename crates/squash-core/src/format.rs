//! Image format identification from declared MIME types.
//!
//! The uploading page hands us a file's declared MIME type. Only the PNG /
//! not-PNG distinction changes pipeline behavior, but the full format is
//! kept for diagnostics and the re-encode target mapping.

use serde::{Deserialize, Serialize};

/// Returns true if the declared MIME type is an image type (`image/*`).
///
/// This is the same filter the upload surface applies before accepting a
/// dropped or picked file.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .get(.."image/".len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Image format as declared by the uploaded file's MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    /// Any other `image/*` type.
    Other,
}

impl ImageFormat {
    /// Parse a declared MIME type. Returns `None` for non-image types.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        if !is_image_mime(mime_type) {
            return None;
        }
        let subtype = mime_type["image/".len()..].to_ascii_lowercase();
        Some(match subtype.as_str() {
            "png" => Self::Png,
            "jpeg" | "jpg" | "pjpeg" => Self::Jpeg,
            "gif" => Self::Gif,
            "webp" => Self::WebP,
            _ => Self::Other,
        })
    }

    /// The format this image is re-encoded to.
    ///
    /// PNG stays PNG (lossless, reduced by downscaling instead); every
    /// other format goes through the lossy JPEG path.
    pub fn encode_target(self) -> EncodeTarget {
        match self {
            Self::Png => EncodeTarget::Png,
            _ => EncodeTarget::Jpeg,
        }
    }
}

/// Re-encode target supported by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodeTarget {
    Jpeg,
    Png,
}

impl EncodeTarget {
    /// MIME type of the encoded output.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// PNG encoding is lossless; the quality value only affects JPEG.
    pub fn is_lossy(self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

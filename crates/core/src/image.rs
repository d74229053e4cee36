//! Photo upload processing pipeline.
//!
//! Decodes an uploaded image, flattens it to plain 8-bit RGB, shrinks it to
//! fit the display bounding box (never enlarging), and re-encodes it as
//! JPEG at a fixed quality. The caller stores the original bytes verbatim
//! when processing fails; an upload must never hard-fail because of a bad
//! image file.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Maximum stored width in pixels.
pub const MAX_WIDTH: u32 = 1200;

/// Maximum stored height in pixels.
pub const MAX_HEIGHT: u32 = 800;

/// JPEG re-encode quality (0-100).
pub const JPEG_QUALITY: u8 = 85;

/// Error type for image processing failures.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The uploaded bytes could not be decoded as a supported image format.
    #[error("Image decode error: {0}")]
    Decode(#[source] image::ImageError),

    /// The resized image could not be re-encoded as JPEG.
    #[error("Image encode error: {0}")]
    Encode(#[source] image::ImageError),
}

/// A processed upload ready to be written to the media store.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Media-relative destination path, e.g. `hogar/cocina-moderna.jpg`.
    pub relative_path: String,
    /// Re-encoded JPEG bytes.
    pub bytes: Vec<u8>,
}

/// Process an uploaded image file for storage.
///
/// - Decodes `data` (png, jpeg, or webp).
/// - Converts palette/alpha/other color modes to plain RGB.
/// - Shrinks to fit within [`MAX_WIDTH`]x[`MAX_HEIGHT`] preserving aspect
///   ratio. Images already inside the box are left at their original size.
/// - Re-encodes as JPEG at [`JPEG_QUALITY`].
///
/// The destination path is deterministic: the category name lowercased,
/// then the original file stem with a `.jpg` extension (see
/// [`processed_path`]).
pub fn process_upload(
    data: &[u8],
    original_filename: &str,
    category_name: &str,
) -> Result<ProcessedImage, ImageError> {
    let decoded = image::load_from_memory(data).map_err(ImageError::Decode)?;

    // Flatten to plain RGB. Drops alpha and expands palette images.
    let mut img = DynamicImage::ImageRgb8(decoded.to_rgb8());

    let (width, height) = img.dimensions();
    if width > MAX_WIDTH || height > MAX_HEIGHT {
        // `resize` preserves aspect ratio within the bounding box; the
        // surrounding check keeps small images from being enlarged.
        img = img.resize(MAX_WIDTH, MAX_HEIGHT, FilterType::Lanczos3);
    }

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    img.write_with_encoder(encoder).map_err(ImageError::Encode)?;

    Ok(ProcessedImage {
        relative_path: processed_path(original_filename, category_name),
        bytes,
    })
}

/// Destination path for a successfully processed upload:
/// `<category-lowercased>/<original-stem>.jpg`.
pub fn processed_path(original_filename: &str, category_name: &str) -> String {
    format!(
        "{}/{}.jpg",
        category_name.to_lowercase(),
        file_stem(original_filename)
    )
}

/// Destination path when processing failed and the original bytes are
/// stored unmodified: `<category-lowercased>/<original-basename>`.
pub fn fallback_path(original_filename: &str, category_name: &str) -> String {
    format!(
        "{}/{}",
        category_name.to_lowercase(),
        base_name(original_filename)
    )
}

/// Final path segment of a client-supplied filename. Strips any directory
/// components, whichever separator the client's OS used.
fn base_name(filename: &str) -> &str {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
}

/// Base name without its extension. A name with no dot (or only a leading
/// dot) is returned whole.
fn file_stem(filename: &str) -> &str {
    let base = base_name(filename);
    match base.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => base,
    }
}

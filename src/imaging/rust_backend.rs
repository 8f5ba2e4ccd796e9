//! Pure Rust image processing backend — zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header-only read) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode | `image::DynamicImage::save` (format from extension, encoder defaults) |

use super::backend::{Dimensions, ImageBackend, ImagingError, ResizeParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
#[derive(Default)]
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

/// Load and decode an image from disk.
///
/// Open and decode failures both surface as [`ImagingError::Decode`] — from
/// the caller's perspective a missing file and a corrupt one are the same
/// failure: the source could not be turned into pixels.
fn load_image(path: &Path) -> Result<DynamicImage, ImagingError> {
    ImageReader::open(path)
        .map_err(|e| ImagingError::decode(path, e))?
        .decode()
        .map_err(|e| ImagingError::decode(path, e))
}

/// Save an image to the given path, inferring format from the extension and
/// using the encoder's default settings.
fn save_image(img: &DynamicImage, path: &Path) -> Result<(), ImagingError> {
    img.save(path).map_err(|e| ImagingError::encode(path, e))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, ImagingError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| ImagingError::decode(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), ImagingError> {
        let img = load_image(&params.source)?;
        // resize_exact, not resize: the target is a fixed frame and the
        // aspect ratio is deliberately not preserved.
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_image(&resized, &params.output)
        // `img` and `resized` drop here on success and on encode failure
        // alike; no buffer outlives the call.
    }
}

//! High-level image operations.
//!
//! [`resize_and_save`] is the whole pipeline: identify the source, compute
//! the centered crop window, resize into the fixed frame, write the result.
//! One linear sequence, no retries, no partial-completion states.

use super::backend::{Dimensions, ImageBackend, ImagingError, ResizeParams};
use super::calculations::{CropWindow, centered_crop_window};
use crate::config::JobConfig;
use std::path::PathBuf;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ImagingError>;

/// Edge length of the fixed output frame, in pixels.
pub const TARGET_EDGE: u32 = 1024;

/// What a completed resize produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOutcome {
    /// Dimensions of the source as decoded.
    pub source_dims: Dimensions,
    /// The centered 1024×1024 window within the source. Reported for
    /// diagnostics only — the output is a full-frame resize, so these
    /// offsets never touch the pixels and go negative for small sources.
    pub crop_window: CropWindow,
    /// Where the result was written.
    pub output_path: PathBuf,
}

/// Resize the configured input into a 1024×1024 frame and write it out.
///
/// The source's aspect ratio is not preserved: a 2000×1500 input and a
/// 500×500 input both come out exactly 1024×1024. An existing file at the
/// output path is overwritten silently. Errors ([`ImagingError::Decode`] /
/// [`ImagingError::Encode`]) propagate to the caller unmodified, and a
/// decode failure produces no output file at all.
pub fn resize_and_save(backend: &impl ImageBackend, config: &JobConfig) -> Result<ResizeOutcome> {
    let source_dims = backend.identify(&config.input_path)?;
    let crop_window = centered_crop_window(source_dims, TARGET_EDGE);

    backend.resize(&ResizeParams {
        source: config.input_path.clone(),
        output: config.output_path.clone(),
        width: TARGET_EDGE,
        height: TARGET_EDGE,
    })?;

    Ok(ResizeOutcome {
        source_dims,
        crop_window,
        output_path: config.output_path.clone(),
    })
}

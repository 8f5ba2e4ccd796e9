//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the pipeline needs:
//! identify and resize. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, statically
//! linked, no system dependencies.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors an image backend can produce.
///
/// Two kinds, matching the two fallible stages: the source cannot be read or
/// decoded, or the result cannot be encoded or written. Neither is caught or
/// translated anywhere in the crate — both propagate to `main` unmodified.
#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

impl ImagingError {
    pub(crate) fn decode(path: &Path, message: impl std::fmt::Display) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub(crate) fn encode(path: &Path, message: impl std::fmt::Display) -> Self {
        Self::Encode {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Full specification for a resize: source, destination, exact target
/// dimensions. The aspect ratio is *not* preserved — the source is stretched
/// or squashed to fit. Encoding settings are whatever the destination
/// format's encoder defaults to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Kept as a seam so operation-level logic can be tested against a recording
/// mock without decoding or encoding any pixels.
pub trait ImageBackend {
    /// Get image dimensions without a full decode where the format allows it.
    fn identify(&self, path: &Path) -> Result<Dimensions, ImagingError>;

    /// Decode the source, resize to exactly the requested dimensions, and
    /// write the result. The decoded buffer is scoped to this call and
    /// released on every exit path, including encode failure.
    fn resize(&self, params: &ResizeParams) -> Result<(), ImagingError>;
}

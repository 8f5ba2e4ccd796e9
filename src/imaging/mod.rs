//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | `resize_exact` + Lanczos3 |
//! | **Encode** | `DynamicImage::save` (format from extension) |
//!
//! The module is split into:
//! - **Calculations**: pure geometry (the crop window math, unit testable)
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: the [`resize_and_save`] pipeline on top of both

pub mod backend;
mod calculations;
pub mod operations;
pub mod rust_backend;

pub use backend::{Dimensions, ImageBackend, ImagingError, ResizeParams};
pub use calculations::{CropWindow, centered_crop_window};
pub use operations::{ResizeOutcome, TARGET_EDGE, resize_and_save};
pub use rust_backend::RustBackend;

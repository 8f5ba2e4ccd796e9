//! Pure calculation functions for image geometry.
//!
//! Everything here is testable without any I/O or pixel data.

use super::backend::Dimensions;

/// A centered crop window within a source image.
///
/// Offsets are floats: for odd-sized sources the window edges land on half
/// pixels, and for sources smaller than the window `left`/`top` go negative.
/// The window is reported alongside the resize outcome but is never applied
/// to the pixels — the resize stretches the full frame instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropWindow {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CropWindow {
    /// Window width (always the target edge).
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Window height (always the target edge).
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Compute the centered square window of size `edge` within `source`.
///
/// ```
/// # use squarefit::imaging::{centered_crop_window, Dimensions};
/// let window = centered_crop_window(
///     Dimensions { width: 2048, height: 1536 },
///     1024,
/// );
/// assert_eq!(window.left, 512.0);
/// assert_eq!(window.top, 256.0);
/// ```
pub fn centered_crop_window(source: Dimensions, edge: u32) -> CropWindow {
    let width = source.width as f64;
    let height = source.height as f64;
    let edge = edge as f64;

    CropWindow {
        left: (width - edge) / 2.0,
        top: (height - edge) / 2.0,
        right: (width + edge) / 2.0,
        bottom: (height + edge) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn window_is_centered_in_larger_source() {
        // 2000x1500 → 1024 window: 488 margin on each side horizontally,
        // 238 vertically
        let window = centered_crop_window(dims(2000, 1500), 1024);
        assert_eq!(window.left, 488.0);
        assert_eq!(window.top, 238.0);
        assert_eq!(window.right, 1512.0);
        assert_eq!(window.bottom, 1262.0);
    }

    #[test]
    fn window_spans_exactly_the_target_edge() {
        let window = centered_crop_window(dims(3000, 2000), 1024);
        assert_eq!(window.width(), 1024.0);
        assert_eq!(window.height(), 1024.0);
    }

    #[test]
    fn odd_source_yields_half_pixel_offsets() {
        let window = centered_crop_window(dims(2001, 1501), 1024);
        assert_eq!(window.left, 488.5);
        assert_eq!(window.top, 238.5);
    }

    #[test]
    fn small_source_yields_negative_offsets() {
        // 500x500 source: the window overhangs the image on all sides
        let window = centered_crop_window(dims(500, 500), 1024);
        assert_eq!(window.left, -262.0);
        assert_eq!(window.top, -262.0);
        assert_eq!(window.right, 762.0);
        assert_eq!(window.bottom, 762.0);
        assert_eq!(window.width(), 1024.0);
    }

    #[test]
    fn exact_fit_source_has_zero_offsets() {
        let window = centered_crop_window(dims(1024, 1024), 1024);
        assert_eq!(window.left, 0.0);
        assert_eq!(window.top, 0.0);
        assert_eq!(window.right, 1024.0);
        assert_eq!(window.bottom, 1024.0);
    }
}

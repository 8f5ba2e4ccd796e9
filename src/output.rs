//! CLI output formatting.
//!
//! One `format_*` function per message (pure, returns a `String`, testable)
//! and a `print_*` wrapper that writes to stdout.

use crate::imaging::ResizeOutcome;

/// Format the success line.
///
/// The wording says "cropped" while the operation is a full-frame resize.
/// That mismatch is long-standing and downstream scripts match on the exact
/// line, so it is kept verbatim.
pub fn format_success(outcome: &ResizeOutcome) -> String {
    format!(
        "Image cropped and saved to {}",
        outcome.output_path.display()
    )
}

/// Print the success line to stdout.
pub fn print_success(outcome: &ResizeOutcome) {
    println!("{}", format_success(outcome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{Dimensions, TARGET_EDGE, centered_crop_window};

    #[test]
    fn success_line_is_verbatim() {
        let dims = Dimensions {
            width: 2000,
            height: 1500,
        };
        let outcome = ResizeOutcome {
            source_dims: dims,
            crop_window: centered_crop_window(dims, TARGET_EDGE),
            output_path: "output.jpg".into(),
        };

        assert_eq!(
            format_success(&outcome),
            "Image cropped and saved to output.jpg"
        );
    }
}

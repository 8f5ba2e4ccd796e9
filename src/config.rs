//! Job configuration.
//!
//! Historically the input and output paths were literals baked into the
//! program. They now travel in a [`JobConfig`], with `Default` preserving
//! those exact literals so a bare `squarefit` invocation behaves identically.

use std::path::PathBuf;

/// Default input path when no `--input` flag is given.
pub const DEFAULT_INPUT: &str = "abstract-black-futuristic-background.jpg";

/// Default output path when no `--output` flag is given.
pub const DEFAULT_OUTPUT: &str = "output.jpg";

/// A single resize job: where to read from, where to write to.
///
/// The target dimensions are not configurable — the frame is fixed at
/// 1024×1024 (see [`crate::imaging::TARGET_EDGE`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    /// Source image file. Any format the backend can decode.
    pub input_path: PathBuf,
    /// Destination file. Format is inferred from the extension; an existing
    /// file is overwritten without confirmation.
    pub output_path: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preserves_historical_paths() {
        let config = JobConfig::default();
        assert_eq!(
            config.input_path,
            PathBuf::from("abstract-black-futuristic-background.jpg")
        );
        assert_eq!(config.output_path, PathBuf::from("output.jpg"));
    }
}

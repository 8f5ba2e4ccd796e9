//! # squarefit
//!
//! Resize an image into a fixed 1024×1024 frame and write it back out.
//! One linear operation: decode → (compute the centered crop window) →
//! resize → encode. The crop window is computed and reported but never
//! applied — the output is a full-frame stretch/squash resize, so a source
//! of any size and aspect ratio comes out exactly 1024×1024.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `JobConfig` — input/output paths, defaults matching the historical literals |
//! | [`imaging`] | backend trait, crop-window math, pure-Rust backend, the `resize_and_save` pipeline |
//! | [`output`] | CLI success-line formatting |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate — pure Rust decoders and
//! encoders, statically linked. No ImageMagick, no system libraries: the
//! binary is self-contained and works anywhere it runs.
//!
//! ## Backend Trait
//!
//! Pixel work sits behind [`imaging::ImageBackend`] so the pipeline logic
//! can be exercised against a recording mock without encoding a single
//! image. The production backend is [`imaging::RustBackend`].
//!
//! ## The Unapplied Crop Window
//!
//! The tool computes where a centered 1024×1024 crop *would* land in the
//! source (offsets go negative when the source is smaller than the frame)
//! and carries it in the [`imaging::ResizeOutcome`] for diagnostics. The
//! pixels themselves are resized, not cropped; the success message's
//! "cropped" wording is historical and kept verbatim.

pub mod config;
pub mod imaging;
pub mod output;

//! Loading and validating scanned images
//!
//! The loader gates unsupported encodings before any expensive work and
//! hands the rest of the pipeline a decoded, immutable source image.

mod format;
mod source;

pub use format::ImageFormat;
pub use source::{ImageLoader, SourceImage};

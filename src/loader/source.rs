//! Decoding a scan into memory

use std::path::{Path, PathBuf};
use image::{DynamicImage, GenericImageView, ImageError};
use log::{error, info};

use crate::errors::{ScanError, ScanResult};
use super::format::ImageFormat;

/// A decoded scan
///
/// The pixel buffer is never mutated after loading; every later stage
/// works on its own derived buffer and crops are taken from this one.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
    format: ImageFormat,
    path: PathBuf,
}

impl SourceImage {
    /// Wrap an already decoded image
    ///
    /// # Returns
    /// The source image, or `InvalidImage` when either dimension is zero
    pub fn new(image: DynamicImage, format: ImageFormat, path: PathBuf) -> ScanResult<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            error!("Image {} has degenerate dimensions {}x{}", path.display(), width, height);
            return Err(ScanError::InvalidImage(format!(
                "{} has degenerate dimensions {}x{}", path.display(), width, height)));
        }
        Ok(SourceImage { image, format, path })
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Loads scans from disk
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageLoader;

impl ImageLoader {
    pub fn new() -> Self {
        ImageLoader
    }

    /// Load and decode a scan
    ///
    /// The extension is checked before the file is touched, so an
    /// unsupported input never costs a read.
    ///
    /// # Arguments
    /// * `path` - Path to a JPEG or PNG file
    ///
    /// # Returns
    /// The decoded image, or `UnsupportedFormat`, `IoError` or `InvalidImage`
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ScanResult<SourceImage> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        info!("Loading {:?} scan from {}", format, path.display());

        let image = image::open(path).map_err(|e| match e {
            ImageError::IoError(io_err) => {
                error!("Cannot read {}: {}", path.display(), io_err);
                ScanError::IoError(io_err)
            }
            other => {
                error!("Cannot decode {}: {}", path.display(), other);
                ScanError::InvalidImage(format!("failed to decode {}: {}", path.display(), other))
            }
        })?;

        let source = SourceImage::new(image, format, path.to_path_buf())?;
        info!("Loaded scan: {}x{}", source.width(), source.height());
        Ok(source)
    }
}

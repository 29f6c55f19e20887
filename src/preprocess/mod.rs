//! Turning a scan into a binary edge map
//!
//! Stages run in a fixed order: grayscale, Gaussian blur, adaptive mean
//! threshold, Canny edges and an optional gap-closing dilation. Each stage
//! returns a new buffer; the source image is never touched.

pub mod blur;
pub mod threshold;
pub mod edges;

use image::{DynamicImage, GenericImageView, GrayImage};
use log::{debug, info};

use crate::config::PreprocessConfig;
use crate::errors::{ScanError, ScanResult};

/// Runs the preprocessing stages with one configuration
pub struct Preprocessor<'a> {
    config: &'a PreprocessConfig,
}

impl<'a> Preprocessor<'a> {
    pub fn new(config: &'a PreprocessConfig) -> Self {
        Preprocessor { config }
    }

    /// Produce the edge map for a scan
    ///
    /// # Returns
    /// A single-channel image of the same size where edge pixels are 255,
    /// or `InvalidImage` for a zero-dimension input
    pub fn edge_map(&self, image: &DynamicImage) -> ScanResult<GrayImage> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ScanError::InvalidImage(format!(
                "cannot preprocess a {}x{} image", width, height)));
        }

        info!("Converting image to grayscale");
        let gray = to_intensity(image);

        info!("Blurring image ({}x{} kernel, sigma {})",
              self.config.blur_kernel_size, self.config.blur_kernel_size, self.config.blur_sigma);
        let blurred = blur::gaussian(&gray, self.config.blur_kernel_size, self.config.blur_sigma);

        info!("Applying adaptive threshold (block {}, offset {})",
              self.config.threshold_block_size, self.config.threshold_offset);
        let binary = threshold::adaptive_mean(
            &blurred, self.config.threshold_block_size, self.config.threshold_offset);

        info!("Applying Canny edge detection (low {}, high {})",
              self.config.canny_low, self.config.canny_high);
        let edges = edges::detect(&binary, self.config.canny_low, self.config.canny_high);

        let closed = edges::close_gaps(&edges, self.config.edge_closing_radius);
        debug!("Edge map has {} edge pixels",
               closed.pixels().filter(|p| p[0] > 0).count());

        Ok(closed)
    }
}

/// Single-channel intensity using standard luma weights
pub fn to_intensity(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

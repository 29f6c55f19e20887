//! Supported input encodings

use std::path::Path;
use log::{debug, error};
use crate::errors::{ScanError, ScanResult};

/// Encodings a scan may be provided in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Determine the format from a file extension (case-insensitive)
    ///
    /// # Returns
    /// The detected format, or `UnsupportedFormat` carrying the extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ScanResult<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or("")
            .to_lowercase();

        debug!("Determining format for file extension: {}", extension);

        match extension.as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            // Add more formats here as needed
            _ => {
                error!("Unsupported file format: {}", extension);
                Err(ScanError::UnsupportedFormat(extension))
            }
        }
    }

    /// Extension used for every file written from a scan of this format
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }

    /// Matching encoder in the `image` crate
    pub fn encoder_format(&self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert_eq!(ImageFormat::from_path("scan.jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("scan.JPEG").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("/tmp/a/scan.Png").unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_unsupported_extensions() {
        match ImageFormat::from_path("scan.tiff") {
            Err(ScanError::UnsupportedFormat(ext)) => assert_eq!(ext, "tiff"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
        assert!(matches!(ImageFormat::from_path("scan"), Err(ScanError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_canonical_extension() {
        assert_eq!(ImageFormat::from_path("a.jpeg").unwrap().extension(), "jpg");
        assert_eq!(ImageFormat::Png.extension(), "png");
    }
}

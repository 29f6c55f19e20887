//! Custom error types for scan splitting

use std::fmt;
use std::io;

/// Errors raised while loading, analysing or splitting a scan
#[derive(Debug)]
pub enum ScanError {
    /// I/O error
    IoError(io::Error),
    /// Input file extension is not a supported encoding
    UnsupportedFormat(String),
    /// Image could not be decoded or has degenerate dimensions
    InvalidImage(String),
    /// Writing one cropped photo failed
    RegionWrite {
        rank: usize,
        path: String,
        reason: String,
    },
    /// Every attempted photo write failed
    AllWritesFailed(usize),
    /// Invalid tuning values, config file or batch identifier
    Config(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::IoError(e) => write!(f, "I/O error: {}", e),
            ScanError::UnsupportedFormat(ext) => write!(f, "Unsupported file format: '{}'", ext),
            ScanError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            ScanError::RegionWrite { rank, path, reason } => {
                write!(f, "Failed to write photo {} to {}: {}", rank, path, reason)
            }
            ScanError::AllWritesFailed(count) => {
                write!(f, "All {} photo writes failed", count)
            }
            ScanError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ScanError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ScanError {
    fn from(error: io::Error) -> Self {
        ScanError::IoError(error)
    }
}

impl From<String> for ScanError {
    fn from(msg: String) -> Self {
        ScanError::GenericError(msg)
    }
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

pub mod errors;
pub mod config;
pub mod loader;
pub mod preprocess;
pub mod region;
pub mod output;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{ScanSplitter, SplitReport, SplitRequest};

pub use config::ScanConfig;
pub use errors::{ScanError, ScanResult};
pub use loader::{ImageFormat, ImageLoader, SourceImage};
pub use region::{Extraction, Region, RegionCandidate, RegionExtractor};
pub use output::{list_photos, parse_photo_name};

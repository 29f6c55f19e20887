//! Writing cropped photos and the archival scan copy
//!
//! File names are the only contract with downstream tools, so naming is
//! kept separate from the writer.

pub mod naming;
mod writer;

pub use naming::{list_photos, parse_photo_name, run_timestamp, validate_path_component, OutputNaming, PhotoName};
pub use writer::{crop_region, CropWriter, WriteReport, WrittenPhoto};

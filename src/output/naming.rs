//! Output directory and file naming
//!
//! A run writes into `<root>/<namespace>/<batch_id>/<timestamp>/`:
//! `batch<batch_id>_base.<ext>` is the untouched scan and
//! `batch<batch_id>_photo<rank>.<ext>` is the photo at `rank`.

use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{ScanError, ScanResult};
use crate::loader::ImageFormat;

/// Timestamp format of run directories (UTC)
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

lazy_static! {
    static ref PHOTO_NAME: Regex =
        Regex::new(r"^batch(?P<batch>[A-Za-z0-9_-]+)_photo(?P<rank>[0-9]+)\.(?i:jpe?g|png)$")
            .expect("photo name pattern is valid");
}

/// Run directory timestamp for a given instant
pub fn run_timestamp(now: DateTime<Utc>) -> String {
    now.format(RUN_TIMESTAMP_FORMAT).to_string()
}

/// Check that a batch id can be used as a path component and in file names
pub fn validate_batch_id(batch_id: &str) -> ScanResult<()> {
    validate_path_component("batch id", batch_id)
}

/// Reject names that are empty or could leave their parent directory
pub fn validate_path_component(kind: &str, value: &str) -> ScanResult<()> {
    if value.is_empty() {
        return Err(ScanError::Config(format!("{} must not be empty", kind)));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ScanError::Config(format!(
            "{} '{}' may only contain ASCII letters, digits, '-' and '_'", kind, value)));
    }
    Ok(())
}

/// Names of everything written for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNaming {
    batch_id: String,
    extension: &'static str,
}

impl OutputNaming {
    pub fn new(batch_id: &str, format: ImageFormat) -> ScanResult<Self> {
        validate_batch_id(batch_id)?;
        Ok(OutputNaming {
            batch_id: batch_id.to_string(),
            extension: format.extension(),
        })
    }

    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }

    pub fn base_file_name(&self) -> String {
        format!("batch{}_base.{}", self.batch_id, self.extension)
    }

    pub fn photo_file_name(&self, rank: usize) -> String {
        format!("batch{}_photo{}.{}", self.batch_id, rank, self.extension)
    }

    /// `<root>/<namespace>/<batch_id>/<timestamp>`
    pub fn run_directory(&self, root: &Path, namespace: &str, timestamp: &str) -> PathBuf {
        root.join(namespace).join(&self.batch_id).join(timestamp)
    }
}

/// Batch and rank recovered from a photo file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoName {
    pub batch_id: String,
    pub rank: usize,
}

/// Parse `batch<id>_photo<rank>.<ext>`
pub fn parse_photo_name(file_name: &str) -> Option<PhotoName> {
    let caps = PHOTO_NAME.captures(file_name)?;
    let rank = caps.name("rank")?.as_str().parse::<usize>().ok()?;
    Some(PhotoName {
        batch_id: caps.name("batch")?.as_str().to_string(),
        rank,
    })
}

/// Photo files in a directory, ordered by rank
///
/// Files not matching the photo naming scheme (including the base scan)
/// are skipped. Equal ranks from different batches are ordered by name.
pub fn list_photos<P: AsRef<Path>>(dir: P) -> ScanResult<Vec<PathBuf>> {
    let mut photos: Vec<(usize, String, PathBuf)> = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        match parse_photo_name(&file_name) {
            Some(name) => photos.push((name.rank, file_name, entry.path())),
            None => debug!("Skipping {}: not a photo file", file_name),
        }
    }

    photos.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    Ok(photos.into_iter().map(|(_, _, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_names() {
        let naming = OutputNaming::new("7", ImageFormat::Jpeg).unwrap();
        assert_eq!(naming.base_file_name(), "batch7_base.jpg");
        assert_eq!(naming.photo_file_name(0), "batch7_photo0.jpg");
        assert_eq!(naming.photo_file_name(12), "batch7_photo12.jpg");
    }

    #[test]
    fn test_run_directory_layout() {
        let naming = OutputNaming::new("spring-2024", ImageFormat::Png).unwrap();
        let dir = naming.run_directory(Path::new("/tmp"), "instax_parsing", "2024-05-01T10:00:00");
        assert_eq!(dir, PathBuf::from("/tmp/instax_parsing/spring-2024/2024-05-01T10:00:00"));
    }

    #[test]
    fn test_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(run_timestamp(now), "2024-03-09T07:05:03");
    }

    #[test]
    fn test_batch_id_validation() {
        assert!(validate_batch_id("12").is_ok());
        assert!(validate_batch_id("roll_3-b").is_ok());
        assert!(validate_batch_id("").is_err());
        assert!(validate_batch_id("../etc").is_err());
        assert!(validate_batch_id("a b").is_err());
    }

    #[test]
    fn test_validate_path_component_names_the_field() {
        assert!(validate_path_component("namespace", "instax_parsing").is_ok());
        match validate_path_component("namespace", "a/b") {
            Err(ScanError::Config(msg)) => assert!(msg.starts_with("namespace")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_photo_name() {
        assert_eq!(parse_photo_name("batch1_photo17.jpg"),
                   Some(PhotoName { batch_id: "1".to_string(), rank: 17 }));
        assert_eq!(parse_photo_name("batchroll_2_photo3.PNG"),
                   Some(PhotoName { batch_id: "roll_2".to_string(), rank: 3 }));
        assert_eq!(parse_photo_name("batch1_base.jpg"), None);
        assert_eq!(parse_photo_name("batch1_photo.jpg"), None);
        assert_eq!(parse_photo_name("batch1_photo2.tiff"), None);
    }

    #[test]
    fn test_names_round_trip() {
        let naming = OutputNaming::new("42", ImageFormat::Png).unwrap();
        let parsed = parse_photo_name(&naming.photo_file_name(9)).unwrap();
        assert_eq!(parsed.batch_id, "42");
        assert_eq!(parsed.rank, 9);
    }

    #[test]
    fn test_list_photos_orders_by_rank() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["batch1_photo10.jpg", "batch1_photo2.jpg", "batch1_base.jpg",
                     "notes.txt", "batch1_photo0.jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("batch1_photo1.jpg")).unwrap();

        let photos = list_photos(dir.path()).unwrap();
        let names: Vec<String> = photos
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["batch1_photo0.jpg", "batch1_photo2.jpg", "batch1_photo10.jpg"]);
    }
}

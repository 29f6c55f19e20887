//! Warnings emitted when a scan holds fewer photos than expected
//!
//! Installs its own global logger, so it lives in a separate test binary.

mod common;

use std::sync::Mutex;
use log::{Level, LevelFilter, Log, Metadata, Record};

use common::*;
use scansplit::{ScanConfig, ScanSplitter};

struct WarningCapture {
    warnings: Mutex<Vec<String>>,
}

impl Log for WarningCapture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.warnings.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: WarningCapture = WarningCapture { warnings: Mutex::new(Vec::new()) };

#[test]
fn test_count_shortfall_is_warned_once() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let dir = tempfile::tempdir().unwrap();
    let input = save_scan(dir.path(), "scan.png", &draw_scan(1300, 1100, &three_photos()));
    let logger = record_logger(dir.path());

    let mut config = ScanConfig::default();
    config.regions.expected_count = 5;
    let splitter = ScanSplitter::new(config, &logger).unwrap();
    let report = splitter.split(&request(&input, &dir.path().join("out"), "9", "2024-05-01T10:00:00")).unwrap();
    assert_eq!(report.photos.len(), 3);

    let warnings = CAPTURE.warnings.lock().unwrap();
    let shortfalls: Vec<_> = warnings.iter().filter(|w| w.contains("Expected 5 photos but found 3")).collect();
    assert_eq!(shortfalls.len(), 1, "{:?}", *warnings);
}

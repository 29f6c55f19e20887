use std::fs;
use std::path::PathBuf;
use log::{info, warn};

use crate::config::ScanConfig;
use crate::errors::{ScanError, ScanResult};
use crate::loader::{ImageLoader, SourceImage};
use crate::output::{CropWriter, OutputNaming, WrittenPhoto};
use crate::preprocess::Preprocessor;
use crate::region::{Extraction, RegionExtractor};
use crate::utils::logger::Logger;

/// Inputs of one split run
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Scan to split (JPEG or PNG)
    pub input: PathBuf,
    /// Root under which the run directory is created
    pub output_dir: PathBuf,
    /// Batch identifier used in directory and file names
    pub batch_id: String,
    /// Run directory name, captured once when the invocation starts
    pub run_timestamp: String,
}

/// What a split run produced
#[derive(Debug)]
pub struct SplitReport {
    pub run_dir: PathBuf,
    pub base_file: PathBuf,
    /// Written photos in rank order
    pub photos: Vec<WrittenPhoto>,
    /// Photos that could not be written
    pub failures: Vec<ScanError>,
    pub expected_count: usize,
    /// Regions retained after deduplication and truncation
    pub regions_found: usize,
}

/// Main interface to the scan splitting pipeline
pub struct ScanSplitter<'a> {
    config: ScanConfig,
    logger: &'a Logger,
}

impl<'a> ScanSplitter<'a> {
    /// Create a splitter with a validated configuration
    ///
    /// # Arguments
    /// * `config` - Pipeline tuning
    /// * `logger` - Run record receiving one line per written file
    pub fn new(config: ScanConfig, logger: &'a Logger) -> ScanResult<Self> {
        config.validate()?;
        Ok(ScanSplitter { config, logger })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Locate photo regions in a loaded scan
    ///
    /// Runs preprocessing and region extraction only; nothing is written.
    pub fn detect(&self, source: &SourceImage) -> ScanResult<Extraction> {
        let edges = Preprocessor::new(&self.config.preprocess).edge_map(source.image())?;
        Ok(RegionExtractor::new(&self.config.regions).extract(&edges))
    }

    /// Split a scan into one file per photo
    ///
    /// The input is loaded before anything is created on disk, so an
    /// unsupported or unreadable scan leaves no partial output.
    pub fn split(&self, request: &SplitRequest) -> ScanResult<SplitReport> {
        info!("Splitting {} as batch {}", request.input.display(), request.batch_id);

        let source = ImageLoader::new().load(&request.input)?;
        let naming = OutputNaming::new(&request.batch_id, source.format())?;

        let run_dir = naming.run_directory(
            &request.output_dir, &self.config.output.namespace, &request.run_timestamp);
        fs::create_dir_all(&run_dir)?;
        info!("Writing all files to: {}", run_dir.display());

        let writer = CropWriter::new(&run_dir, &naming, self.logger);
        let base_file = writer.write_base(&source)?;

        let extraction = self.detect(&source)?;
        let expected_count = self.config.regions.expected_count;

        let report = writer.write_photos(&source, &extraction.regions)?;

        info!("Done processing batch {}: {} photos written, {} failed",
              request.batch_id, report.written.len(), report.failures.len());
        if let Err(e) = self.logger.log(&format!(
            "batch {}: {} of {} expected photos written to {}",
            request.batch_id, report.written.len(), expected_count, run_dir.display())) {
            warn!("Could not append to run record: {}", e);
        }

        Ok(SplitReport {
            run_dir,
            base_file,
            photos: report.written,
            failures: report.failures,
            expected_count,
            regions_found: extraction.regions.len(),
        })
    }
}

//! Cropping regions out of the source scan and saving them

use std::fs;
use std::path::{Path, PathBuf};
use image::DynamicImage;
use log::{error, info, warn};

use crate::errors::{ScanError, ScanResult};
use crate::loader::{ImageFormat, SourceImage};
use crate::region::{Region, RegionCandidate};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use super::naming::OutputNaming;

/// A photo that made it to disk
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenPhoto {
    /// Position in the output set (0 = largest)
    pub rank: usize,
    pub path: PathBuf,
    /// Crop rectangle in source pixel coordinates
    pub bounds: Region,
    /// Enclosed contour area in px²
    pub area: f64,
}

/// Result of writing every retained region
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<WrittenPhoto>,
    /// One `RegionWrite` error per photo that could not be saved
    pub failures: Vec<ScanError>,
}

/// Copy the pixels under `region` out of the source scan
pub fn crop_region(source: &SourceImage, region: Region) -> DynamicImage {
    let region = region.clamp_to(source.width(), source.height());
    source.image().crop_imm(region.x, region.y, region.width, region.height)
}

fn save(image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<(), String> {
    let result = match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8())
            .save_with_format(path, format.encoder_format()),
        ImageFormat::Png => image.save_with_format(path, format.encoder_format()),
    };
    result.map_err(|e| e.to_string())
}

/// Writes the outputs of one run into its directory
pub struct CropWriter<'a> {
    dir: PathBuf,
    naming: &'a OutputNaming,
    logger: &'a Logger,
}

impl<'a> CropWriter<'a> {
    /// # Arguments
    /// * `dir` - Existing run directory
    /// * `naming` - File naming for this batch
    /// * `logger` - Receives one run-record line per written file
    pub fn new(dir: &Path, naming: &'a OutputNaming, logger: &'a Logger) -> Self {
        CropWriter {
            dir: dir.to_path_buf(),
            naming,
            logger,
        }
    }

    fn record(&self, message: &str) {
        if let Err(e) = self.logger.log(message) {
            warn!("Could not append to run record: {}", e);
        }
    }

    /// Copy the scan file, byte for byte, next to its photos
    ///
    /// # Returns
    /// The written path; failure is fatal for the run
    pub fn write_base(&self, source: &SourceImage) -> ScanResult<PathBuf> {
        let path = self.dir.join(self.naming.base_file_name());
        info!("Copying base scan to {}", path.display());

        fs::copy(source.path(), &path).map_err(|reason| {
            error!("Failed to write base scan {}: {}", path.display(), reason);
            ScanError::GenericError(format!("failed to write base scan {}: {}", path.display(), reason))
        })?;

        self.record(&format!("base scan: {}, source: {}", path.display(), source.path().display()));
        Ok(path)
    }

    /// Crop and save every region, ranked by position
    ///
    /// A failed write is logged and skipped; the remaining regions are
    /// still written.
    ///
    /// # Returns
    /// The report, or `AllWritesFailed` when regions were given and none
    /// could be written
    pub fn write_photos(&self, source: &SourceImage, regions: &[RegionCandidate]) -> ScanResult<WriteReport> {
        let mut report = WriteReport::default();
        if regions.is_empty() {
            warn!("No photo regions to write");
            return Ok(report);
        }

        let progress = ProgressTracker::new(regions.len() as u64, "Writing photos");

        for (rank, candidate) in regions.iter().enumerate() {
            let bounds = candidate.bounds();
            let path = self.dir.join(self.naming.photo_file_name(rank));
            let photo = crop_region(source, bounds);

            match save(&photo, &path, source.format()) {
                Ok(()) => {
                    info!("photo number: {}, batch number: {}, output file: {}, size: {}x{}",
                          rank, self.naming.batch_id(), path.display(), photo.width(), photo.height());
                    self.record(&format!("photo {}: {} at x={} y={} {}x{} (area {:.0})",
                                         rank, path.display(), bounds.x, bounds.y,
                                         bounds.width, bounds.height, candidate.area()));
                    report.written.push(WrittenPhoto {
                        rank,
                        path,
                        bounds,
                        area: candidate.area(),
                    });
                }
                Err(reason) => {
                    let err = ScanError::RegionWrite {
                        rank,
                        path: path.display().to_string(),
                        reason,
                    };
                    error!("{}", err);
                    report.failures.push(err);
                }
            }

            progress.increment(1);
        }
        progress.finish();

        if report.written.is_empty() {
            return Err(ScanError::AllWritesFailed(report.failures.len()));
        }
        if !report.failures.is_empty() {
            warn!("{} of {} photos could not be written", report.failures.len(), regions.len());
        }

        Ok(report)
    }
}

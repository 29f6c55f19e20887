//! Tuning configuration for the splitting pipeline
//!
//! Every empirically tuned constant of the pipeline lives here with its
//! default. Values can be overridden from a TOML file with `[preprocess]`,
//! `[regions]` and `[output]` tables; keys that are absent keep their
//! default and unknown keys are ignored.

use std::fs;
use std::path::Path;
use log::{debug, info};
use crate::errors::{ScanError, ScanResult};
use crate::output::validate_path_component;

/// Settings for grayscale, blur, threshold and edge stages
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessConfig {
    /// Gaussian kernel size in pixels, odd (default 3)
    pub blur_kernel_size: u32,
    /// Gaussian sigma (default 0.8, close to the fixed [0.25, 0.5, 0.25] 3-tap kernel)
    pub blur_sigma: f32,
    /// Side of the square neighbourhood used for the local mean, odd (default 11)
    pub threshold_block_size: u32,
    /// Constant subtracted from the local mean (default 2)
    pub threshold_offset: i32,
    /// Canny low hysteresis threshold (default 300)
    pub canny_low: f32,
    /// Canny high hysteresis threshold (default 350)
    pub canny_high: f32,
    /// Chebyshev radius used to close gaps in the edge map, 0 disables (default 1)
    pub edge_closing_radius: u8,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        PreprocessConfig {
            blur_kernel_size: 3,
            blur_sigma: 0.8,
            threshold_block_size: 11,
            threshold_offset: 2,
            canny_low: 300.0,
            canny_high: 350.0,
            edge_closing_radius: 1,
        }
    }
}

/// Settings for contour filtering, deduplication and truncation
#[derive(Debug, Clone, PartialEq)]
pub struct RegionConfig {
    /// Minimum enclosed contour area in px² (default 50 000)
    pub min_area: f64,
    /// Centroid distance below which two regions are the same photo (default 500)
    pub dedup_distance: f64,
    /// Number of photos expected in one scan (default 20)
    pub expected_count: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        RegionConfig {
            min_area: 50_000.0,
            dedup_distance: 500.0,
            expected_count: 20,
        }
    }
}

/// Settings for output layout
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Directory inserted between the output root and the batch id
    pub namespace: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            namespace: "instax_parsing".to_string(),
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanConfig {
    pub preprocess: PreprocessConfig,
    pub regions: RegionConfig,
    pub output: OutputConfig,
}

impl ScanConfig {
    /// Parse a configuration from TOML text, starting from the defaults
    pub fn from_str(content: &str) -> ScanResult<Self> {
        let table = content
            .parse::<toml::Table>()
            .map_err(|e| ScanError::Config(format!("Failed to parse TOML: {}", e)))?;

        let mut config = ScanConfig::default();

        if let Some(section) = section(&table, "preprocess")? {
            let p = &mut config.preprocess;
            if let Some(v) = read_u32(section, "preprocess", "blur_kernel_size")? {
                p.blur_kernel_size = v;
            }
            if let Some(v) = read_f64(section, "preprocess", "blur_sigma")? {
                p.blur_sigma = v as f32;
            }
            if let Some(v) = read_u32(section, "preprocess", "threshold_block_size")? {
                p.threshold_block_size = v;
            }
            if let Some(v) = read_int(section, "preprocess", "threshold_offset")? {
                p.threshold_offset = i32::try_from(v).map_err(|_| {
                    ScanError::Config(format!("preprocess.threshold_offset out of range: {}", v))
                })?;
            }
            if let Some(v) = read_f64(section, "preprocess", "canny_low")? {
                p.canny_low = v as f32;
            }
            if let Some(v) = read_f64(section, "preprocess", "canny_high")? {
                p.canny_high = v as f32;
            }
            if let Some(v) = read_int(section, "preprocess", "edge_closing_radius")? {
                p.edge_closing_radius = u8::try_from(v).map_err(|_| {
                    ScanError::Config(format!("preprocess.edge_closing_radius out of range: {}", v))
                })?;
            }
        }

        if let Some(section) = section(&table, "regions")? {
            let r = &mut config.regions;
            if let Some(v) = read_f64(section, "regions", "min_area")? {
                r.min_area = v;
            }
            if let Some(v) = read_f64(section, "regions", "dedup_distance")? {
                r.dedup_distance = v;
            }
            if let Some(v) = read_int(section, "regions", "expected_count")? {
                r.expected_count = usize::try_from(v).map_err(|_| {
                    ScanError::Config(format!("regions.expected_count out of range: {}", v))
                })?;
            }
        }

        if let Some(section) = section(&table, "output")? {
            if let Some(value) = section.get("namespace") {
                let namespace = value.as_str().ok_or_else(|| {
                    ScanError::Config("output.namespace must be a string".to_string())
                })?;
                config.output.namespace = namespace.to_string();
            }
        }

        config.validate()?;
        debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScanResult<Self> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Check that every value is usable by the pipeline
    ///
    /// `min_area` must be strictly positive: the area filter is what keeps
    /// zero-area contours away from the centroid computation.
    pub fn validate(&self) -> ScanResult<()> {
        let p = &self.preprocess;
        if p.blur_kernel_size == 0 || p.blur_kernel_size % 2 == 0 {
            return Err(ScanError::Config(format!(
                "blur_kernel_size must be odd and positive, got {}", p.blur_kernel_size)));
        }
        if !(p.blur_sigma > 0.0) {
            return Err(ScanError::Config(format!(
                "blur_sigma must be positive, got {}", p.blur_sigma)));
        }
        if p.threshold_block_size < 3 || p.threshold_block_size % 2 == 0 {
            return Err(ScanError::Config(format!(
                "threshold_block_size must be odd and at least 3, got {}", p.threshold_block_size)));
        }
        if !(p.canny_low >= 0.0) || !(p.canny_low <= p.canny_high) {
            return Err(ScanError::Config(format!(
                "canny thresholds must satisfy 0 <= low <= high, got low={} high={}",
                p.canny_low, p.canny_high)));
        }

        let r = &self.regions;
        if !(r.min_area > 0.0) || !r.min_area.is_finite() {
            return Err(ScanError::Config(format!(
                "min_area must be a positive number, got {}", r.min_area)));
        }
        if !(r.dedup_distance >= 0.0) || !r.dedup_distance.is_finite() {
            return Err(ScanError::Config(format!(
                "dedup_distance must be a non-negative number, got {}", r.dedup_distance)));
        }
        if r.expected_count == 0 {
            return Err(ScanError::Config("expected_count must be at least 1".to_string()));
        }

        validate_path_component("namespace", &self.output.namespace)?;

        Ok(())
    }
}

fn section<'t>(table: &'t toml::Table, name: &str) -> ScanResult<Option<&'t toml::Table>> {
    match table.get(name) {
        None => Ok(None),
        Some(value) => value
            .as_table()
            .map(Some)
            .ok_or_else(|| ScanError::Config(format!("[{}] must be a table", name))),
    }
}

fn read_int(section: &toml::Table, table: &str, key: &str) -> ScanResult<Option<i64>> {
    match section.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_integer()
            .map(Some)
            .ok_or_else(|| ScanError::Config(format!("{}.{} must be an integer", table, key))),
    }
}

fn read_u32(section: &toml::Table, table: &str, key: &str) -> ScanResult<Option<u32>> {
    match read_int(section, table, key)? {
        None => Ok(None),
        Some(v) => u32::try_from(v)
            .map(Some)
            .map_err(|_| ScanError::Config(format!("{}.{} out of range: {}", table, key, v))),
    }
}

// Integers are accepted where a float is expected.
fn read_f64(section: &toml::Table, table: &str, key: &str) -> ScanResult<Option<f64>> {
    match section.get(key) {
        None => Ok(None),
        Some(toml::Value::Float(f)) => Ok(Some(*f)),
        Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
        Some(_) => Err(ScanError::Config(format!("{}.{} must be a number", table, key))),
    }
}

//! Scan splitting command
//!
//! Builds the configuration from defaults, an optional TOML file and CLI
//! overrides, then runs the pipeline once.

use std::path::PathBuf;
use chrono::Utc;
use clap::ArgMatches;
use log::info;

use crate::api::{ScanSplitter, SplitRequest};
use crate::commands::command_traits::Command;
use crate::config::ScanConfig;
use crate::errors::{ScanError, ScanResult};
use crate::output::run_timestamp;
use crate::utils::logger::Logger;

/// Command splitting one scan into photo files
pub struct SplitCommand<'a> {
    /// Scan to split
    input_file: PathBuf,
    /// Root of the output tree
    output_dir: PathBuf,
    batch_id: String,
    config: ScanConfig,
    /// Captured when the command is built so every file of a run shares it
    run_timestamp: String,
    /// Run record
    logger: &'a Logger,
}

impl<'a> SplitCommand<'a> {
    /// Create a new split command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Run record
    ///
    /// # Returns
    /// A new SplitCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ScanResult<Self> {
        let run_timestamp = run_timestamp(Utc::now());

        let input_file = args.get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or_else(|| ScanError::GenericError("Missing input file".to_string()))?;
        info!("Input file: {}", input_file.display());

        let output_dir = args.get_one::<String>("output-dir")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);
        info!("Output directory: {}", output_dir.display());

        let batch_id = args.get_one::<String>("batch")
            .ok_or_else(|| ScanError::GenericError("Missing batch id".to_string()))?
            .clone();

        let mut config = match args.get_one::<String>("config") {
            Some(path) => ScanConfig::from_file(path)?,
            None => ScanConfig::default(),
        };
        if let Some(count) = args.get_one::<usize>("count") {
            config.regions.expected_count = *count;
        }
        if let Some(namespace) = args.get_one::<String>("namespace") {
            config.output.namespace = namespace.clone();
        }
        config.validate()?;
        info!("Expecting {} photos in batch {}", config.regions.expected_count, batch_id);

        Ok(SplitCommand {
            input_file,
            output_dir,
            batch_id,
            config,
            run_timestamp,
            logger,
        })
    }
}

impl<'a> Command for SplitCommand<'a> {
    fn execute(&self) -> ScanResult<()> {
        let splitter = ScanSplitter::new(self.config.clone(), self.logger)?;
        let request = SplitRequest {
            input: self.input_file.clone(),
            output_dir: self.output_dir.clone(),
            batch_id: self.batch_id.clone(),
            run_timestamp: self.run_timestamp.clone(),
        };

        let report = splitter.split(&request)?;

        println!("Wrote {} of {} expected photos to {}",
                 report.photos.len(), report.expected_count, report.run_dir.display());
        for photo in &report.photos {
            println!("  {} ({}x{})", photo.path.display(), photo.bounds.width, photo.bounds.height);
        }
        for failure in &report.failures {
            eprintln!("  {}", failure);
        }

        Ok(())
    }
}

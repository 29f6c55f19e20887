//! Listing photo files of a finished run
//!
//! Prints the photos of a run directory in rank order, which is the order
//! a tagging tool should present them in.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{ScanError, ScanResult};
use crate::output::list_photos;

/// Command listing `batch<id>_photo<rank>` files in a directory
pub struct ListCommand {
    dir: PathBuf,
}

impl ListCommand {
    pub fn new(args: &ArgMatches) -> ScanResult<Self> {
        let dir = args.get_one::<String>("input")
            .ok_or_else(|| ScanError::GenericError("Missing directory to list".to_string()))?;
        Ok(ListCommand { dir: PathBuf::from(dir) })
    }
}

impl Command for ListCommand {
    fn execute(&self) -> ScanResult<()> {
        info!("Listing photos in {}", self.dir.display());
        let photos = list_photos(&self.dir)?;
        info!("Found {} photos", photos.len());
        for photo in photos {
            println!("{}", photo.display());
        }
        Ok(())
    }
}

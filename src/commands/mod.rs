//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod split_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory};
pub use split_command::SplitCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;
use crate::errors::ScanResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct ScansplitCommandFactory;

impl ScansplitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ScansplitCommandFactory
    }
}

impl Default for ScansplitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for ScansplitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ScanResult<Box<dyn Command + 'a>> {
        if args.get_flag("list") {
            Ok(Box::new(ListCommand::new(args)?))
        } else {
            // Default to splitting a scan
            Ok(Box::new(SplitCommand::new(args, logger)?))
        }
    }
}

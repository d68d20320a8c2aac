//! Command-line argument definitions for the season processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the season statistics processor
///
/// Converts a semicolon-delimited file of three seasons' soccer statistics
/// into a weighted-average team summary written as JSON next to the current
/// working directory.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "season-processor",
    version,
    about = "Convert semicolon-delimited season statistics into a weighted-average JSON summary",
    long_about = "Reads a text file with one season of soccer statistics per line \
                  (Wins;Draws;Losses;GoalsScored;GoalsTaken;ShotsAverage;GoalsPerShot), \
                  computes the weighted average of the first three seasons per field, and \
                  writes the result to <basename>.json in the current working directory."
)]
pub struct Args {
    /// Path to the semicolon-delimited season statistics file
    ///
    /// One season per line, seven numeric fields in fixed order. The first
    /// three lines form the averaging window; later lines are ignored.
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_file.display()
            )));
        }

        if !self.input_file.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_file.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

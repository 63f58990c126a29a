//! Command-line argument definitions for crash point conversion
//!
//! Every option is optional: without flags the run uses the configured (or
//! built-in default) input and output locations.

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the crash point converter
///
/// Converts a crash-record CSV export into a JSON array of points for map
/// rendering, skipping and reporting rows that cannot be used.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "crash-points",
    version,
    about = "Convert crash-record CSV exports into a JSON point collection for map rendering",
    long_about = "Reads a crash CSV export, validates that the Latitude, Longitude, Rpt_City_ID, \
                  Rpt_CRIS_Cnty_ID and Crash_Date columns are present, normalizes every row into \
                  a point (lat, lng, city_id, county_id, year) and writes the accepted points as a \
                  pretty-printed JSON array. Rows with bad dates, bad or zero coordinates, or \
                  missing values are skipped and reported."
)]
pub struct Args {
    /// Input crash CSV file
    ///
    /// Overrides `input_path` from the config file.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: Option<PathBuf>,

    /// Output JSON file
    ///
    /// Overrides `output_path` from the config file. Parent directories are
    /// created as needed.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// TOML config file with `input_path` and `output_path`
    ///
    /// Defaults to crash-points/config.toml in the user config directory
    /// when that file exists.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Validate and normalize without writing the output file
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Skipped-row lines are hidden.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get log level based on verbosity settings
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

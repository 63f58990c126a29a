//! Command implementation for the crash point converter
//!
//! Ties together configuration, the CSV source, the record normalizer and
//! the JSON sink, and prints the human-readable status report.

use crate::app::adapters::csv_source::CsvSource;
use crate::app::adapters::json_sink::JsonSink;
use crate::app::services::record_normalizer::{RecordNormalizer, RunSummary};
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use colored::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Outcome of one conversion run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Accepted points and skip diagnostics
    pub summary: RunSummary,
    /// Where the points were (or would have been) written
    pub output_path: PathBuf,
    /// Bytes written, `None` for a dry run
    pub bytes_written: Option<u64>,
    /// Wall-clock time of the conversion
    pub elapsed: Duration,
}

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Read, validate and normalize the input
/// 3. Write the output unless this is a dry run
/// 4. Print the status report
pub fn run(args: Args) -> Result<RunReport> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let report = convert(&config, args.dry_run)?;
    print_report(&args, &report);

    Ok(report)
}

/// Convert the configured input into the configured output
///
/// Header failures abort before anything is written. Skipped rows are
/// logged as warnings and excluded from the output.
pub fn convert(config: &Config, dry_run: bool) -> Result<RunReport> {
    let start_time = Instant::now();

    let table = CsvSource::new(&config.input_path).read()?;
    let summary = RecordNormalizer::default().normalize(&table.columns, table.rows)?;

    for diagnostic in &summary.skipped {
        warn!("{}", diagnostic);
    }

    let bytes_written = if dry_run {
        info!("Dry run - not writing {}", config.output_path.display());
        None
    } else {
        Some(JsonSink::new(&config.output_path).write(&summary.points)?)
    };

    Ok(RunReport {
        summary,
        output_path: config.output_path.clone(),
        bytes_written,
        elapsed: start_time.elapsed(),
    })
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(log_directives(rust_log.as_deref(), log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Filter directives for the subscriber
///
/// `RUST_LOG` directives are kept, but unless they name this crate its own
/// target stays at the CLI level so skipped-row lines are never filtered out
/// by an unrelated `RUST_LOG`.
fn log_directives(rust_log: Option<&str>, log_level: &str) -> String {
    let crate_directive = format!("{}={}", LOG_TARGET, log_level);
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) if directives.contains(LOG_TARGET) => directives.to_string(),
        Some(directives) => format!("{},{}", directives, crate_directive),
        None => crate_directive,
    }
}

/// Load configuration using layered approach (defaults -> file -> args)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults");
    }

    let config = Config::load_layered(
        args.input_path.clone(),
        args.output_path.clone(),
        config_file,
    )?;
    config.validate()?;

    Ok(config)
}

/// Print the human-readable status report
fn print_report(args: &Args, report: &RunReport) {
    let summary = &report.summary;

    match report.bytes_written {
        Some(_) => {
            println!(
                "{} Converted {} points to JSON ({} rows skipped)",
                "✅".green(),
                summary.accepted_count(),
                summary.skipped_count()
            );
            println!("Output saved to {}", report.output_path.display());
        }
        None => {
            println!(
                "{} Dry run: {} points would be written ({} rows skipped)",
                "🔍".cyan(),
                summary.accepted_count(),
                summary.skipped_count()
            );
            println!("Output not written to {}", report.output_path.display());
        }
    }

    if args.verbose > 0 && !args.quiet {
        println!();
        println!("{}", "Skipped rows by reason:".bright_white().bold());
        for (kind, count) in summary.skipped_by_kind() {
            println!("   • {}: {}", kind.to_string().bright_yellow(), count);
        }
        println!(
            "   • Accepted: {:.1}% of {} rows in {:.2?}",
            summary.acceptance_rate(),
            summary.total_rows(),
            report.elapsed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "Crash_ID,Crash_Date,Latitude,Longitude,Rpt_City_ID,Rpt_CRIS_Cnty_ID";

    fn config_for(dir: &TempDir, csv: &str) -> Config {
        let input_path = dir.path().join("crashes.csv");
        fs::write(&input_path, csv).unwrap();
        Config {
            input_path,
            output_path: dir.path().join("out").join("crashes.json"),
        }
    }

    #[test]
    fn test_convert_writes_accepted_points() {
        let dir = TempDir::new().unwrap();
        let config = config_for(
            &dir,
            &format!(
                "{}\n1,01/02/2021,30.5,-97.7,AUSTIN,227\n2,01/02/2021,0,-97.7,,\n",
                HEADER
            ),
        );

        let report = convert(&config, false).unwrap();

        assert_eq!(report.summary.accepted_count(), 1);
        assert_eq!(report.summary.skipped_count(), 1);
        assert!(report.bytes_written.is_some());
        assert!(config.output_path.exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, &format!("{}\n1,01/02/2021,30.5,-97.7,AUSTIN,227\n", HEADER));

        let report = convert(&config, true).unwrap();

        assert_eq!(report.summary.accepted_count(), 1);
        assert_eq!(report.bytes_written, None);
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_log_directives_default_to_crate_level() {
        assert_eq!(log_directives(None, "warn"), "crash_points=warn");
        assert_eq!(log_directives(Some("  "), "error"), "crash_points=error");
    }

    #[test]
    fn test_log_directives_keep_crate_level_under_foreign_rust_log() {
        assert_eq!(
            log_directives(Some("hyper=debug"), "warn"),
            "hyper=debug,crash_points=warn"
        );
        assert_eq!(log_directives(Some("error"), "warn"), "error,crash_points=warn");
    }

    #[test]
    fn test_log_directives_respect_crate_rust_log() {
        assert_eq!(
            log_directives(Some("crash_points=trace"), "warn"),
            "crash_points=trace"
        );
    }

    #[test]
    fn test_schema_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_for(
            &dir,
            "Crash_Date,Latitude,Longitude,Rpt_City_ID\n01/02/2021,30.5,-97.7,AUSTIN\n",
        );

        let result = convert(&config, false);

        assert!(matches!(result, Err(Error::Schema { .. })));
        assert!(!config.output_path.exists());
        assert!(!config.output_path.parent().unwrap().exists());
    }
}

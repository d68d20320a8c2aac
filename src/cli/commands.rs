//! Command execution for the season processor CLI
//!
//! Contains the main run logic: logging setup, argument validation, and the
//! parse → aggregate → write pipeline with summary reporting.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::app::services::{aggregator, season_parser, summary_writer};
use crate::cli::args::Args;
use crate::{Error, Result};

/// Statistics for a completed run
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Number of season records parsed from the input file
    pub seasons_parsed: usize,
    /// Team name derived from the input file
    pub team_name: String,
    /// Path of the written summary file
    pub output_path: PathBuf,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Run the season processing pipeline.
///
/// 1. Set up logging from the verbosity flags
/// 2. Validate the input file argument
/// 3. Parse season records and derive the team name
/// 4. Aggregate the season window into a summary
/// 5. Write the JSON summary to the current working directory
///
/// The output file is created only after aggregation succeeds, so parse and
/// validation failures never leave partial output behind.
pub fn run(args: Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("starting season processor");
    debug!("command line arguments: {:?}", args);

    args.validate()?;

    let seasons = season_parser::parse_seasons(&args.input_file)?;
    info!(
        "parsed {} season records from {}",
        seasons.len(),
        args.input_file.display()
    );

    let team_name = summary_writer::derive_team_name(&args.input_file)?;
    let summary = aggregator::summarize(&seasons, team_name.clone())?;

    let output_dir = std::env::current_dir()
        .map_err(|e| Error::io("failed to resolve current working directory", e))?;
    let output_path = summary_writer::write_summary(&summary, &output_dir)?;

    let stats = RunStats {
        seasons_parsed: seasons.len(),
        team_name,
        output_path,
        processing_time: start_time.elapsed(),
    };

    if !args.quiet {
        report_results(&stats);
    }

    Ok(stats)
}

/// Print a short human-readable completion summary
fn report_results(stats: &RunStats) {
    println!(
        "Wrote {} ({} seasons aggregated for '{}' in {:.2?})",
        stats.output_path.display(),
        stats.seasons_parsed,
        stats.team_name,
        stats.processing_time
    );
}

/// Set up tracing from the verbosity flags; RUST_LOG overrides.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("season_processor={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

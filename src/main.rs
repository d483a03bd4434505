//! Binary entry point.
//!
//! Parses arguments, validates the coordinate, loads the optional
//! configuration, runs the pipeline and prints the wallpaper filename on
//! standard output. Every failure is reported on standard error and ends the
//! process with status 1.

use anyhow::{Context, Result};
use std::path::Path;

use sunpaper::args::{self, CliAction, ParsedArgs};
use sunpaper::config;
use sunpaper::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use sunpaper::fetch::HttpFetcher;
use sunpaper::geo::Coordinate;
use sunpaper::logger::Log;
use sunpaper::time::{FixedTimeSource, RealTimeSource, TimeSource};
use sunpaper::{
    Sunpaper, log_block_start, log_debug, log_end, log_error_exit, log_error_standalone,
    log_version,
};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let code = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            EXIT_SUCCESS
        }
        CliAction::ShowHelp => {
            args::display_help();
            EXIT_SUCCESS
        }
        CliAction::UsageError { reason } => {
            log_error_standalone!("{reason}");
            args::display_usage();
            EXIT_FAILURE
        }
        CliAction::Run {
            latitude,
            longitude,
            debug_enabled,
            config_dir,
            at,
        } => {
            Log::set_debug(debug_enabled);
            if debug_enabled {
                log_version!();
            }

            // Validation errors are reported as-is, without a context chain
            match Coordinate::parse(&latitude, &longitude) {
                Err(e) => {
                    report_error(debug_enabled, &e.to_string());
                    EXIT_FAILURE
                }
                Ok(coordinate) => match run(coordinate, config_dir.as_deref(), at) {
                    Ok(wallpaper) => {
                        println!("{wallpaper}");
                        if debug_enabled {
                            log_end!();
                        }
                        EXIT_SUCCESS
                    }
                    Err(e) => {
                        report_error(debug_enabled, &format!("{e:#}"));
                        EXIT_FAILURE
                    }
                },
            }
        }
    };

    std::process::exit(code);
}

fn run(
    coordinate: Coordinate,
    config_dir: Option<&str>,
    at: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<&'static str> {
    let config = config::load(config_dir.map(Path::new)).context("Failed to load configuration")?;
    if Log::is_debug() {
        config.log_config();
    }

    let time_source: Box<dyn TimeSource> = match at {
        Some(instant) => {
            log_debug!("Classifying {} instead of the current time", instant.to_rfc3339());
            Box::new(FixedTimeSource::new(instant).with_real_sleep())
        }
        None => Box::new(RealTimeSource),
    };

    let fetcher = HttpFetcher::new().context("Failed to create HTTP client")?;

    if Log::is_debug() {
        log_block_start!("Selecting wallpaper for {coordinate}");
    }
    let selection = Sunpaper::new(coordinate)
        .with_config(config)
        .run(&fetcher, time_source.as_ref())?;

    Ok(selection.wallpaper())
}

fn report_error(debug_enabled: bool, message: &str) {
    if debug_enabled {
        log_error_exit!("{message}");
    } else {
        log_error_standalone!("{message}");
    }
}

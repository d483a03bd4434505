//! Command-line argument parsing.
//!
//! sunpaper takes exactly two positional arguments, latitude and longitude,
//! plus a handful of flags. Negative numbers such as `-33.86` are positional
//! values, never flags, and `--` ends flag parsing altogether.

use chrono::{DateTime, Utc};

/// Represents the parsed command-line arguments and their intended action.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Pick a wallpaper for the given coordinate
    Run {
        latitude: String,
        longitude: String,
        debug_enabled: bool,
        config_dir: Option<String>,
        /// Classify this instant instead of the current time
        at: Option<DateTime<Utc>>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Wrong arguments: show usage and fail
    UsageError { reason: String },
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

/// True for things like `-12`, `-0.5` or `-.5` that should be read as values.
fn looks_like_negative_number(arg: &str) -> bool {
    arg.strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

fn usage_error(reason: impl Into<String>) -> ParsedArgs {
    ParsedArgs {
        action: CliAction::UsageError {
            reason: reason.into(),
        },
    }
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first item is the program name and is skipped. `--version` wins
    /// over `--help`, and both win over any argument errors.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut config_dir: Option<String> = None;
        let mut at_value: Option<String> = None;
        let mut positionals: Vec<String> = Vec::new();
        let mut first_error: Option<String> = None;
        let mut only_positionals = false;

        let mut iter = args.into_iter().skip(1).map(|s| s.as_ref().to_string());

        while let Some(arg) = iter.next() {
            if only_positionals || !arg.starts_with('-') || looks_like_negative_number(&arg) {
                positionals.push(arg);
                continue;
            }

            match arg.as_str() {
                "--" => only_positionals = true,
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => debug_enabled = true,
                "--config" | "-c" => match iter.next() {
                    Some(dir) => config_dir = Some(dir),
                    None => {
                        first_error.get_or_insert_with(|| format!("{arg} requires a directory"));
                    }
                },
                "--at" | "-t" => match iter.next() {
                    Some(value) => at_value = Some(value),
                    None => {
                        first_error.get_or_insert_with(|| format!("{arg} requires a timestamp"));
                    }
                },
                _ => {
                    if let Some(dir) = arg.strip_prefix("--config=") {
                        config_dir = Some(dir.to_string());
                    } else if let Some(value) = arg.strip_prefix("--at=") {
                        at_value = Some(value.to_string());
                    } else {
                        first_error.get_or_insert_with(|| format!("Unknown option: {arg}"));
                    }
                }
            }
        }

        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if let Some(reason) = first_error {
            return usage_error(reason);
        }

        let at = match at_value {
            Some(value) => match DateTime::parse_from_rfc3339(&value) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(e) => {
                    return usage_error(format!(
                        "Invalid --at timestamp '{value}': {e} (expected RFC 3339, e.g. 2024-06-21T18:30:00Z)"
                    ));
                }
            },
            None => None,
        };

        let mut positionals = positionals.into_iter();
        match (positionals.next(), positionals.next(), positionals.next()) {
            (Some(latitude), Some(longitude), None) => ParsedArgs {
                action: CliAction::Run {
                    latitude,
                    longitude,
                    debug_enabled,
                    config_dir,
                    at,
                },
            },
            (None, _, _) | (Some(_), None, _) => {
                usage_error("Expected a latitude and a longitude")
            }
            (Some(_), Some(_), Some(extra)) => {
                usage_error(format!("Unexpected extra argument: {extra}"))
            }
        }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Brief usage line, shown with argument errors.
pub fn display_usage() {
    log_block_start!("Usage: sunpaper [OPTIONS] <latitude> <longitude>");
    log_indented!("Try 'sunpaper --help' for more information.");
}

/// Displays version information.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays the help message.
pub fn display_help() {
    log_version!();
    log_block_start!("{}", env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("sunpaper [OPTIONS] <latitude> <longitude>");
    log_block_start!("Arguments:");
    log_indented!("<latitude>             Degrees north, -90 to 90");
    log_indented!("<longitude>            Degrees east, -180 to 180");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Log every lookup and decision");
    log_indented!("-h, --help             Print help information");
    log_indented!("-t, --at <timestamp>   Classify an RFC 3339 instant instead of now");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Output:");
    log_indented!("The chosen wallpaper filename is printed on standard output:");
    log_indented!("sunrise.png, morning.png, noon.png, sunset.png, evening.png or night.png");
    log_block_start!("Examples:");
    log_indented!("sunpaper 40.7128 -74.0060");
    log_indented!("sunpaper -33.8688 151.2093 --at 2024-06-21T08:00:00Z");
    log_end!();
}

//! Conversion of UTC timestamps into a location's local time.
//!
//! Offsets, including daylight saving, come from the IANA database bundled
//! with `chrono-tz`. A `DateTime<Tz>` compares by absolute instant, so
//! converted values can be ordered against each other directly.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),
}

/// Look up an IANA timezone name such as `Europe/Berlin`.
pub fn parse_timezone(name: &str) -> Result<Tz, ConversionError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConversionError::UnknownTimezone(name.to_string()))
}

/// Reinterpret an RFC 3339 timestamp (e.g. `2024-06-21T03:43:12+00:00`) in `tz`.
pub fn to_local_time(timestamp: &str, tz: Tz) -> Result<DateTime<Tz>, ConversionError> {
    let parsed = DateTime::parse_from_rfc3339(timestamp.trim()).map_err(|e| {
        ConversionError::InvalidTimestamp {
            input: timestamp.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(parsed.with_timezone(&tz))
}

/// Reinterpret an already parsed UTC instant in `tz`.
pub fn to_local_instant(instant: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    instant.with_timezone(&tz)
}

//! Sunrise, sunset, solar noon and civil twilight lookup.
//!
//! The service is asked for unformatted output (`formatted=0`) so every time
//! comes back as an ISO-8601 UTC timestamp such as
//! `2024-06-21T03:43:12+00:00`. A typical body looks like:
//!
//! ```json
//! {
//!   "results": {
//!     "sunrise": "2024-06-21T09:25:09+00:00",
//!     "sunset": "2024-06-22T00:31:13+00:00",
//!     "solar_noon": "2024-06-21T16:58:11+00:00",
//!     "civil_twilight_end": "2024-06-22T01:04:13+00:00"
//!   },
//!   "status": "OK"
//! }
//! ```

use serde::Deserialize;

use super::{Coordinate, ResolveError, query_url};
use crate::fetch::RetryingFetcher;

const SERVICE: &str = "sun times";

/// The four reference instants for one day, as UTC timestamps.
///
/// Nothing here checks that they are in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    pub civil_twilight_end: String,
}

#[derive(Debug, Deserialize)]
struct SunTimesResults {
    sunrise: Option<String>,
    sunset: Option<String>,
    solar_noon: Option<String>,
    civil_twilight_end: Option<String>,
}

/// Build the lookup URL: `{endpoint}?lat={lat}&lng={lon}&formatted=0`.
pub fn sun_times_url(endpoint: &str, coordinate: &Coordinate) -> Result<String, ResolveError> {
    let (lat, lon) = coordinate.query_values();
    query_url(
        SERVICE,
        endpoint,
        &[("lat", lat), ("lng", lon), ("formatted", "0")],
    )
}

/// Ask the sun times service for today's reference instants at `coordinate`.
pub fn resolve_sun_times(
    fetcher: &RetryingFetcher<'_>,
    endpoint: &str,
    coordinate: &Coordinate,
) -> Result<SunTimes, ResolveError> {
    let url = sun_times_url(endpoint, coordinate)?;
    let body = fetcher
        .get(&url)
        .map_err(|source| ResolveError::Upstream {
            service: SERVICE,
            source,
        })?;

    parse_sun_times(&body)
}

/// Extract [`SunTimes`] from a response body.
///
/// On a bad request the service still answers 200 but sets `status` to
/// something other than `OK` and `results` to an empty string, so `status` is
/// checked before `results` is looked at.
pub fn parse_sun_times(body: &str) -> Result<SunTimes, ResolveError> {
    let invalid = |source| ResolveError::InvalidResponse {
        service: SERVICE,
        source,
    };
    let missing = |field| ResolveError::MissingField {
        service: SERVICE,
        field,
    };

    let value: serde_json::Value = serde_json::from_str(body).map_err(invalid)?;

    if let Some(status) = value.get("status").and_then(|s| s.as_str())
        && status != "OK"
    {
        return Err(ResolveError::UpstreamStatus {
            service: SERVICE,
            status: status.to_string(),
        });
    }

    let results = value
        .get("results")
        .filter(|r| r.is_object())
        .cloned()
        .ok_or_else(|| missing("results"))?;
    let results: SunTimesResults = serde_json::from_value(results).map_err(invalid)?;

    Ok(SunTimes {
        sunrise: results.sunrise.ok_or_else(|| missing("results.sunrise"))?,
        sunset: results.sunset.ok_or_else(|| missing("results.sunset"))?,
        solar_noon: results.solar_noon.ok_or_else(|| missing("results.solar_noon"))?,
        civil_twilight_end: results
            .civil_twilight_end
            .ok_or_else(|| missing("results.civil_twilight_end"))?,
    })
}

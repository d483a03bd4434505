//! Coordinate to IANA timezone lookup.

use serde_json::Value;

use super::{Coordinate, ResolveError, query_url};
use crate::fetch::RetryingFetcher;

const SERVICE: &str = "timezone";

/// Build the lookup URL: `{endpoint}?latitude={lat}&longitude={lon}`.
pub fn timezone_url(endpoint: &str, coordinate: &Coordinate) -> Result<String, ResolveError> {
    let (lat, lon) = coordinate.query_values();
    query_url(SERVICE, endpoint, &[("latitude", lat), ("longitude", lon)])
}

/// Ask the timezone service which IANA zone contains `coordinate`.
///
/// The name is returned as-is; turning it into a `Tz` is the converter's job.
/// A `timeZone` that is absent, blank or not a string counts as missing.
pub fn resolve_timezone(
    fetcher: &RetryingFetcher<'_>,
    endpoint: &str,
    coordinate: &Coordinate,
) -> Result<String, ResolveError> {
    let url = timezone_url(endpoint, coordinate)?;
    let body = fetcher
        .get(&url)
        .map_err(|source| ResolveError::Upstream {
            service: SERVICE,
            source,
        })?;

    let value: Value =
        serde_json::from_str(&body).map_err(|source| ResolveError::InvalidResponse {
            service: SERVICE,
            source,
        })?;

    value
        .get("timeZone")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .ok_or(ResolveError::MissingField {
            service: SERVICE,
            field: "timeZone",
        })
}

//! Configuration validation.

use anyhow::Result;

use super::Config;
use crate::constants::*;

/// Reject values the fetcher cannot work with.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(retries) = config.retries
        && !(MINIMUM_RETRIES..=MAXIMUM_RETRIES).contains(&retries)
    {
        anyhow::bail!(
            "retries ({}) must be between {} and {}",
            retries,
            MINIMUM_RETRIES,
            MAXIMUM_RETRIES
        );
    }

    if let Some(delay) = config.retry_delay_ms
        && delay > MAXIMUM_RETRY_DELAY_MS
    {
        anyhow::bail!(
            "retry_delay_ms ({}) must be between 0 and {} milliseconds",
            delay,
            MAXIMUM_RETRY_DELAY_MS
        );
    }

    if let Some(endpoint) = &config.timezone_endpoint {
        validate_endpoint(endpoint, "timezone_endpoint")?;
    }

    if let Some(endpoint) = &config.sun_times_endpoint {
        validate_endpoint(endpoint, "sun_times_endpoint")?;
    }

    Ok(())
}

/// An endpoint is a bare http(s) base URL; the query string is appended later.
fn validate_endpoint(endpoint: &str, field_name: &str) -> Result<()> {
    let rest = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => {}
        _ => anyhow::bail!(
            "{} ('{}') must be an http:// or https:// URL",
            field_name,
            endpoint
        ),
    }

    if endpoint.contains('?') {
        anyhow::bail!(
            "{} ('{}') must not contain a query string",
            field_name,
            endpoint
        );
    }

    Ok(())
}

//! Everything that turns a coordinate into location facts.
//!
//! ## Module Structure
//!
//! - [`coordinates`]: parsing and range checking of latitude/longitude input
//! - [`timezone`]: coordinate to IANA timezone name via the timezone service
//! - [`sun_times`]: sunrise, sunset, solar noon and civil twilight end via the
//!   sun times service
//!
//! Both lookups go through a [`RetryingFetcher`](crate::fetch::RetryingFetcher)
//! and report failures as [`ResolveError`].

pub mod coordinates;
pub mod sun_times;
pub mod timezone;

use thiserror::Error;

use crate::fetch::FetchError;

pub use coordinates::{Coordinate, CoordinateError, CoordinateKind, validate_coordinate};
pub use sun_times::{SunTimes, parse_sun_times, resolve_sun_times};
pub use timezone::resolve_timezone;


#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Could not reach the {service} service")]
    Upstream {
        service: &'static str,
        #[source]
        source: FetchError,
    },

    #[error("The {service} service returned malformed JSON")]
    InvalidResponse {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("The {service} service response is missing '{field}'")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },

    #[error("The {service} service reported status '{status}'")]
    UpstreamStatus {
        service: &'static str,
        status: String,
    },

    #[error("The {service} endpoint '{endpoint}' is not a valid URL: {reason}")]
    InvalidEndpoint {
        service: &'static str,
        endpoint: String,
        reason: String,
    },
}

/// Append percent-encoded query parameters to `endpoint`.
fn query_url(
    service: &'static str,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<String, ResolveError> {
    reqwest::Url::parse_with_params(endpoint, params)
        .map(String::from)
        .map_err(|e| ResolveError::InvalidEndpoint {
            service,
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
}

//! HTTP GET with bounded retry.
//!
//! The transport sits behind the [`Fetcher`] trait so the lookup code can be
//! exercised against canned responses. [`HttpFetcher`] is the real
//! implementation on top of a blocking `reqwest` client, and
//! [`RetryingFetcher`] layers the fixed-delay retry policy from [`retry`] over
//! any transport.

pub mod retry;

use thiserror::Error;

use crate::time::TimeSource;

pub use retry::{RetryPolicy, retry_with_delay};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Gave up after {attempts} attempts")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

/// A single GET, no retries.
///
/// Any non-success status must come back as an error.
#[cfg_attr(test, mockall::automock)]
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP transport.
///
/// No request timeout is set beyond the client's defaults.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("sunpaper/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(request_error)
    }
}

/// A transport wrapped in the retry policy.
pub struct RetryingFetcher<'a> {
    inner: &'a dyn Fetcher,
    policy: RetryPolicy,
    time_source: &'a dyn TimeSource,
}

impl<'a> RetryingFetcher<'a> {
    pub fn new(inner: &'a dyn Fetcher, policy: RetryPolicy, time_source: &'a dyn TimeSource) -> Self {
        Self {
            inner,
            policy,
            time_source,
        }
    }

    /// GET `url`, retrying every failure until the policy runs out.
    pub fn get(&self, url: &str) -> Result<String, FetchError> {
        retry_with_delay(&self.policy, url, self.time_source, |_| self.inner.get(url))
    }
}

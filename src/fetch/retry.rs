//! Fixed-delay retry policy.
//!
//! Every error is treated as retriable: a 404 is retried exactly like a
//! dropped connection or a 503. The delay never grows and carries no jitter.

use std::error::Error as StdError;
use std::time::Duration as StdDuration;

use super::FetchError;
use crate::constants::{DEFAULT_RETRIES, DEFAULT_RETRY_DELAY_MS};
use crate::time::TimeSource;

/// How many times to try and how long to pause in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included. Zero behaves like one.
    pub attempts: u32,
    /// Pause after each failed attempt that will be followed by another.
    pub delay: StdDuration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay_ms: u64) -> Self {
        Self {
            attempts,
            delay: StdDuration::from_millis(delay_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES, DEFAULT_RETRY_DELAY_MS)
    }
}

/// Render an error followed by its sources, `outer: inner: root`.
fn describe(error: &dyn StdError) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Run `operation` until it succeeds or the policy's attempts are used up.
///
/// The closure receives the 1-based attempt number. Each failure is logged as
/// a warning. After the last failure no sleep happens and the error is
/// wrapped in [`FetchError::Exhausted`].
pub fn retry_with_delay<T, F>(
    policy: &RetryPolicy,
    operation_name: &str,
    time_source: &dyn TimeSource,
    mut operation: F,
) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Result<T, FetchError>,
{
    let max_attempts = policy.attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation(attempt) {
            Ok(value) => {
                if attempt > 1 {
                    log_debug!("{operation_name} succeeded on attempt {attempt}/{max_attempts}");
                }
                return Ok(value);
            }
            Err(e) if attempt < max_attempts => {
                log_warning!(
                    "Attempt {attempt}/{max_attempts} for {operation_name} failed: {}. Retrying in {}ms",
                    describe(&e),
                    policy.delay.as_millis()
                );
                time_source.sleep(policy.delay);
                attempt += 1;
            }
            Err(e) => {
                log_warning!(
                    "Attempt {attempt}/{max_attempts} for {operation_name} failed: {}",
                    describe(&e)
                );
                return Err(FetchError::Exhausted {
                    attempts: attempt,
                    last: Box::new(e),
                });
            }
        }
    }
}

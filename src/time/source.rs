//! Time source abstraction for the current instant and for sleeping.
//!
//! The pipeline never calls `Utc::now()` or `thread::sleep` directly. It asks
//! a [`TimeSource`], which lets `--at` classify an arbitrary instant and lets
//! tests observe retry delays without waiting for them.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::time::Duration as StdDuration;

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;

    /// Sleep for the specified duration (or pretend to)
    fn sleep(&self, duration: StdDuration);
}

/// Real system clock and real blocking sleep.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }
}

/// A frozen clock used by `--at` and by tests.
///
/// Sleeps are recorded, so callers can check how long they would have waited.
/// They return immediately unless [`FixedTimeSource::with_real_sleep`] was
/// used.
pub struct FixedTimeSource {
    instant: DateTime<Utc>,
    sleeps: Mutex<Vec<StdDuration>>,
    real_sleep: bool,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            sleeps: Mutex::new(Vec::new()),
            real_sleep: false,
        }
    }

    /// Keep the clock frozen but actually block in `sleep`.
    pub fn with_real_sleep(mut self) -> Self {
        self.real_sleep = true;
        self
    }

    /// Durations passed to `sleep`, in call order.
    pub fn recorded_sleeps(&self) -> Vec<StdDuration> {
        self.sleeps
            .lock()
            .map(|sleeps| sleeps.clone())
            .unwrap_or_default()
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn sleep(&self, duration: StdDuration) {
        if let Ok(mut sleeps) = self.sleeps.lock() {
            sleeps.push(duration);
        }
        if self.real_sleep {
            std::thread::sleep(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_source_never_moves() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let source = FixedTimeSource::new(instant);
        source.sleep(StdDuration::from_secs(3600));
        assert_eq!(source.now(), instant);
    }

    #[test]
    fn test_fixed_source_records_sleeps() {
        let source = FixedTimeSource::new(Utc::now());
        source.sleep(StdDuration::from_millis(500));
        source.sleep(StdDuration::from_millis(250));
        assert_eq!(
            source.recorded_sleeps(),
            vec![StdDuration::from_millis(500), StdDuration::from_millis(250)]
        );
    }

    #[test]
    fn test_real_sleep_blocks() {
        let source = FixedTimeSource::new(Utc::now()).with_real_sleep();
        let started = std::time::Instant::now();
        source.sleep(StdDuration::from_millis(20));
        assert!(started.elapsed() >= StdDuration::from_millis(20));
        assert_eq!(source.recorded_sleeps().len(), 1);
    }

    #[test]
    fn test_real_source_is_close_to_system_clock() {
        let before = Utc::now();
        let now = RealTimeSource.now();
        assert!(now >= before);
    }
}

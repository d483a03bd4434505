//! Pipeline coordinator: coordinate in, wallpaper filename out.
//!
//! `Sunpaper` ties the pieces together:
//! - sun times lookup and timezone lookup, both through the retrying fetcher
//! - conversion of the four reference instants and "now" into local time
//! - classification of "now" into a [`DayPeriod`]
//!
//! The transport and the clock are passed in, so the whole pipeline runs
//! against canned responses and a frozen clock in tests.
//!
//! # Examples
//!
//! ```no_run
//! use sunpaper::Sunpaper;
//! use sunpaper::fetch::HttpFetcher;
//! use sunpaper::geo::Coordinate;
//! use sunpaper::time::RealTimeSource;
//!
//! # fn main() -> anyhow::Result<()> {
//! let coordinate = Coordinate::parse("40.7128", "-74.0060")?;
//! let fetcher = HttpFetcher::new()?;
//! let selection = Sunpaper::new(coordinate).run(&fetcher, &RealTimeSource)?;
//! println!("{}", selection.wallpaper());
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use chrono::DateTime;
use chrono_tz::Tz;

use crate::{
    config::Config,
    fetch::{Fetcher, RetryingFetcher},
    geo::{Coordinate, SunTimes, resolve_sun_times, resolve_timezone},
    period::{DayPeriod, LocalSunTimes, classify},
    time::{TimeSource, parse_timezone, to_local_instant, to_local_time},
};

/// Outcome of one run, with everything that led to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub period: DayPeriod,
    pub timezone: Tz,
    pub now: DateTime<Tz>,
    pub sun_times: LocalSunTimes<Tz>,
}

impl Selection {
    /// Filename to print, possibly empty.
    pub fn wallpaper(&self) -> &'static str {
        self.period.wallpaper()
    }
}

/// Builder for a single wallpaper selection.
pub struct Sunpaper {
    coordinate: Coordinate,
    config: Config,
}

impl Sunpaper {
    /// Create a runner with the default configuration
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            config: Config::default(),
        }
    }

    /// Use endpoints and retry policy from `config`
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Look everything up and classify the time source's current instant.
    pub fn run(&self, fetcher: &dyn Fetcher, time_source: &dyn TimeSource) -> Result<Selection> {
        let retrying = RetryingFetcher::new(fetcher, self.config.retry_policy(), time_source);

        log_debug!("Looking up sun times for {}", self.coordinate);
        let sun_times = resolve_sun_times(
            &retrying,
            self.config.sun_times_endpoint(),
            &self.coordinate,
        )
        .context("Failed to look up sun times")?;

        log_debug!("Looking up timezone for {}", self.coordinate);
        let timezone_name = resolve_timezone(
            &retrying,
            self.config.timezone_endpoint(),
            &self.coordinate,
        )
        .context("Failed to look up timezone")?;

        let timezone = parse_timezone(&timezone_name)?;
        let local = localize(&sun_times, timezone)?;
        let now = to_local_instant(time_source.now(), timezone);
        let period = classify(&now, &local);

        log_sun_times(timezone, &now, &local, period);

        Ok(Selection {
            period,
            timezone,
            now,
            sun_times: local,
        })
    }
}

/// Convert all four reference instants into `tz`.
pub fn localize(sun_times: &SunTimes, tz: Tz) -> Result<LocalSunTimes<Tz>> {
    let convert = |timestamp: &str, name: &str| {
        to_local_time(timestamp, tz).with_context(|| format!("Failed to convert {name} time"))
    };

    Ok(LocalSunTimes {
        sunrise: convert(&sun_times.sunrise, "sunrise")?,
        sunset: convert(&sun_times.sunset, "sunset")?,
        solar_noon: convert(&sun_times.solar_noon, "solar noon")?,
        civil_twilight_end: convert(&sun_times.civil_twilight_end, "civil twilight end")?,
    })
}

/// Undetermined is reachable with well-ordered times too, at exact solar noon.
const NO_MATCH_WARNING: &str =
    "No period rule matched (exact solar noon or unordered reference times)";

fn log_sun_times(tz: Tz, now: &DateTime<Tz>, times: &LocalSunTimes<Tz>, period: DayPeriod) {
    if !crate::logger::Log::is_debug() {
        return;
    }

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";
    log_block_start!("Local times in {}:", tz.name());
    log_indented!("Sunrise:            {}", times.sunrise.format(FORMAT));
    log_indented!("Solar noon:         {}", times.solar_noon.format(FORMAT));
    log_indented!("Sunset:             {}", times.sunset.format(FORMAT));
    log_indented!("Civil twilight end: {}", times.civil_twilight_end.format(FORMAT));
    log_indented!("Now:                {}", now.format(FORMAT));
    log_block_start!("Period: {period}");
    if period == DayPeriod::Undetermined {
        log_warning!("{NO_MATCH_WARNING}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, MockFetcher};
    use crate::logger::Log;
    use crate::time::FixedTimeSource;
    use chrono::{TimeZone, Timelike, Utc};
    use serial_test::serial;

    const LONDON_SUN_BODY: &str = r#"{"results":{
        "sunrise":"2024-06-21T03:43:09+00:00",
        "sunset":"2024-06-21T20:21:26+00:00",
        "solar_noon":"2024-06-21T13:02:17+00:00",
        "civil_twilight_end":"2024-06-21T21:07:45+00:00"
    },"status":"OK"}"#;

    fn london_mock() -> MockFetcher {
        let mut mock = MockFetcher::new();
        mock.expect_get().returning(|url| {
            if url.contains("latitude=") {
                Ok(r#"{"timeZone":"Europe/London"}"#.to_string())
            } else {
                Ok(LONDON_SUN_BODY.to_string())
            }
        });
        mock
    }

    fn london() -> Coordinate {
        Coordinate::parse("51.5074", "-0.1278").unwrap()
    }

    #[test]
    fn test_evening_in_london() {
        let mock = london_mock();
        // 21:30 BST
        let clock = FixedTimeSource::new(Utc.with_ymd_and_hms(2024, 6, 21, 20, 30, 0).unwrap());

        let selection = Sunpaper::new(london()).run(&mock, &clock).unwrap();
        assert_eq!(selection.period, DayPeriod::Evening);
        assert_eq!(selection.wallpaper(), "evening.png");
        assert_eq!(selection.timezone, chrono_tz::Europe::London);
        assert_eq!(selection.now.hour(), 21);
        assert_eq!(selection.sun_times.sunrise.hour(), 4);
    }

    #[test]
    fn test_exact_sunrise() {
        let mock = london_mock();
        let clock = FixedTimeSource::new(Utc.with_ymd_and_hms(2024, 6, 21, 3, 43, 9).unwrap());

        let selection = Sunpaper::new(london()).run(&mock, &clock).unwrap();
        assert_eq!(selection.wallpaper(), "sunrise.png");
    }

    #[test]
    fn test_unknown_timezone_name() {
        let mut mock = MockFetcher::new();
        mock.expect_get().returning(|url| {
            if url.contains("latitude=") {
                Ok(r#"{"timeZone":"Atlantis/Central"}"#.to_string())
            } else {
                Ok(LONDON_SUN_BODY.to_string())
            }
        });
        let clock = FixedTimeSource::new(Utc::now());

        let err = Sunpaper::new(london()).run(&mock, &clock).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown timezone 'Atlantis/Central'"));
    }

    #[test]
    #[serial]
    fn test_upstream_failure_has_context() {
        Log::set_enabled(false);
        let mut mock = MockFetcher::new();
        mock.expect_get().times(2).returning(|url| {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 500,
            })
        });
        let clock = FixedTimeSource::new(Utc::now());
        let config = Config {
            retries: Some(2),
            ..Config::default()
        };

        let err = Sunpaper::new(london())
            .with_config(config)
            .run(&mock, &clock)
            .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.starts_with("Failed to look up sun times"));
        assert!(chain.contains("Gave up after 2 attempts"));
        assert!(chain.contains("answered with HTTP 500"));
    }

    #[test]
    fn test_exact_solar_noon_selects_nothing() {
        let mock = london_mock();
        let clock = FixedTimeSource::new(Utc.with_ymd_and_hms(2024, 6, 21, 13, 2, 17).unwrap());

        let selection = Sunpaper::new(london()).run(&mock, &clock).unwrap();

        assert_eq!(selection.period, DayPeriod::Undetermined);
        assert_eq!(selection.wallpaper(), "");
        assert!(selection.sun_times.sunrise < selection.sun_times.solar_noon);
    }

    #[test]
    fn test_no_match_warning_does_not_blame_ordering_alone() {
        assert!(NO_MATCH_WARNING.contains("solar noon"));
        assert!(!NO_MATCH_WARNING.contains("are out of order"));
    }

    #[test]
    fn test_localize_reports_bad_field() {
        let sun_times = SunTimes {
            sunrise: "2024-06-21T03:43:09+00:00".to_string(),
            sunset: "garbage".to_string(),
            solar_noon: "2024-06-21T13:02:17+00:00".to_string(),
            civil_twilight_end: "2024-06-21T21:07:45+00:00".to_string(),
        };
        let err = localize(&sun_times, chrono_tz::UTC).unwrap_err();
        assert_eq!(err.to_string(), "Failed to convert sunset time");
    }
}

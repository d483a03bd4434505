//! Time-of-day classification.
//!
//! A day is cut into periods by four reference instants. The rules are
//! evaluated in a fixed order and the first match wins:
//!
//! 1. exactly at sunrise → [`DayPeriod::Sunrise`]
//! 2. exactly at sunset → [`DayPeriod::Sunset`]
//! 3. strictly between sunrise and solar noon → [`DayPeriod::Morning`]
//! 4. strictly between solar noon and sunset → [`DayPeriod::Noon`]
//! 5. after sunset, up to and including civil twilight end → [`DayPeriod::Evening`]
//! 6. after civil twilight end or before sunrise → [`DayPeriod::Night`]
//! 7. anything else → [`DayPeriod::Undetermined`]
//!
//! The last rule only fires when the reference instants are out of order, or
//! when the current instant is exactly solar noon. The reference instants are
//! never reordered or validated here.

use chrono::{DateTime, TimeZone};
use std::fmt;

use crate::constants::*;

/// The part of the day an instant falls into, one per wallpaper.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DayPeriod {
    Sunrise,
    Sunset,
    Morning,
    Noon,
    Evening,
    Night,
    /// No rule matched; maps to an empty filename.
    Undetermined,
}

impl DayPeriod {
    /// Filename of the wallpaper for this period.
    pub fn wallpaper(&self) -> &'static str {
        match self {
            Self::Sunrise => WALLPAPER_SUNRISE,
            Self::Sunset => WALLPAPER_SUNSET,
            Self::Morning => WALLPAPER_MORNING,
            Self::Noon => WALLPAPER_NOON,
            Self::Evening => WALLPAPER_EVENING,
            Self::Night => WALLPAPER_NIGHT,
            Self::Undetermined => "",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::Morning => "Morning",
            Self::Noon => "Noon",
            Self::Evening => "Evening",
            Self::Night => "Night",
            Self::Undetermined => "Undetermined",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The four reference instants, already in the location's timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSunTimes<Tz: TimeZone> {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
    pub solar_noon: DateTime<Tz>,
    pub civil_twilight_end: DateTime<Tz>,
}

/// Decide which part of the day `current` falls into.
pub fn classify<Tz: TimeZone>(current: &DateTime<Tz>, times: &LocalSunTimes<Tz>) -> DayPeriod {
    let LocalSunTimes {
        sunrise,
        sunset,
        solar_noon,
        civil_twilight_end,
    } = times;

    if current == sunrise {
        DayPeriod::Sunrise
    } else if current == sunset {
        DayPeriod::Sunset
    } else if sunrise < current && current < solar_noon {
        DayPeriod::Morning
    } else if solar_noon < current && current < sunset {
        DayPeriod::Noon
    } else if sunset < current && current <= civil_twilight_end {
        DayPeriod::Evening
    } else if current > civil_twilight_end || current < sunrise {
        DayPeriod::Night
    } else {
        DayPeriod::Undetermined
    }
}

/// Wallpaper filename for `current`, or an empty string if no rule matched.
pub fn select_wallpaper<Tz: TimeZone>(
    current: &DateTime<Tz>,
    times: &LocalSunTimes<Tz>,
) -> &'static str {
    classify(current, times).wallpaper()
}

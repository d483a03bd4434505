use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use sunpaper::DayPeriod;
use sunpaper::geo::{CoordinateError, CoordinateKind, validate_coordinate};
use sunpaper::period::{LocalSunTimes, classify, select_wallpaper};

/// Midnight UTC on an arbitrary reference day
fn day_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
}

/// Four strictly increasing offsets (seconds after midnight) for
/// sunrise < solar noon < sunset < civil twilight end
fn ordered_day_strategy() -> impl Strategy<Value = LocalSunTimes<Utc>> {
    (1i64..40_000, 1i64..20_000, 1i64..20_000, 1i64..5_000).prop_map(
        |(sunrise, to_noon, to_sunset, to_twilight)| {
            let start = day_start();
            let sunrise = start + Duration::seconds(sunrise);
            let solar_noon = sunrise + Duration::seconds(to_noon);
            let sunset = solar_noon + Duration::seconds(to_sunset);
            let civil_twilight_end = sunset + Duration::seconds(to_twilight);
            LocalSunTimes {
                sunrise,
                sunset,
                solar_noon,
                civil_twilight_end,
            }
        },
    )
}

/// Coordinate validation properties
#[cfg(test)]
mod validation_tests {
    use super::*;

    proptest! {
        /// In-range latitudes come back exactly as written
        #[test]
        fn test_in_range_latitude_roundtrips(lat in -90.0f64..=90.0) {
            let text = lat.to_string();
            prop_assert_eq!(validate_coordinate(&text, CoordinateKind::Latitude), Ok(lat));
        }

        /// In-range longitudes come back exactly as written
        #[test]
        fn test_in_range_longitude_roundtrips(lon in -180.0f64..=180.0) {
            let text = lon.to_string();
            prop_assert_eq!(validate_coordinate(&text, CoordinateKind::Longitude), Ok(lon));
        }

        /// Anything beyond the poles is out of range
        #[test]
        fn test_out_of_range_latitude(
            magnitude in 90.000_001f64..1.0e9,
            negative in any::<bool>()
        ) {
            let lat = if negative { -magnitude } else { magnitude };
            let is_out_of_range = matches!(
                validate_coordinate(&lat.to_string(), CoordinateKind::Latitude),
                Err(CoordinateError::OutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
        }

        /// Strings made only of letters are never numbers
        #[test]
        fn test_alphabetic_input_is_invalid(input in "[a-hj-mo-z]{1,12}") {
            let is_invalid = matches!(
                validate_coordinate(&input, CoordinateKind::Latitude),
                Err(CoordinateError::InvalidNumber { .. })
            );
            prop_assert!(is_invalid);
        }
    }
}

/// Classifier properties over well-ordered days
#[cfg(test)]
mod classifier_tests {
    use super::*;

    proptest! {
        /// With ordered reference times only exact solar noon is undetermined
        #[test]
        fn test_ordered_day_always_classifies(
            times in ordered_day_strategy(),
            offset in 0i64..86_400
        ) {
            let now = day_start() + Duration::seconds(offset);
            let period = classify(&now, &times);
            if now == times.solar_noon {
                prop_assert_eq!(period, DayPeriod::Undetermined);
            } else {
                prop_assert_ne!(period, DayPeriod::Undetermined);
            }
        }

        /// Before sunrise is always night
        #[test]
        fn test_before_sunrise_is_night(
            times in ordered_day_strategy(),
            before in 1i64..100_000
        ) {
            let now = times.sunrise - Duration::seconds(before);
            prop_assert_eq!(select_wallpaper(&now, &times), "night.png");
        }

        /// The evening window includes its upper bound
        #[test]
        fn test_twilight_end_is_evening(times in ordered_day_strategy()) {
            prop_assert_eq!(
                select_wallpaper(&times.civil_twilight_end, &times),
                "evening.png"
            );
        }

        /// Pure function: same inputs, same output
        #[test]
        fn test_classification_is_deterministic(
            times in ordered_day_strategy(),
            offset in 0i64..86_400
        ) {
            let now = day_start() + Duration::seconds(offset);
            prop_assert_eq!(classify(&now, &times), classify(&now, &times));
        }

        /// Moving every instant into another zone never changes the answer
        #[test]
        fn test_timezone_does_not_change_result(
            times in ordered_day_strategy(),
            offset in 0i64..86_400
        ) {
            let tz = chrono_tz::America::Los_Angeles;
            let now = day_start() + Duration::seconds(offset);
            let local = LocalSunTimes {
                sunrise: times.sunrise.with_timezone(&tz),
                sunset: times.sunset.with_timezone(&tz),
                solar_noon: times.solar_noon.with_timezone(&tz),
                civil_twilight_end: times.civil_twilight_end.with_timezone(&tz),
            };
            prop_assert_eq!(
                classify(&now, &times),
                classify(&now.with_timezone(&tz), &local)
            );
        }
    }
}

//! Parsing and range checking of user-supplied coordinates.

use std::fmt;
use thiserror::Error;

use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};

/// Which half of a coordinate pair is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    Latitude,
    Longitude,
}

impl CoordinateKind {
    /// Inclusive bounds in degrees.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Latitude => LATITUDE_RANGE,
            Self::Longitude => LONGITUDE_RANGE,
        }
    }
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid {kind}: '{input}' is not a number")]
    InvalidNumber { kind: CoordinateKind, input: String },

    #[error("Invalid {kind}: {value} is outside {min} to {max} degrees")]
    OutOfRange {
        kind: CoordinateKind,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Parse a single coordinate component and check it against its range.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are rejected as
/// not being numbers even though Rust's float parser accepts them.
pub fn validate_coordinate(input: &str, kind: CoordinateKind) -> Result<f64, CoordinateError> {
    let value: f64 = input
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| CoordinateError::InvalidNumber {
            kind,
            input: input.to_string(),
        })?;

    let (min, max) = kind.range();
    if !(min..=max).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            kind,
            value,
            min,
            max,
        });
    }

    Ok(value)
}

/// A validated latitude/longitude pair.
///
/// Only [`Coordinate::parse`] constructs one. The trimmed input text is kept
/// next to the parsed values and is what the upstream services receive.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    latitude_input: String,
    longitude_input: String,
}

impl Coordinate {
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, CoordinateError> {
        Ok(Self {
            latitude: validate_coordinate(latitude, CoordinateKind::Latitude)?,
            longitude: validate_coordinate(longitude, CoordinateKind::Longitude)?,
            latitude_input: latitude.trim().to_string(),
            longitude_input: longitude.trim().to_string(),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Both values exactly as the user typed them, minus surrounding
    /// whitespace. Callers must percent-encode them (a leading `+` is legal).
    pub fn query_values(&self) -> (&str, &str) {
        (&self.latitude_input, &self.longitude_input)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

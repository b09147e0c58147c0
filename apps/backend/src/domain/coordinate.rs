//! Validated latitude/longitude pairs.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A point on the globe in decimal degrees.
///
/// Construction goes through [`Coordinate::new`] (or deserialization, which
/// applies the same checks), so every value in circulation is in range.
/// Serialized as `{"lat": .., "lng": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "lng")]
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(DomainError::invalid_coordinate(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(DomainError::invalid_coordinate(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

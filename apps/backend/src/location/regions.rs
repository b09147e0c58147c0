use rand::Rng;

use crate::domain::Coordinate;
use crate::errors::domain::DomainError;
use crate::errors::location::LocationError;

/// Latitude/longitude box to draw candidate targets from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRegion {
    pub name: &'static str,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl WorldRegion {
    /// Uniform point inside the box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coordinate, DomainError> {
        let lat = self.min_lat + rng.random::<f64>() * (self.max_lat - self.min_lat);
        let lng = self.min_lng + rng.random::<f64>() * (self.max_lng - self.min_lng);
        Coordinate::new(lat, lng)
    }

    /// Both corners must be valid coordinates and each range non-empty.
    pub fn validate(&self) -> Result<(), LocationError> {
        let invalid = |detail: String| LocationError::InvalidRegion {
            name: self.name.to_string(),
            detail,
        };
        Coordinate::new(self.min_lat, self.min_lng).map_err(|e| invalid(e.to_string()))?;
        Coordinate::new(self.max_lat, self.max_lng).map_err(|e| invalid(e.to_string()))?;
        if self.min_lat > self.max_lat {
            return Err(invalid(format!(
                "min_lat {} above max_lat {}",
                self.min_lat, self.max_lat
            )));
        }
        if self.min_lng > self.max_lng {
            return Err(invalid(format!(
                "min_lng {} above max_lng {}",
                self.min_lng, self.max_lng
            )));
        }
        Ok(())
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&c.latitude())
            && (self.min_lng..=self.max_lng).contains(&c.longitude())
    }
}

/// Regions with dense street-level coverage.
pub const WORLD_REGIONS: [WorldRegion; 7] = [
    WorldRegion {
        name: "Europe",
        min_lat: 35.0,
        max_lat: 60.0,
        min_lng: -10.0,
        max_lng: 28.0,
    },
    WorldRegion {
        name: "USA",
        min_lat: 25.0,
        max_lat: 50.0,
        min_lng: -130.0,
        max_lng: -70.0,
    },
    WorldRegion {
        name: "New Zealand",
        min_lat: -45.0,
        max_lat: -20.0,
        min_lng: 145.0,
        max_lng: 180.0,
    },
    WorldRegion {
        name: "Australia",
        min_lat: -35.0,
        max_lat: -10.0,
        min_lng: 110.0,
        max_lng: 155.0,
    },
    WorldRegion {
        name: "Japan",
        min_lat: 20.0,
        max_lat: 45.0,
        min_lng: 120.0,
        max_lng: 145.0,
    },
    WorldRegion {
        name: "South Korea",
        min_lat: 35.0,
        max_lat: 40.0,
        min_lng: 125.0,
        max_lng: 130.0,
    },
    WorldRegion {
        name: "Brazil",
        min_lat: -35.0,
        max_lat: 5.0,
        min_lng: -75.0,
        max_lng: -35.0,
    },
];

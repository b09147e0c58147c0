use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::probe::{PanoramaProbe, SEARCH_RADIUS_M};
use super::regions::{WorldRegion, WORLD_REGIONS};
use crate::domain::Coordinate;
use crate::errors::location::LocationError;

/// Default cap on probe lookups per target.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Picks round targets that have panorama coverage.
///
/// Each attempt draws a region uniformly, a point uniformly inside it, and
/// asks the probe for the nearest panorama. A hit returns the panorama's own
/// coordinate; misses are retried up to `max_attempts` times.
pub struct LocationProvider<P> {
    probe: P,
    regions: Vec<WorldRegion>,
    max_attempts: u32,
    rng: StdRng,
}

impl<P: PanoramaProbe> LocationProvider<P> {
    /// `seed` makes target selection reproducible; `None` seeds from the OS.
    pub fn new(probe: P, max_attempts: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            probe,
            regions: WORLD_REGIONS.to_vec(),
            max_attempts: max_attempts.max(1),
            rng,
        }
    }

    /// Replace the default region table. Every region must be a valid box.
    pub fn with_regions(mut self, regions: Vec<WorldRegion>) -> Result<Self, LocationError> {
        if regions.is_empty() {
            return Err(LocationError::NoRegions);
        }
        for region in &regions {
            region.validate()?;
        }
        self.regions = regions;
        Ok(self)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Find the next covered target.
    pub fn next_target(&mut self) -> Result<Coordinate, LocationError> {
        for attempt in 1..=self.max_attempts {
            let region = self.regions[self.rng.random_range(0..self.regions.len())];
            let candidate = region.sample(&mut self.rng)?;

            match self.probe.nearest_panorama(candidate, SEARCH_RADIUS_M) {
                Ok(Some(found)) => {
                    info!(
                        region = region.name,
                        attempt,
                        lat = found.latitude(),
                        lng = found.longitude(),
                        "target acquired"
                    );
                    return Ok(found);
                }
                Ok(None) => {
                    debug!(region = region.name, attempt, "no panorama nearby, retrying");
                }
                Err(e) => {
                    debug!(region = region.name, attempt, error = %e, "probe failed, retrying");
                }
            }
        }

        warn!(attempts = self.max_attempts, "gave up looking for a covered target");
        Err(LocationError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

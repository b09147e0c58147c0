//! Panorama coverage lookups.

use crate::domain::Coordinate;
use crate::errors::location::ProbeError;

/// Search radius used for every lookup, in metres.
pub const SEARCH_RADIUS_M: u32 = 50_000;

/// Finds the closest panorama to a point.
///
/// `Ok(None)` means no coverage within `radius_m`; `Err` is a failed lookup.
/// The provider treats both as a miss and tries another point.
pub trait PanoramaProbe {
    fn nearest_panorama(
        &self,
        near: Coordinate,
        radius_m: u32,
    ) -> Result<Option<Coordinate>, ProbeError>;
}

impl<P: PanoramaProbe + ?Sized> PanoramaProbe for &P {
    fn nearest_panorama(
        &self,
        near: Coordinate,
        radius_m: u32,
    ) -> Result<Option<Coordinate>, ProbeError> {
        (**self).nearest_panorama(near, radius_m)
    }
}

/// Every point has a panorama exactly where it was asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysCovered;

impl PanoramaProbe for AlwaysCovered {
    fn nearest_panorama(
        &self,
        near: Coordinate,
        _radius_m: u32,
    ) -> Result<Option<Coordinate>, ProbeError> {
        Ok(Some(near))
    }
}

/// Deterministic patchy coverage over 1°x1° cells.
///
/// Each cell is covered or not depending on a hash of its indices and the
/// salt, so roughly `ratio` of all cells are covered.
#[derive(Debug, Clone, Copy)]
pub struct CoverageGrid {
    ratio: f64,
    salt: u64,
}

impl CoverageGrid {
    pub fn new(ratio: f64, salt: u64) -> Self {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        Self { ratio, salt }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn is_covered(&self, c: Coordinate) -> bool {
        let lat_cell = c.latitude().floor() as i64;
        let lng_cell = c.longitude().floor() as i64;
        let key = (lat_cell as u64)
            .wrapping_mul(0x1_0000)
            .wrapping_add(lng_cell as u64)
            .wrapping_add(self.salt);
        let bucket = splitmix64(key) % 10_000;
        (bucket as f64) < self.ratio * 10_000.0
    }
}

impl PanoramaProbe for CoverageGrid {
    fn nearest_panorama(
        &self,
        near: Coordinate,
        _radius_m: u32,
    ) -> Result<Option<Coordinate>, ProbeError> {
        Ok(self.is_covered(near).then_some(near))
    }
}

/// SplitMix64 finalizer: well-distributed 64-bit hash.
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

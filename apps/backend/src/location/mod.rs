//! Target acquisition: sample a well-covered region, confirm panorama coverage.

pub mod probe;
pub mod provider;
pub mod regions;

pub use probe::{AlwaysCovered, CoverageGrid, PanoramaProbe, SEARCH_RADIUS_M};
pub use provider::{LocationProvider, DEFAULT_MAX_ATTEMPTS};
pub use regions::{WorldRegion, WORLD_REGIONS};

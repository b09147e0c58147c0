//! Errors raised while acquiring a round target.

use thiserror::Error;

use super::domain::DomainError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("no panorama found after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error("location provider needs at least one region")]
    NoRegions,
    #[error("region {name} is not a valid lat/lng box: {detail}")]
    InvalidRegion { name: String, detail: String },
    /// A sampled candidate fell outside the coordinate ranges.
    #[error("sampled an invalid coordinate: {0}")]
    Domain(#[from] DomainError),
}

/// Failure reported by a panorama probe for a single lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("panorama probe failed: {0}")]
pub struct ProbeError(pub String);

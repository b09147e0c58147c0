#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Street-view guessing game: pure round/scoring engine plus the score
//! history store and target provider it works with.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod location;
pub mod repos;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::{InMemoryScoreStore, JsonFileScoreStore};
pub use config::GameConfig;
pub use domain::{Coordinate, GameSession, Round, RoundResult};
pub use error::AppError;
pub use errors::{DomainError, LocationError, StateKind, StoreError};
pub use location::{LocationProvider, PanoramaProbe};
pub use repos::{HistoryRecord, ScoreStore};
pub use services::{GameFlow, RoundOutcome};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

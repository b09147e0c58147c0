//! Error handling for the guessing game.

pub mod config;
pub mod domain;
pub mod location;
pub mod store;

pub use config::ConfigError;
pub use domain::{DomainError, StateKind};
pub use location::{LocationError, ProbeError};
pub use store::StoreError;

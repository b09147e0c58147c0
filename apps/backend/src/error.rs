use thiserror::Error;

use crate::errors::{ConfigError, DomainError, LocationError, StateKind, StoreError};

/// Top-level error for the game flow and binaries.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Stable error code for logs and CLI output.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::InvalidCoordinate(_)) => "INVALID_COORDINATE",
            AppError::Domain(DomainError::InvalidState(..)) => "INVALID_STATE",
            AppError::Store(StoreError::Corrupt { .. }) => "STORE_CORRUPT",
            AppError::Store(StoreError::Lock { .. }) => "STORE_LOCKED",
            AppError::Store(_) => "STORE_ERROR",
            AppError::Location(LocationError::Exhausted { .. }) => "LOCATION_EXHAUSTED",
            AppError::Location(_) => "LOCATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// The session state kind, when this wraps an `InvalidState` domain error.
    pub fn state_kind(&self) -> Option<StateKind> {
        match self {
            AppError::Domain(e) => e.state_kind(),
            _ => None,
        }
    }
}

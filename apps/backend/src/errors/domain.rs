//! Domain-level error type used by the round/scoring engine.
//!
//! This error type is storage- and I/O-agnostic. Outer layers wrap it in
//! `crate::error::AppError` through the provided `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which session precondition a transition violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    /// A guess was confirmed on a round that is already scored.
    AlreadyScored,
    /// The session tried to advance before the current round was scored.
    RoundNotScored,
    /// The session tried to advance past its final round.
    FinalRound,
    /// A session was requested with zero rounds.
    NoRounds,
    /// A round operation was issued with no game in progress.
    NoActiveGame,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Latitude or longitude outside its valid range (or NaN)
    InvalidCoordinate(String),
    /// Operation not allowed in the current session state
    InvalidState(StateKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidCoordinate(d) => write!(f, "invalid coordinate: {d}"),
            DomainError::InvalidState(kind, d) => write!(f, "invalid state {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_coordinate(detail: impl Into<String>) -> Self {
        Self::InvalidCoordinate(detail.into())
    }
    pub fn invalid_state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::InvalidState(kind, detail.into())
    }

    /// The state kind, when this is an `InvalidState` error.
    pub fn state_kind(&self) -> Option<StateKind> {
        match self {
            DomainError::InvalidState(kind, _) => Some(*kind),
            DomainError::InvalidCoordinate(_) => None,
        }
    }
}

//! Score history: record type, store seam and leaderboard helper.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::errors::store::StoreError;

/// Leaderboard length shown on the history screen.
pub const DEFAULT_TOP_SCORES: usize = 10;

/// One finished game, as persisted.
///
/// The timestamp is stored under `date`, the field name the history file has
/// always used. Whatever string is on disk is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub score: u32,
    #[serde(rename = "date")]
    pub timestamp: String,
}

impl HistoryRecord {
    pub fn new(score: u32, timestamp: impl Into<String>) -> Self {
        Self {
            score,
            timestamp: timestamp.into(),
        }
    }

    /// Stamp `score` with an RFC 3339 timestamp for `at`.
    pub fn at(score: u32, at: OffsetDateTime) -> Result<Self, StoreError> {
        Ok(Self::new(score, at.format(&Rfc3339)?))
    }

    /// Stamp `score` with the current UTC time.
    pub fn now(score: u32) -> Result<Self, StoreError> {
        Self::at(score, OffsetDateTime::now_utc())
    }

    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        if self.timestamp.trim().is_empty() {
            return Err(StoreError::InvalidRecord {
                detail: "timestamp must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Append-only store of finished-game scores.
pub trait ScoreStore {
    /// Durably append one record.
    fn append(&self, record: HistoryRecord) -> Result<(), StoreError>;

    /// Every record in insertion order.
    fn history(&self) -> Result<Vec<HistoryRecord>, StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &S {
    fn append(&self, record: HistoryRecord) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn history(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        (**self).history()
    }
}

/// Best `limit` records, highest score first. Ties keep insertion order.
pub fn top_scores(history: &[HistoryRecord], limit: usize) -> Vec<HistoryRecord> {
    let mut sorted = history.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(limit);
    sorted
}

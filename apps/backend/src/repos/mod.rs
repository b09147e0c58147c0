//! Repository seams for persisted game data.

pub mod scores;

pub use scores::{top_scores, HistoryRecord, ScoreStore, DEFAULT_TOP_SCORES};

//! Concrete score store implementations.

pub mod scores_json;
pub mod scores_memory;

pub use scores_json::JsonFileScoreStore;
pub use scores_memory::InMemoryScoreStore;

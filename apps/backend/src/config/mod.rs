pub mod game;

pub use game::{GameConfig, DEFAULT_DATA_FILE};

//! Throwaway directories for score-history tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding one history file path. Removed on drop.
pub struct ScratchHistory {
    dir: TempDir,
    file: PathBuf,
}

impl ScratchHistory {
    /// `<tmp>/data/games.json`, mirroring the default layout. The file itself
    /// is not created; opening a store does that.
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("guessr-").tempdir()?;
        let file = dir.path().join("data").join("games.json");
        Ok(Self { dir, file })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

//! JSON-file score store.
//!
//! The whole history lives in one pretty-printed JSON array. Appends hold an
//! exclusive lock file for the read-modify-write and replace the file through
//! a temp file + rename, so readers never observe a half-written array.

mod lock;

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

pub use lock::lock_path_for;

use crate::errors::store::StoreError;
use crate::repos::scores::{HistoryRecord, ScoreStore};

/// How long an append waits for another writer before giving up.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct JsonFileScoreStore {
    path: PathBuf,
    lock_path: PathBuf,
    lock_timeout: Duration,
}

impl JsonFileScoreStore {
    /// Open the store at `path`, creating the parent directory and an empty
    /// `[]` history file if they do not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        if !path.exists() {
            fs::write(&path, "[]").map_err(|e| StoreError::io(&path, e))?;
            info!(path = %path.display(), "created empty score history");
        }

        Ok(Self {
            lock_path: lock_path_for(&path),
            path,
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        })
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "score history missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            detail: e.to_string(),
        })
    }

    fn write_all(&self, records: &[HistoryRecord]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(records).map_err(StoreError::Encode)?;

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        // Contents must be on disk before the rename publishes them.
        let mut file = File::create(&tmp).map_err(|e| StoreError::io(&tmp, e))?;
        file.write_all(body.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| StoreError::io(&tmp, e))?;
        drop(file);

        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}

impl ScoreStore for JsonFileScoreStore {
    fn append(&self, record: HistoryRecord) -> Result<(), StoreError> {
        record.validate()?;

        let _guard = lock::acquire(&self.lock_path, self.lock_timeout)?;
        // Corrupt history is an error, never silently replaced.
        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)?;

        info!(
            path = %self.path.display(),
            score = records.last().map(|r| r.score),
            games = records.len(),
            "score appended"
        );
        Ok(())
    }

    fn history(&self) -> Result<Vec<HistoryRecord>, StoreError> {
        self.read_all()
    }
}

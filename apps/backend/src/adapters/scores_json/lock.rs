//! Cross-process exclusive lock guarding read-modify-write of the history file.
//!
//! Uses an OS-level exclusive lock on `<file>.lock`. Non-blocking
//! `try_lock_exclusive()` is polled with a capped backoff until the timeout.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use fs4::fs_std::FileExt;
use tracing::debug;

use crate::errors::store::StoreError;

const INITIAL_BACKOFF: Duration = Duration::from_millis(5);
const MAX_BACKOFF: Duration = Duration::from_millis(200);

/// Held lock; released when dropped (closing the file drops the OS lock).
#[derive(Debug)]
pub struct HistoryLock {
    _file: File,
    path: PathBuf,
}

impl HistoryLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for HistoryLock {
    fn drop(&mut self) {
        debug!(lock_path = %self.path.display(), "history lock released");
    }
}

/// Sibling lock path for a history file: `games.json` -> `games.json.lock`.
pub fn lock_path_for(path: &Path) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(".lock");
    PathBuf::from(s)
}

pub fn acquire(lock_path: &Path, timeout: Duration) -> Result<HistoryLock, StoreError> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(lock_path)
        .map_err(|e| StoreError::io(lock_path, e))?;

    let deadline = Instant::now() + timeout;
    let mut backoff = INITIAL_BACKOFF;
    loop {
        // Ok(true) = acquired, Ok(false) = held elsewhere
        match FileExt::try_lock_exclusive(&file) {
            Ok(true) => {
                debug!(lock_path = %lock_path.display(), "history lock acquired");
                return Ok(HistoryLock {
                    _file: file,
                    path: lock_path.to_path_buf(),
                });
            }
            Ok(false) => {}
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
            Err(e) => return Err(StoreError::io(lock_path, e)),
        }

        if Instant::now() >= deadline {
            return Err(StoreError::Lock {
                path: lock_path.to_path_buf(),
            });
        }
        debug!(
            lock_path = %lock_path.display(),
            backoff_ms = backoff.as_millis() as u64,
            "history lock contended"
        );
        thread::sleep(backoff);
        backoff = (backoff * 2).min(MAX_BACKOFF);
    }
}

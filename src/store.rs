//! Persisted collection: load/save of the task list as a flat JSON file.
//!
//! The file holds the full array of task records and is rewritten wholesale
//! on every mutation (a snapshot, not an append log). There is no locking;
//! the file is assumed to be touched by one process at a time.

use std::fs;
use std::io;
use std::path::Path;

use crate::task::Task;

/// Errors from reading or writing the persisted collection.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error reading or writing the backing file.
    Io(String),
    /// The backing file exists but is not a valid task collection.
    Parse(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "store I/O error: {}", msg),
            Self::Parse(msg) => write!(f, "store parse error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Load the full task collection from `path`.
///
/// A missing file is an empty collection; an unreadable or malformed file
/// is an error.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, StoreError> {
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::Io(e.to_string())),
    };

    serde_json::from_str(&content).map_err(|e| StoreError::Parse(e.to_string()))
}

/// Overwrite `path` with the full serialized collection.
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<(), StoreError> {
    let content =
        serde_json::to_string_pretty(tasks).map_err(|e| StoreError::Parse(e.to_string()))?;
    fs::write(&path, content).map_err(|e| StoreError::Io(e.to_string()))
}

//! Durable last-known-good schedule cache
//!
//! A single-slot JSON store: the whole document is overwritten on each
//! save and read back wholesale on fallback. The file is pretty-printed
//! so it stays diffable by hand.

use crate::error::StoreError;
use crate::models::ScheduleDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Disk store holding the last successfully validated schedule document
///
/// Writes are serialized by the reconciliation loop's one-cycle-at-a-time
/// discipline; the store itself does not guard against concurrent writers.
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    /// Create a store backed by `path`.
    ///
    /// The file is not touched until the first [`save`](Self::save).
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the persisted document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably overwrite the persisted document
    pub fn save(&self, document: &ScheduleDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(document).map_err(StoreError::Serialize)?;
        fs::write(&self.path, json)?;
        debug!("Saved schedule to {}", self.path.display());
        Ok(())
    }

    /// Load the persisted document.
    ///
    /// Returns `Ok(None)` when nothing has ever been saved. Content that
    /// no longer parses as a valid schedule is reported as
    /// [`StoreError::Corrupt`]; callers fall back as if the store were
    /// empty but can log the difference.
    pub fn load(&self) -> Result<Option<ScheduleDocument>, StoreError> {
        if !self.path.exists() {
            debug!("Schedule file does not exist: {}", self.path.display());
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let value: serde_json::Value =
            serde_json::from_str(&json).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        let document =
            ScheduleDocument::from_value(&value).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        debug!("Loaded schedule from {}", self.path.display());
        Ok(Some(document))
    }

    /// Whether a document has been persisted
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

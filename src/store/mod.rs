//! Snapshot persistence.
//!
//! The store owns the on-disk snapshot and its single backup slot. Saving
//! rotates the current file into the backup slot and writes the new one:
//! two steps, not atomic. Dying between them leaves only a backup; the next
//! load starts empty and a restore brings the rotated state back. That
//! narrow window is a documented property of the design, as is the
//! single-writer assumption: one invocation of the tool at a time, no
//! locking.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::{Result, VodostajError};
use crate::domain::Snapshot;

/// Appended to the primary path to form the backup slot.
const BACKUP_SUFFIX: &str = ".bup";
/// Bumped when the on-disk document shape changes.
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StateFile {
    version: u32,
    levels: Snapshot,
}

pub struct SnapshotStore {
    path: PathBuf,
    backup_path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut backup = path.clone().into_os_string();
        backup.push(BACKUP_SUFFIX);
        Self {
            path,
            backup_path: PathBuf::from(backup),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Loads the persisted snapshot. A missing file is an empty snapshot;
    /// an existing file that does not decode is a corrupt store, never
    /// silently treated as empty.
    pub fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Ok(Snapshot::new());
        }

        let bytes = fs::read(&self.path)?;
        let state: StateFile =
            serde_json::from_slice(&bytes).map_err(|e| VodostajError::StoreCorrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        if state.version != FORMAT_VERSION {
            return Err(VodostajError::StoreCorrupt {
                path: self.path.clone(),
                reason: format!("unsupported format version {}", state.version),
            });
        }

        Ok(state.levels)
    }

    /// Rotates the current snapshot into the backup slot, then writes the
    /// new one.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if self.path.exists() {
            fs::rename(&self.path, &self.backup_path)?;
        }

        let state = StateFile {
            version: FORMAT_VERSION,
            levels: snapshot.clone(),
        };
        fs::write(&self.path, serde_json::to_vec_pretty(&state)?)?;
        tracing::debug!(path = %self.path.display(), stations = snapshot.len(), "snapshot written");
        Ok(())
    }

    /// Brings the backup slot back as the primary, destroying the current
    /// primary. Callers gate this behind an explicit confirmation. Returns
    /// whether a backup existed. One level of undo only.
    pub fn restore(&self) -> Result<bool> {
        if !self.backup_path.exists() {
            return Ok(false);
        }
        fs::rename(&self.backup_path, &self.path)?;
        Ok(true)
    }
}

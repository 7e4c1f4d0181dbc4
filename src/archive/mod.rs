//! Capture archive.
//!
//! Every live retrieval is stored under a date-stamped name; lexicographic
//! name order is chronological order, which makes offset lookups a plain
//! index into the sorted listing. The archive is append-only and, like the
//! snapshot store, assumes a single writer.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::app::{Result, VodostajError};

const CAPTURE_PREFIX: &str = "vodostaj-";
const CAPTURE_EXT: &str = ".xml";

pub struct Archive {
    dir: PathBuf,
}

impl Archive {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Capture file names, oldest first.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for dent in fs::read_dir(&self.dir)? {
            let dent = dent?;
            if !dent.file_type()?.is_file() {
                continue;
            }
            let name = dent.file_name().to_string_lossy().into_owned();
            if name.starts_with(CAPTURE_PREFIX) && name.ends_with(CAPTURE_EXT) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Path of the `offset`-th most recent capture (1 = newest). Offsets
    /// past the oldest capture clamp to it rather than fail.
    pub fn resolve_path(&self, offset: usize) -> Result<PathBuf> {
        let names = self.list()?;
        if names.is_empty() {
            return Err(VodostajError::EmptyArchive);
        }
        let back = offset.clamp(1, names.len());
        Ok(self.dir.join(&names[names.len() - back]))
    }

    /// Raw payload of the `offset`-th most recent capture.
    pub fn resolve(&self, offset: usize) -> Result<Vec<u8>> {
        Ok(fs::read(self.resolve_path(offset)?)?)
    }

    /// Stores a freshly downloaded payload under the date's capture name.
    /// A second live run on the same day overwrites the first capture.
    pub fn append(&self, payload: &[u8], date: NaiveDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{CAPTURE_PREFIX}{}{CAPTURE_EXT}", date.format("%Y%m%d")));
        fs::write(&path, payload)?;
        tracing::debug!(path = %path.display(), bytes = payload.len(), "capture archived");
        Ok(path)
    }
}

/// Date portion of a capture name, for listings.
pub fn capture_label(name: &str) -> &str {
    name.strip_prefix(CAPTURE_PREFIX)
        .and_then(|rest| rest.strip_suffix(CAPTURE_EXT))
        .unwrap_or(name)
}

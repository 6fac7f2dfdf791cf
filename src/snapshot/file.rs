//! File-backed snapshot slot.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::error::SnapshotResult;
use super::SnapshotBackend;

/// Snapshot slot stored as a single file on disk.
///
/// Writes go through a temporary file in the same directory followed by a
/// rename, so the slot never holds a partially-written blob.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for FileBackend {
    fn load(&self) -> SnapshotResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => {
                debug!(path = %self.path.display(), bytes = blob.len(), "loaded snapshot");
                Ok(Some(blob))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, blob: &str) -> SnapshotResult<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(blob.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!(path = %self.path.display(), bytes = blob.len(), "saved snapshot");
        Ok(())
    }
}

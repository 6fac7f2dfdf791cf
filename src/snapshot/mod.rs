//! Persisted snapshot format and the storage seam.
//!
//! The store persists its full state as one serialized record in a single
//! opaque key-value slot. [`SnapshotBackend`] abstracts that slot so the
//! embedding application decides where the blob lives; the store only ever
//! reads one string at startup and overwrites it after each mutation.
//!
//! # Architecture
//!
//! - `error`: Slot access error types
//! - `file`: File-backed slot with atomic replacement
//! - `mem`: In-memory slot for tests and embedding

mod error;
mod file;
mod mem;


pub use error::{SnapshotError, SnapshotResult};
pub use file::FileBackend;
pub use mem::MemoryBackend;

use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

use crate::store::{FilterOptions, SortOption, TasksState};

/// The serialized record written to the snapshot slot.
///
/// Every top-level field falls back to its default individually, so a
/// snapshot written before a field existed still loads cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub state: TasksState,
    pub filter_options: FilterOptions,
    pub sort_option: SortOption,
}

/// The opaque key-value slot holding the persisted snapshot.
///
/// Implementations own exactly one blob. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait SnapshotBackend {
    /// Read the stored blob, if any. `Ok(None)` means no snapshot has been
    /// written yet.
    fn load(&self) -> SnapshotResult<Option<String>>;

    /// Overwrite the stored blob.
    fn save(&self, blob: &str) -> SnapshotResult<()>;
}

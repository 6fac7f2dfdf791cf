//! In-memory snapshot slot.

use std::cell::RefCell;

use super::error::SnapshotResult;
use super::SnapshotBackend;

/// Snapshot slot held in memory.
///
/// Nothing survives the process; useful for tests and for embeddings that
/// manage durability themselves. The store is single-threaded, so interior
/// mutability through a `RefCell` is sufficient.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Start with a pre-existing blob in the slot.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        MemoryBackend {
            slot: RefCell::new(Some(blob.into())),
        }
    }

    /// Current slot contents.
    pub fn blob(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self) -> SnapshotResult<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, blob: &str) -> SnapshotResult<()> {
        *self.slot.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}

//! Snapshot slot error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while accessing the snapshot slot.
#[derive(Error, Diagnostic, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    #[diagnostic(code(taskpad::snapshot::io))]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    #[diagnostic(code(taskpad::snapshot::serialize))]
    Serialize(#[from] serde_json::Error),
}

/// Result type for snapshot slot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

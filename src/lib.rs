//! Task state and query engine.
//!
//! The crate owns the authoritative task/category collections, the pure
//! filter/sort pipeline that derives the visible task list, and the
//! aggregate reports computed over a time window. Persistence goes through
//! a single opaque snapshot slot (`snapshot::SnapshotBackend`); rendering
//! is left entirely to the embedding application.

pub mod dates;
pub mod report;
pub mod snapshot;
pub mod store;

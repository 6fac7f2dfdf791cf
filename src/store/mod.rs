//! Task state container and query pipeline.
//!
//! This module owns the authoritative collections and every mutation that
//! touches them. All writes flow through a pure reducer transition; the
//! engine attaches write-through snapshot persistence as a side effect.
//!
//! # Architecture
//!
//! - `models`: Domain entities (Task, Category) and query options
//! - `query`: Pure filter/sort functions over task slices
//! - `reducer`: Actions and the pure state transition
//! - `engine`: The owning store with persistence lifecycle

mod engine;
mod models;
mod query;
mod reducer;
pub(crate) mod utils;

#[cfg(test)]
mod query_test;

pub use engine::TaskStore;
pub use models::*;
pub use query::{filter_tasks, sort_tasks};
pub use reducer::{Action, reduce};

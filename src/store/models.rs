//! Domain models for the task store.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application. Serde attributes pin the snapshot
//! wire format: camelCase field names, RFC 3339 timestamps, and `null`
//! for absent optional values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Core Entities
// =============================================================================

/// Opaque entity identifier.
pub type Id = String;

/// A unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,
    /// Non-empty display string; enforced by the caller, never by the store.
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Independent of `status`; the two are never synchronized.
    pub completed: bool,
    /// Set exactly once at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    /// `None` means "no deadline".
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    /// `None` means uncategorized. Cleared when the referenced category
    /// is deleted.
    #[serde(default)]
    pub category_id: Option<Id>,
    /// Inert metadata; no scheduling behavior is attached to it.
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
}

/// Creation payload for [`Task`]: everything the caller supplies, before
/// the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub completed: bool,
    pub start_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub category_id: Option<Id>,
    pub recurrence: Option<Recurrence>,
}

/// A named, colored label attachable to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
    /// Hex color string used for visual tagging.
    pub color: String,
}

/// Creation payload for [`Category`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}

/// Recurrence metadata attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    #[serde(rename = "type")]
    pub kind: RecurrenceKind,
    /// Times per day/week/month; positive.
    pub frequency: u32,
    pub completed_instances: u32,
}

/// Recurrence cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
}

impl std::fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrenceKind::Daily => write!(f, "daily"),
            RecurrenceKind::Weekly => write!(f, "weekly"),
            RecurrenceKind::Monthly => write!(f, "monthly"),
        }
    }
}

/// Task priority, totally ordered `high > medium > low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Comparison weight: `high = 3`, `medium = 2`, `low = 1`.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            _ => Err(format!("Invalid task status: {}", s)),
        }
    }
}

// =============================================================================
// Collections
// =============================================================================

/// The authoritative collections held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksState {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default = "seed_categories")]
    pub categories: Vec<Category>,
}

impl Default for TasksState {
    fn default() -> Self {
        TasksState {
            tasks: Vec::new(),
            categories: seed_categories(),
        }
    }
}

/// Categories present in a fresh store.
fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: "personal".to_string(),
            name: "Personal".to_string(),
            color: "#3B82F6".to_string(),
        },
        Category {
            id: "work".to_string(),
            name: "Work".to_string(),
            color: "#10B981".to_string(),
        },
        Category {
            id: "study".to_string(),
            name: "Study".to_string(),
            color: "#F59E0B".to_string(),
        },
    ]
}

// =============================================================================
// Query Options
// =============================================================================

/// A query predicate: the conjunction of every present clause.
///
/// Absent clauses (`None`, or an empty `search_query`) impose no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category_id: Option<Id>,
    /// Case-insensitive substring match against the task title.
    pub search_query: String,
}

impl FilterOptions {
    /// Shallow-merge a patch: named clauses are replaced, the rest keep
    /// their prior values.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(search_query) = patch.search_query {
            self.search_query = search_query;
        }
    }
}

/// Partial update for [`FilterOptions`].
///
/// The outer `Option` distinguishes "leave the clause alone" from "set it",
/// and the inner `Option` carries "set to unconstrained" (`None`) vs "set to
/// a value".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub completed: Option<Option<bool>>,
    pub priority: Option<Option<Priority>>,
    pub category_id: Option<Option<Id>>,
    pub search_query: Option<String>,
}

/// Named total-order comparator applied to the filtered task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    DueDate,
    Priority,
    #[default]
    CreatedAt,
    Alphabetical,
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::DueDate => write!(f, "dueDate"),
            SortOption::Priority => write!(f, "priority"),
            SortOption::CreatedAt => write!(f, "createdAt"),
            SortOption::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

impl std::str::FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dueDate" => Ok(SortOption::DueDate),
            "priority" => Ok(SortOption::Priority),
            "createdAt" => Ok(SortOption::CreatedAt),
            "alphabetical" => Ok(SortOption::Alphabetical),
            _ => Err(format!("Invalid sort option: {}", s)),
        }
    }
}

//! Derived reports over the task collections.
//!
//! Everything here is a pure function of `(tasks, categories, time range,
//! now)` with no state of its own, re-derivable at any moment from a store
//! snapshot. The UI picks the cadence.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::is_overdue;
use crate::store::{Category, Id, Task, TaskStatus};


/// Reporting window, anchored at "now" and reaching back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
            TimeRange::Year => write!(f, "year"),
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            _ => Err(format!("Invalid time range: {}", s)),
        }
    }
}

/// Completion triple for a set of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`; 0 when `total` is 0.
    pub percentage: u32,
}

/// Count of windowed tasks per workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct StatusBreakdown {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Aggregate statistics over tasks created within a time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    pub time_range: TimeRange,
    pub progress: Progress,
    /// One entry per known category, zero-task categories included.
    pub by_category: HashMap<Id, Progress>,
    pub by_status: StatusBreakdown,
    /// Windowed, incomplete tasks whose due date is already past.
    pub overdue_tasks: usize,
    /// Windowed, incomplete tasks whose due date is still ahead.
    pub upcoming_tasks: usize,
}

/// Compute the report for tasks with `created_at` in `[window_start, now]`.
///
/// `now` is passed explicitly so the function stays deterministic; callers
/// that want wall-clock behavior pass `Utc::now()`.
pub fn compute_report(
    tasks: &[Task],
    categories: &[Category],
    time_range: TimeRange,
    now: DateTime<Utc>,
) -> TaskReport {
    let start = window_start(time_range, now);
    let windowed: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.created_at >= start && t.created_at <= now)
        .collect();

    let by_category = categories
        .iter()
        .map(|category| {
            let in_category: Vec<&Task> = windowed
                .iter()
                .copied()
                .filter(|t| t.category_id.as_deref() == Some(category.id.as_str()))
                .collect();
            (category.id.clone(), progress_of(&in_category))
        })
        .collect();

    let mut by_status = StatusBreakdown::default();
    for task in &windowed {
        match task.status {
            TaskStatus::Todo => by_status.todo += 1,
            TaskStatus::InProgress => by_status.in_progress += 1,
            TaskStatus::Done => by_status.done += 1,
        }
    }

    let overdue_tasks = windowed
        .iter()
        .filter(|t| !t.completed && t.due_date.is_some_and(|due| due < now))
        .count();

    let upcoming_tasks = windowed
        .iter()
        .filter(|t| !t.completed && t.due_date.is_some_and(|due| due > now))
        .count();

    TaskReport {
        time_range,
        progress: progress_of(&windowed),
        by_category,
        by_status,
        overdue_tasks,
        upcoming_tasks,
    }
}

/// Whole-collection statistics, unwindowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Incomplete tasks whose due date falls on a past calendar day.
    pub overdue: usize,
    pub completion_percentage: u32,
}

/// Summarize the entire task collection, ignoring time windows.
pub fn summarize(tasks: &[Task]) -> TaskSummary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let overdue = tasks
        .iter()
        .filter(|t| !t.completed && t.due_date.is_some_and(is_overdue))
        .count();

    TaskSummary {
        total,
        completed,
        pending: total - completed,
        overdue,
        completion_percentage: percentage(completed, total),
    }
}

fn window_start(time_range: TimeRange, now: DateTime<Utc>) -> DateTime<Utc> {
    match time_range {
        TimeRange::Week => now - Duration::days(7),
        TimeRange::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
        TimeRange::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now),
    }
}

fn progress_of(tasks: &[&Task]) -> Progress {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();

    Progress {
        completed,
        total,
        percentage: percentage(completed, total),
    }
}

fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

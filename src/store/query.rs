//! Pure filter and sort functions over task slices.
//!
//! Both functions are stateless and deterministic: they depend only on
//! their inputs and never mutate them.

use std::cmp::Ordering;

use super::models::{FilterOptions, SortOption, Task};

/// Keep every task that satisfies all present filter clauses.
///
/// Clauses are independent and combined by conjunction; an absent clause
/// imposes no constraint. Search matching is case-insensitive substring
/// containment on the title only.
pub fn filter_tasks(tasks: &[Task], options: &FilterOptions) -> Vec<Task> {
    let query = options.search_query.to_lowercase();

    tasks
        .iter()
        .filter(|task| {
            if let Some(completed) = options.completed
                && task.completed != completed
            {
                return false;
            }

            if let Some(priority) = options.priority
                && task.priority != priority
            {
                return false;
            }

            if let Some(category_id) = &options.category_id
                && task.category_id.as_ref() != Some(category_id)
            {
                return false;
            }

            if !query.is_empty() && !task.title.to_lowercase().contains(&query) {
                return false;
            }

            true
        })
        .cloned()
        .collect()
}

/// Return a new sequence sorted by the selected comparator.
///
/// The sort is stable: elements whose keys compare equal retain their
/// relative input order, and sorting twice yields identical output.
pub fn sort_tasks(tasks: &[Task], option: SortOption) -> Vec<Task> {
    let mut sorted = tasks.to_vec();

    match option {
        SortOption::DueDate => sorted.sort_by(compare_due_date),
        SortOption::Priority => {
            sorted.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()));
        }
        SortOption::CreatedAt => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Alphabetical => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
    }

    sorted
}

/// Ascending by due timestamp; tasks without a deadline sort after every
/// task that has one. Two absent due dates compare equal so the stable
/// sort keeps their input order.
fn compare_due_date(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

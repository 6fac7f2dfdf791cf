//! Actions and the pure state transition.
//!
//! Every mutation of the collections is expressed as an [`Action`] applied
//! by [`reduce`]. The transition is atomic: no caller ever observes a
//! partially-updated state. Id and timestamp assignment happen before an
//! action is built, so the transition itself stays pure.

use super::models::{Category, Id, Task, TasksState};

/// A single mutation of the task/category collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a fully-formed task (id and `created_at` already assigned).
    AddTask(Task),
    /// Replace the task with a matching id; no-op when absent.
    UpdateTask(Task),
    /// Remove the task with this id; no-op when absent.
    DeleteTask(Id),
    /// Flip `completed` on the task with this id; `status` is untouched.
    ToggleTaskCompleted(Id),
    /// Append a fully-formed category.
    AddCategory(Category),
    /// Replace the category with a matching id; no-op when absent.
    UpdateCategory(Category),
    /// Remove the category and clear `category_id` on every task that
    /// referenced it, in one transition.
    DeleteCategory(Id),
}

/// Apply one action, producing the next state.
pub fn reduce(state: TasksState, action: Action) -> TasksState {
    let mut state = state;

    match action {
        Action::AddTask(task) => {
            state.tasks.push(task);
        }
        Action::UpdateTask(task) => {
            if let Some(existing) = state.tasks.iter_mut().find(|t| t.id == task.id) {
                *existing = task;
            }
        }
        Action::DeleteTask(id) => {
            state.tasks.retain(|t| t.id != id);
        }
        Action::ToggleTaskCompleted(id) => {
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                task.completed = !task.completed;
            }
        }
        Action::AddCategory(category) => {
            state.categories.push(category);
        }
        Action::UpdateCategory(category) => {
            if let Some(existing) = state.categories.iter_mut().find(|c| c.id == category.id) {
                *existing = category;
            }
        }
        Action::DeleteCategory(id) => {
            state.categories.retain(|c| c.id != id);
            for task in &mut state.tasks {
                if task.category_id.as_ref() == Some(&id) {
                    task.category_id = None;
                }
            }
        }
    }

    state
}

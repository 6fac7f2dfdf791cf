//! The owning state store.
//!
//! [`TaskStore`] holds the authoritative collections plus the active filter
//! and sort preferences, and routes every mutation through the pure reducer
//! before writing the full snapshot through its backend. Persistence is
//! fire-and-forget: a failed write is logged and the in-memory state stays
//! authoritative for the rest of the session.

use chrono::Utc;
use tracing::{debug, warn};

use crate::report::{self, TaskReport, TaskSummary, TimeRange};
use crate::snapshot::{Snapshot, SnapshotBackend};

use super::models::{
    Category, CategoryDraft, FilterOptions, FilterPatch, SortOption, Task, TaskDraft, TasksState,
};
use super::query::{filter_tasks, sort_tasks};
use super::reducer::{Action, reduce};
use super::utils::generate_entity_id;

/// Single source of truth for tasks, categories, and view preferences.
///
/// Constructed explicitly and owned by the application root; one instance
/// per running application. All operations are synchronous and run to
/// completion before the next is observed.
pub struct TaskStore {
    state: TasksState,
    filter_options: FilterOptions,
    sort_option: SortOption,
    backend: Box<dyn SnapshotBackend>,
}

impl TaskStore {
    /// Open the store over a snapshot slot.
    ///
    /// A prior snapshot is deserialized if present; on absence or any parse
    /// failure the store starts from the default state (no tasks, seed
    /// categories) and logs a diagnostic.
    pub fn open(backend: Box<dyn SnapshotBackend>) -> Self {
        let snapshot = load_snapshot(backend.as_ref());

        TaskStore {
            state: snapshot.state,
            filter_options: snapshot.filter_options,
            sort_option: snapshot.sort_option,
            backend,
        }
    }

    // -------------------------------------------------------------------------
    // Task mutations
    // -------------------------------------------------------------------------

    /// Assign a fresh id and `created_at`, append the task, and return it.
    pub fn add_task(&mut self, draft: TaskDraft) -> Task {
        let task = Task {
            id: generate_entity_id(),
            created_at: Utc::now(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            completed: draft.completed,
            start_date: draft.start_date,
            due_date: draft.due_date,
            priority: draft.priority,
            category_id: draft.category_id,
            recurrence: draft.recurrence,
        };
        self.dispatch(Action::AddTask(task.clone()));
        task
    }

    /// Replace the task with a matching id; silent no-op when absent.
    pub fn update_task(&mut self, task: Task) {
        self.dispatch(Action::UpdateTask(task));
    }

    /// Remove the task with this id; no-op when absent.
    pub fn delete_task(&mut self, id: &str) {
        self.dispatch(Action::DeleteTask(id.to_string()));
    }

    /// Flip `completed` on the task with this id; no-op when absent.
    /// `status` is not touched.
    pub fn toggle_task_completed(&mut self, id: &str) {
        self.dispatch(Action::ToggleTaskCompleted(id.to_string()));
    }

    // -------------------------------------------------------------------------
    // Category mutations
    // -------------------------------------------------------------------------

    /// Assign a fresh id, append the category, and return it.
    pub fn add_category(&mut self, draft: CategoryDraft) -> Category {
        let category = Category {
            id: generate_entity_id(),
            name: draft.name,
            color: draft.color,
        };
        self.dispatch(Action::AddCategory(category.clone()));
        category
    }

    /// Replace the category with a matching id; no-op when absent.
    pub fn update_category(&mut self, category: Category) {
        self.dispatch(Action::UpdateCategory(category));
    }

    /// Remove the category and clear `category_id` on every task that
    /// referenced it, as one atomic transition.
    pub fn delete_category(&mut self, id: &str) {
        self.dispatch(Action::DeleteCategory(id.to_string()));
    }

    // -------------------------------------------------------------------------
    // View preferences
    // -------------------------------------------------------------------------

    /// Shallow-merge a filter patch into the current options.
    pub fn set_filter(&mut self, patch: FilterPatch) {
        self.filter_options.apply(patch);
        self.persist();
    }

    /// Replace the sort option wholesale.
    pub fn set_sort(&mut self, option: SortOption) {
        self.sort_option = option;
        self.persist();
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    /// Look up a category; `None` when `id` is absent or unmatched.
    pub fn get_category_by_id(&self, id: Option<&str>) -> Option<&Category> {
        let id = id?;
        self.state.categories.iter().find(|c| c.id == id)
    }

    /// The visible task list: `sort(filter(tasks))`, recomputed on every
    /// call so it can never serve a stale view.
    pub fn filtered_tasks(&self) -> Vec<Task> {
        let filtered = filter_tasks(&self.state.tasks, &self.filter_options);
        sort_tasks(&filtered, self.sort_option)
    }

    /// Aggregate report over tasks created within the given time window.
    pub fn report(&self, time_range: TimeRange) -> TaskReport {
        report::compute_report(
            &self.state.tasks,
            &self.state.categories,
            time_range,
            Utc::now(),
        )
    }

    /// Whole-collection statistics, unwindowed.
    pub fn summary(&self) -> TaskSummary {
        report::summarize(&self.state.tasks)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.persist();
    }

    /// Write the full snapshot through the backend. Failures are logged and
    /// swallowed; the in-memory state remains the source of truth.
    fn persist(&self) {
        let snapshot = Snapshot {
            state: self.state.clone(),
            filter_options: self.filter_options.clone(),
            sort_option: self.sort_option,
        };

        match serde_json::to_string(&snapshot) {
            Ok(blob) => {
                if let Err(err) = self.backend.save(&blob) {
                    warn!(%err, "failed to persist snapshot; keeping in-memory state");
                }
            }
            Err(err) => {
                warn!(%err, "failed to serialize snapshot");
            }
        }
    }
}

fn load_snapshot(backend: &dyn SnapshotBackend) -> Snapshot {
    match backend.load() {
        Ok(Some(blob)) => match serde_json::from_str::<Snapshot>(&blob) {
            Ok(snapshot) => {
                debug!(
                    tasks = snapshot.state.tasks.len(),
                    categories = snapshot.state.categories.len(),
                    "restored snapshot"
                );
                snapshot
            }
            Err(err) => {
                warn!(%err, "malformed snapshot; starting from default state");
                Snapshot::default()
            }
        },
        Ok(None) => Snapshot::default(),
        Err(err) => {
            warn!(%err, "failed to read snapshot; starting from default state");
            Snapshot::default()
        }
    }
}

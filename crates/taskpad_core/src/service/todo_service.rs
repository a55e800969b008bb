//! Todo orchestration service.
//!
//! # Responsibility
//! - Mediate between UI intents and store operations.
//! - Track per-operation loading flags, the dismissible error banner and
//!   the notification queue.
//! - Reconcile the UI-visible cache after each successful mutation.
//!
//! # Invariants
//! - Every operation clears the previous error banner before starting.
//! - Every completed operation pushes exactly one success or error notice.
//! - Cache merges are replace-by-id; callers are expected not to issue
//!   concurrent operations for the same id.

use crate::model::task::{Priority, Task, TaskDraft, TaskId, TaskPatch};
use crate::store::task_store::{StoreError, StoreResult, TaskStore};
use crate::view::projection::{project, SortKey};
use log::{debug, info, warn};

/// Independent in-flight flags, one per operation category.
///
/// At most one id is tracked per category; the design issues operations on a
/// given id serially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingStates {
    pub fetching: bool,
    pub creating: bool,
    pub updating: Option<TaskId>,
    pub deleting: Option<TaskId>,
    pub saving_edit: bool,
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient notification surfaced after each completed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Orchestrator owning the store instance and the UI-visible task cache.
///
/// The cache is a read-only copy reconciled after each successful operation;
/// the store keeps exclusive ownership of the canonical collection.
pub struct TodoService<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
    loading: LoadingStates,
    error_banner: Option<String>,
    notices: Vec<Notice>,
    editing: Option<TaskId>,
}

impl<S: TaskStore> TodoService<S> {
    /// Creates a service over the provided store instance.
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            loading: LoadingStates::default(),
            error_banner: None,
            notices: Vec::new(),
            editing: None,
        }
    }

    /// Cached task collection in storage order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Cached tasks filtered and ordered for display.
    pub fn visible_tasks(&self, search_term: &str, sort_key: SortKey) -> Vec<Task> {
        project(&self.tasks, search_term, sort_key)
    }

    pub fn loading(&self) -> &LoadingStates {
        &self.loading
    }

    /// Currently shown error message, if any.
    pub fn error_banner(&self) -> Option<&str> {
        self.error_banner.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error_banner = None;
    }

    /// Removes and returns all pending notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Id of the task currently under edit, if any.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Reloads the cache from the store.
    ///
    /// On failure the previous cache is kept (empty on first mount) and the
    /// error is surfaced via the banner and an error notice.
    pub async fn refresh(&mut self) {
        self.error_banner = None;
        self.loading.fetching = true;

        match self.store.list_tasks().await {
            Ok(tasks) => {
                info!("event=cache_refreshed module=service count={}", tasks.len());
                self.tasks = tasks;
                self.notices.push(Notice::success("task list refreshed"));
            }
            Err(err) => self.report_failure("refresh", &err),
        }

        self.loading.fetching = false;
    }

    /// Creates a task and prepends it to the cache.
    ///
    /// Failures are surfaced in visible state and re-raised so the caller
    /// can keep its form input.
    pub async fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> StoreResult<Task> {
        self.error_banner = None;
        self.loading.creating = true;

        let draft = TaskDraft::new(title, description).with_priority(priority);
        let result = self.store.create_task(draft).await;
        self.loading.creating = false;

        match result {
            Ok(task) => {
                info!("event=task_added module=service id={}", task.id);
                self.tasks.insert(0, task.clone());
                self.notices.push(Notice::success("task created"));
                Ok(task)
            }
            Err(err) => {
                self.report_failure("create", &err);
                Err(err)
            }
        }
    }

    /// Flips the completion flag of a cached task.
    ///
    /// Ids not present in the cache are ignored; failures are surfaced in
    /// visible state only.
    pub async fn toggle_completed(&mut self, id: TaskId) {
        let Some(current) = self
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.completed)
        else {
            debug!("event=toggle_skipped module=service id={id} reason=uncached");
            return;
        };

        self.error_banner = None;
        self.loading.updating = Some(id);

        let patch = TaskPatch {
            completed: Some(!current),
            ..TaskPatch::default()
        };
        match self.store.update_task(id, patch).await {
            Ok(task) => {
                let message = if task.completed {
                    "task marked as completed"
                } else {
                    "task marked as incomplete"
                };
                self.replace_cached(task);
                self.notices.push(Notice::success(message));
            }
            Err(err) => self.report_failure("update", &err),
        }

        self.loading.updating = None;
    }

    /// Marks a cached task as under edit. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: TaskId) {
        if self.tasks.iter().any(|task| task.id == id) {
            self.editing = Some(id);
        } else {
            debug!("event=edit_skipped module=service id={id} reason=uncached");
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Saves the edit dialog fields for a task.
    ///
    /// On success the cached record is replaced and the editing state is
    /// cleared; on failure the editing state is kept (the dialog stays open)
    /// and the error is re-raised.
    pub async fn save_edit(
        &mut self,
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> StoreResult<Task> {
        self.error_banner = None;
        self.loading.saving_edit = true;

        let patch = TaskPatch {
            title: Some(title.into()),
            description: Some(description.into()),
            priority: Some(priority),
            ..TaskPatch::default()
        };
        let result = self.store.update_task(id, patch).await;
        self.loading.saving_edit = false;

        match result {
            Ok(task) => {
                info!("event=edit_saved module=service id={}", task.id);
                self.replace_cached(task.clone());
                self.editing = None;
                self.notices.push(Notice::success("task updated"));
                Ok(task)
            }
            Err(err) => {
                self.report_failure("update", &err);
                Err(err)
            }
        }
    }

    /// Deletes a task and removes it from the cache.
    ///
    /// Failures are surfaced in visible state only.
    pub async fn remove_task(&mut self, id: TaskId) {
        self.error_banner = None;
        self.loading.deleting = Some(id);

        match self.store.delete_task(id).await {
            Ok(()) => {
                info!("event=task_removed module=service id={id}");
                self.tasks.retain(|task| task.id != id);
                if self.editing == Some(id) {
                    self.editing = None;
                }
                self.notices.push(Notice::success("task deleted"));
            }
            Err(err) => self.report_failure("delete", &err),
        }

        self.loading.deleting = None;
    }

    fn replace_cached(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|cached| cached.id == task.id) {
            Some(slot) => *slot = task,
            // The record can have been deleted by an interleaved completion;
            // the merge stays a per-id replacement and never re-inserts.
            None => debug!(
                "event=cache_merge_skipped module=service id={} reason=uncached",
                task.id
            ),
        }
    }

    fn report_failure(&mut self, op: &'static str, err: &StoreError) {
        warn!("event=operation_failed module=service op={op} error={err}");
        let message = err.to_string();
        self.error_banner = Some(message.clone());
        self.notices.push(Notice::error(message));
    }
}

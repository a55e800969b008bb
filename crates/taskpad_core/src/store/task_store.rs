//! Task store contract and error surface.
//!
//! # Responsibility
//! - Define the asynchronous CRUD contract the orchestration layer codes
//!   against.
//! - Return semantic errors (`NotFound`, `Validation`) in addition to the
//!   simulated transport failure.
//!
//! # Invariants
//! - Implementations must validate records before any mutation.
//! - Transient failures take precedence over validation and lookup checks.

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surface shared by all store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Record-level invariant violation (empty title, bad timestamps).
    Validation(TaskValidationError),
    /// Target task does not exist.
    NotFound(TaskId),
    /// Simulated network flakiness; the call may succeed if retried.
    Transient { op: &'static str },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Transient { op } => {
                write!(f, "simulated backend failure during {op}; try again")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Transient { .. } => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Asynchronous CRUD contract over the task collection.
///
/// Every operation may suspend the caller (simulated I/O) and may fail with
/// a [`StoreError::Transient`] independent of its input.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns a snapshot copy of all tasks in internal storage order,
    /// most-recently-created first.
    async fn list_tasks(&self) -> StoreResult<Vec<Task>>;

    /// Creates a task from the draft and returns the stored record.
    async fn create_task(&self, draft: TaskDraft) -> StoreResult<Task>;

    /// Applies a partial update and returns the stored record.
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> StoreResult<Task>;

    /// Removes a task unconditionally.
    async fn delete_task(&self, id: TaskId) -> StoreResult<()>;
}

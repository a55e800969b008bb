//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its request models.
//! - Enforce title and timestamp invariants on every write path.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - Persisted `title` is never empty after trimming.
//! - `updated_at_ms` is never earlier than `created_at_ms`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by the store at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures. The
/// store hands these out from a monotonically increasing counter and never
/// reuses a value, even after deletions.
pub type TaskId = u64;

/// Urgency bucket attached to every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for priority ordering: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Wire/UI keyword for this priority.
    pub fn as_keyword(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses a UI keyword, returning `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_keyword())
    }
}

/// Validation failure raised by [`Task::validate`] and patch application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// `updated_at_ms` is earlier than `created_at_ms`.
    InvalidTimestampWindow {
        created_at_ms: i64,
        updated_at_ms: i64,
    },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::InvalidTimestampWindow {
                created_at_ms,
                updated_at_ms,
            } => write!(
                f,
                "updated_at {updated_at_ms} is earlier than created_at {created_at_ms}"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Field names are serialized to match the UI wire schema, which uses
/// camelCase timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    /// Unix epoch milliseconds, fixed at creation.
    #[serde(rename = "createdAt")]
    pub created_at_ms: i64,
    /// Unix epoch milliseconds, refreshed on every successful mutation.
    #[serde(rename = "updatedAt")]
    pub updated_at_ms: i64,
}

impl Task {
    /// Checks the record-level invariants.
    ///
    /// # Invariants
    /// - `title` is non-empty after trimming.
    /// - `updated_at_ms >= created_at_ms`.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.updated_at_ms < self.created_at_ms {
            return Err(TaskValidationError::InvalidTimestampWindow {
                created_at_ms: self.created_at_ms,
                updated_at_ms: self.updated_at_ms,
            });
        }
        Ok(())
    }

    /// Applies the supplied patch fields; unset fields retain prior values.
    ///
    /// A supplied title is trimmed and must stay non-empty. A supplied
    /// description is trimmed and may become empty: `None` means "retain",
    /// `Some("")` means "clear". Timestamps are owned by the store and are
    /// not touched here.
    pub fn apply_patch(&mut self, patch: &TaskPatch) -> Result<(), TaskValidationError> {
        if let Some(title) = &patch.title {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(TaskValidationError::EmptyTitle);
            }
            self.title = trimmed.to_string();
        }
        if let Some(description) = &patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        Ok(())
    }
}

/// Request model for task creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl TaskDraft {
    /// Creates a draft with the default `medium` priority.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: Priority::default(),
        }
    }

    /// Sets an explicit priority on the draft.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Request model for partial task update.
///
/// Every field is optional; `None` retains the prior value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

impl TaskPatch {
    /// Returns whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
    }
}

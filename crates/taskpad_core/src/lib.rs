//! Core logic for taskpad, a single-user todo manager backed by a simulated
//! remote store. This crate is the single source of truth for business
//! invariants; presentation layers consume its results and forward intents.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
pub use service::todo_service::{LoadingStates, Notice, NoticeKind, TodoService};
pub use store::clock::{Clock, ManualClock, SystemClock};
pub use store::fault::{
    FaultInjector, FaultScript, NoFaults, RandomFaults, DEFAULT_FAILURE_RATE,
};
pub use store::sim::{LatencyProfile, SimulatedTaskStore, StoreTuning};
pub use store::task_store::{StoreError, StoreResult, TaskStore};
pub use view::projection::{project, SortKey};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

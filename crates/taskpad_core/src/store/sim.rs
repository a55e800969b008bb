//! In-memory simulated remote store.
//!
//! # Responsibility
//! - Own the canonical task collection behind the [`TaskStore`] contract.
//! - Mimic an unreliable remote API: fixed per-operation latency, then an
//!   independent transient-failure check, then validation/lookup.
//!
//! # Invariants
//! - Ids come from a monotonically increasing counter and are never reused.
//! - Creation prepends, so storage order is most-recently-created first.
//! - `updated_at_ms` strictly advances on every successful update.
//! - Write paths call `Task::validate()` before the collection is mutated.

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::store::clock::{Clock, SystemClock};
use crate::store::fault::{FaultInjector, RandomFaults, DEFAULT_FAILURE_RATE};
use crate::store::task_store::{StoreError, StoreResult, TaskStore};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Fixed artificial delay applied before each operation responds.
///
/// The magnitudes are a simulation parameter, not a correctness requirement;
/// the defaults keep reads slower than narrow writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(800),
            create: Duration::from_millis(600),
            update: Duration::from_millis(500),
            delete: Duration::from_millis(400),
        }
    }
}

impl LatencyProfile {
    /// Zero-delay profile so tests run without waiting on simulated I/O.
    pub fn instant() -> Self {
        Self {
            list: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

/// Simulation knobs for a store instance.
pub struct StoreTuning {
    pub latency: LatencyProfile,
    pub clock: Arc<dyn Clock>,
    pub faults: Box<dyn FaultInjector>,
}

impl Default for StoreTuning {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::default(),
            clock: Arc::new(SystemClock),
            faults: Box::new(RandomFaults::new(DEFAULT_FAILURE_RATE)),
        }
    }
}

struct StoreInner {
    tasks: Vec<Task>,
    next_id: TaskId,
    faults: Box<dyn FaultInjector>,
}

impl StoreInner {
    /// Consumes one fault decision; precedes validation and lookup.
    fn check_fault(&mut self, op: &'static str) -> StoreResult<()> {
        if self.faults.next_call_fails() {
            warn!("event=transient_fault module=store op={op}");
            return Err(StoreError::Transient { op });
        }
        Ok(())
    }

    /// Builds, validates and prepends a task from a draft.
    fn insert_draft(&mut self, draft: TaskDraft, now_ms: i64) -> StoreResult<Task> {
        let task = Task {
            id: self.next_id,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            completed: false,
            priority: draft.priority,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        };
        task.validate()?;

        self.next_id += 1;
        self.tasks.insert(0, task.clone());
        Ok(task)
    }

    fn position(&self, id: TaskId) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// Transient in-process task collection posing as a remote service.
///
/// Explicitly constructed and owned by its caller; there is no ambient
/// singleton, so tests and demos run against isolated instances.
pub struct SimulatedTaskStore {
    latency: LatencyProfile,
    clock: Arc<dyn Clock>,
    inner: Mutex<StoreInner>,
}

impl std::fmt::Debug for SimulatedTaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedTaskStore")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl SimulatedTaskStore {
    /// Creates a store with default latency, wall clock and random faults.
    pub fn new() -> Self {
        Self::with_tuning(StoreTuning::default())
    }

    /// Creates a store with explicit simulation knobs.
    pub fn with_tuning(tuning: StoreTuning) -> Self {
        Self {
            latency: tuning.latency,
            clock: tuning.clock,
            inner: Mutex::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
                faults: tuning.faults,
            }),
        }
    }

    /// Creates a store already holding the given drafts.
    ///
    /// Seeding bypasses latency and fault injection but not validation.
    /// Drafts are inserted in order, each prepended, so the last draft ends
    /// up first in storage order.
    pub fn preloaded(
        tuning: StoreTuning,
        drafts: impl IntoIterator<Item = TaskDraft>,
    ) -> StoreResult<Self> {
        let mut inner = StoreInner {
            tasks: Vec::new(),
            next_id: 1,
            faults: tuning.faults,
        };
        let now_ms = tuning.clock.now_ms();
        for draft in drafts {
            inner.insert_draft(draft, now_ms)?;
        }
        info!("event=store_seeded module=store count={}", inner.tasks.len());

        Ok(Self {
            latency: tuning.latency,
            clock: tuning.clock,
            inner: Mutex::new(inner),
        })
    }
}

impl Default for SimulatedTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for SimulatedTaskStore {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        sleep(self.latency.list).await;

        let mut inner = self.inner.lock().await;
        inner.check_fault("list")?;

        debug!("event=tasks_listed module=store count={}", inner.tasks.len());
        Ok(inner.tasks.clone())
    }

    async fn create_task(&self, draft: TaskDraft) -> StoreResult<Task> {
        sleep(self.latency.create).await;

        let mut inner = self.inner.lock().await;
        inner.check_fault("create")?;

        let task = inner.insert_draft(draft, self.clock.now_ms())?;
        info!(
            "event=task_created module=store id={} priority={}",
            task.id, task.priority
        );
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> StoreResult<Task> {
        sleep(self.latency.update).await;

        let mut inner = self.inner.lock().await;
        inner.check_fault("update")?;

        let index = inner.position(id)?;
        let mut updated = inner.tasks[index].clone();
        updated.apply_patch(&patch)?;
        // Strict advance even under a frozen or coarse clock keeps the
        // timestamp invariants observable to callers.
        updated.updated_at_ms = self.clock.now_ms().max(updated.updated_at_ms + 1);
        updated.validate()?;

        inner.tasks[index] = updated.clone();
        info!(
            "event=task_updated module=store id={} completed={}",
            updated.id, updated.completed
        );
        Ok(updated)
    }

    async fn delete_task(&self, id: TaskId) -> StoreResult<()> {
        sleep(self.latency.delete).await;

        let mut inner = self.inner.lock().await;
        inner.check_fault("delete")?;

        let index = inner.position(id)?;
        inner.tasks.remove(index);
        info!("event=task_deleted module=store id={id}");
        Ok(())
    }
}

//! Store layer: the asynchronous CRUD contract and its simulated backend.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract.
//! - Isolate simulation details (latency, faults, clock) from service
//!   orchestration.
//!
//! # Invariants
//! - Store writes must enforce `Task::validate()` before mutation.
//! - Store APIs return semantic errors (`NotFound`) in addition to the
//!   simulated transport error.

pub mod clock;
pub mod fault;
pub mod sim;
pub mod task_store;

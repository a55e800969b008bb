//! Core orchestration services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep presentation layers decoupled from simulation details.

pub mod todo_service;

//! Derived display views.
//!
//! # Responsibility
//! - Expose the pure filter+sort projection consumed by presentation layers.
//! - Keep display-ordering rules inside core.

pub mod projection;

//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by list/search/storage paths.
//! - Keep variant-specific temporal fields behind one exhaustive sum type.
//!
//! # Invariants
//! - Deadline and time-range tasks only exist with parsed, valid dates.
//! - `completed` is the only field that changes after construction.

pub mod task;

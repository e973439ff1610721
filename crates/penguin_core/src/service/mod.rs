//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, store and search calls into collection use-cases.
//! - Keep front ends decoupled from storage and matching details.

pub mod task_list;

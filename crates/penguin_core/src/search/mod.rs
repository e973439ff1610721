//! Approximate task search.
//!
//! # Responsibility
//! - Tokenize user queries into bare tokens and quoted phrases.
//! - Match every term against a task's display line with typo tolerance.
//!
//! # Invariants
//! - Matching is conjunctive across terms.
//! - Hits keep collection order; indices refer to pre-filter positions.

pub mod fuzzy;

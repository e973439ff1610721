//! Backing-store persistence for task collections.
//!
//! # Responsibility
//! - Convert between the `|`-delimited line format and `Task` values.
//! - Read and overwrite the single backing file of a collection.
//!
//! # Invariants
//! - Codec functions are pure; only `file` touches the filesystem.
//! - Saving is a whole-file overwrite, never an append.
//! - A short `E` line aborts a load; short or undated `D` lines are skipped.

pub mod codec;
pub mod file;

pub use codec::{decode_line, decode_lines, encode_line, CodecError, CodecResult};
pub use file::{load_tasks, read_lines, save_tasks, write_lines, StoreError, StoreResult};

//! Backing file I/O.
//!
//! # Responsibility
//! - Read all lines of the backing file and decode them up to a capacity.
//! - Overwrite the backing file with the encoded collection.
//!
//! # Invariants
//! - A missing file reads as zero lines (first run).
//! - Parent directories are created before writing.
//! - Write failures leave the caller's in-memory tasks untouched.

use super::codec::{decode_lines, encode_line, CodecError};
use crate::model::task::Task;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Backing-store error for read, write and decode failures.
#[derive(Debug)]
pub enum StoreError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line aborted the load.
    Codec {
        path: PathBuf,
        line_number: usize,
        source: CodecError,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::Codec {
                path,
                line_number,
                source,
            } => write!(f, "`{}` line {line_number}: {source}", path.display()),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Codec { source, .. } => Some(source),
        }
    }
}

/// Reads every line of `path`.
///
/// Returns an empty list when the file does not exist.
pub fn read_lines(path: impl AsRef<Path>) -> StoreResult<Vec<String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text.lines().map(str::to_string).collect()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

/// Overwrites `path` with `lines`, one per line, creating parent directories.
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> StoreResult<()> {
    let path = path.as_ref();
    let to_write_error = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_write_error)?;
    }

    let mut body = lines.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    std::fs::write(path, body).map_err(to_write_error)
}

/// Loads up to `capacity` tasks from `path`, numbering from `first_ordinal`.
///
/// # Side effects
/// - Emits `store_load` logging events with duration and status.
pub fn load_tasks(
    path: impl AsRef<Path>,
    capacity: usize,
    first_ordinal: usize,
) -> StoreResult<Vec<Task>> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = read_lines(path).and_then(|lines| {
        decode_lines(lines.iter().map(String::as_str), capacity, first_ordinal).map_err(
            |(line_number, source)| StoreError::Codec {
                path: path.to_path_buf(),
                line_number,
                source,
            },
        )
    });

    match &result {
        Ok(tasks) => info!(
            "event=store_load module=store status=ok path={} tasks={} duration_ms={}",
            path.display(),
            tasks.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_load module=store status=error path={} duration_ms={} error={}",
            path.display(),
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Overwrites `path` with the storage lines of `tasks`, in order.
///
/// # Side effects
/// - Emits `store_save` logging events with duration and status.
pub fn save_tasks(path: impl AsRef<Path>, tasks: &[Task]) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    let lines = tasks.iter().map(encode_line).collect::<Vec<_>>();

    match write_lines(path, &lines) {
        Ok(()) => {
            info!(
                "event=store_save module=store status=ok path={} tasks={} duration_ms={}",
                path.display(),
                lines.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=store status=error path={} duration_ms={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

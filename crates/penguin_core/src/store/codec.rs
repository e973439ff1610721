//! Line codec for the task storage format.
//!
//! ```text
//! T | <0|1> | <description>
//! D | <0|1> | <description> | <yyyy-MM-dd>
//! E | <0|1> | <description> | <yyyy-MM-ddTHH:mm> | <yyyy-MM-ddTHH:mm>
//! ```

use crate::model::task::{Task, TaskValidationError, TaskVariant};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static FIELD_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\|\s*").expect("valid field separator regex"));

const EVENT_LINE_USAGE: &str =
    "E | <0/1> | <description> | yyyy-MM-ddTHH:mm | yyyy-MM-ddTHH:mm";

pub type CodecResult<T> = Result<T, CodecError>;

/// Decode failure that must abort the surrounding load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// `E` line with fewer than five fields. Only the count is kept so the
    /// description never reaches logs.
    MalformedEvent { fields: usize },
    /// `E` line whose date-times fail task validation.
    Validation(TaskValidationError),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedEvent { fields } => write!(
                f,
                "invalid event line with {fields} fields; expected: {EVENT_LINE_USAGE}"
            ),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedEvent { .. } => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for CodecError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Decodes one storage line into a task with the given ordinal.
///
/// Returns `Ok(None)` for lines that are skipped: blank, fewer than three
/// fields, unknown tag, or a `D` line whose due date is missing or invalid.
///
/// # Errors
/// - `MalformedEvent` for an `E` line with fewer than five fields.
/// - `Validation` for an `E` line with unparsable or reversed date-times.
pub fn decode_line(line: &str, ordinal: usize) -> CodecResult<Option<Task>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let fields = split_fields(trimmed);
    if fields.len() < 3 {
        return Ok(None);
    }

    let Some(variant) = TaskVariant::from_tag(fields[0]) else {
        return Ok(None);
    };
    let description = fields[2];

    let mut task = match variant {
        TaskVariant::Plain => Task::plain(description, ordinal)?,
        TaskVariant::Deadline => {
            let due = fields.get(3).copied().unwrap_or("");
            match Task::deadline(description, ordinal, due) {
                Ok(task) => task,
                Err(err) => {
                    warn!(
                        "event=line_decode module=store status=skipped tag=D fields={} error={}",
                        fields.len(),
                        err
                    );
                    return Ok(None);
                }
            }
        }
        TaskVariant::TimeRange => {
            if fields.len() < 5 {
                return Err(CodecError::MalformedEvent {
                    fields: fields.len(),
                });
            }
            Task::time_range(description, ordinal, fields[3], fields[4])?
        }
    };

    // Applied after construction so a failed construction never sees it.
    if is_done_flag(fields[1]) {
        task.mark_done();
    }
    Ok(Some(task))
}

/// Decodes lines in order until `capacity` tasks are collected.
///
/// Lines past the capacity are not inspected. Ordinals continue from
/// `first_ordinal` and only advance on decoded tasks.
///
/// # Errors
/// Returns the 1-based line number together with the first abort-level error.
pub fn decode_lines<'a, I>(
    lines: I,
    capacity: usize,
    first_ordinal: usize,
) -> Result<Vec<Task>, (usize, CodecError)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tasks = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        if tasks.len() >= capacity {
            break;
        }
        match decode_line(line, first_ordinal + tasks.len()) {
            Ok(Some(task)) => tasks.push(task),
            Ok(None) => {}
            Err(err) => return Err((index + 1, err)),
        }
    }
    Ok(tasks)
}

/// Encodes a task into its storage line.
pub fn encode_line(task: &Task) -> String {
    task.storage_line()
}

fn is_done_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

// Trailing empty fields are dropped, so `T | 0 |` has only two fields.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = FIELD_SEPARATOR_RE.split(line).collect::<Vec<_>>();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

//! Task record and its three variants.
//!
//! # Responsibility
//! - Validate raw date/time text at construction time.
//! - Render the user-facing display line and the storage line.
//!
//! # Invariants
//! - `TaskKind::TimeRange` always has `end` strictly after `start`.
//! - Description, ordinal and kind never change after construction.
//! - Descriptions never contain `|`, so every task has a lossless storage line.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// ISO calendar date accepted for deadlines (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// ISO local date-time accepted for time ranges (`yyyy-MM-ddTHH:mm`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DATE_TIME_WITH_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const FIELD_SEPARATOR: char = '|';
const PRETTY_DATE_FORMAT: &str = "%b %-d, %Y";
const PRETTY_DATE_TIME_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Construction-time validation failure for task temporal fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Deadline text is not a `yyyy-MM-dd` date.
    InvalidDate { raw: String },
    /// One of the time-range endpoints is not a `yyyy-MM-ddTHH:mm` date-time.
    InvalidDateTime { start: String, end: String },
    /// Time-range end is equal to or earlier than its start.
    EndNotAfterStart { start: String, end: String },
    /// Description contains the storage field separator `|`.
    DescriptionHasSeparator,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { raw } => write!(
                f,
                "invalid deadline format `{raw}`; use yyyy-MM-dd (e.g. 2025-09-02)"
            ),
            Self::InvalidDateTime { start, end } => write!(
                f,
                "invalid event date-time `{start}` / `{end}`; use yyyy-MM-ddTHH:mm (e.g. 2025-09-02T14:30)"
            ),
            Self::EndNotAfterStart { start, end } => {
                write!(f, "event end `{end}` must be after start `{start}`")
            }
            Self::DescriptionHasSeparator => {
                write!(f, "task description cannot contain `{FIELD_SEPARATOR}`")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Variant selector used by callers that create tasks from raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskVariant {
    Plain,
    Deadline,
    TimeRange,
}

impl TaskVariant {
    /// Single-letter tag used by both the display and storage lines.
    pub fn tag(self) -> char {
        match self {
            Self::Plain => 'T',
            Self::Deadline => 'D',
            Self::TimeRange => 'E',
        }
    }

    /// Resolves a storage tag letter, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "T" => Some(Self::Plain),
            "D" => Some(Self::Deadline),
            "E" => Some(Self::TimeRange),
            _ => None,
        }
    }

    /// Stable lowercase name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Deadline => "deadline",
            Self::TimeRange => "time_range",
        }
    }
}

/// Variant-specific payload of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// Description only.
    Plain,
    /// Due on a calendar date.
    Deadline { due: NaiveDate },
    /// Occupies `[start, end)` in local time.
    TimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    pub fn variant(&self) -> TaskVariant {
        match self {
            Self::Plain => TaskVariant::Plain,
            Self::Deadline { .. } => TaskVariant::Deadline,
            Self::TimeRange { .. } => TaskVariant::TimeRange,
        }
    }
}

/// Canonical task record.
///
/// Deserialization goes through the same validation as the constructors, so a
/// reversed time range cannot be smuggled in through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    description: String,
    completed: bool,
    /// Zero-based position at creation time. Not renumbered on delete.
    ordinal: usize,
    kind: TaskKind,
}

#[derive(Deserialize)]
struct TaskWire {
    description: String,
    completed: bool,
    ordinal: usize,
    kind: TaskKind,
}

impl TryFrom<TaskWire> for Task {
    type Error = TaskValidationError;

    fn try_from(wire: TaskWire) -> Result<Self, Self::Error> {
        ensure_storable_description(&wire.description)?;
        if let TaskKind::TimeRange { start, end } = wire.kind {
            if end <= start {
                return Err(TaskValidationError::EndNotAfterStart {
                    start: format_iso_date_time(&start),
                    end: format_iso_date_time(&end),
                });
            }
        }
        Ok(Self {
            description: wire.description,
            completed: wire.completed,
            ordinal: wire.ordinal,
            kind: wire.kind,
        })
    }
}

impl Task {
    /// Creates a plain task.
    ///
    /// # Errors
    /// - `DescriptionHasSeparator` when the description contains `|`.
    pub fn plain(
        description: impl Into<String>,
        ordinal: usize,
    ) -> Result<Self, TaskValidationError> {
        Self::with_kind(description, ordinal, TaskKind::Plain)
    }

    /// Creates a deadline task from raw `yyyy-MM-dd` text.
    ///
    /// # Errors
    /// - `InvalidDate` when `due` does not parse; the message echoes the raw text.
    pub fn deadline(
        description: impl Into<String>,
        ordinal: usize,
        due: &str,
    ) -> Result<Self, TaskValidationError> {
        let due = parse_date(due)?;
        Self::with_kind(description, ordinal, TaskKind::Deadline { due })
    }

    /// Creates a time-range task from raw `yyyy-MM-ddTHH:mm` text.
    ///
    /// # Errors
    /// - `InvalidDateTime` when either endpoint does not parse.
    /// - `EndNotAfterStart` when `end <= start`.
    pub fn time_range(
        description: impl Into<String>,
        ordinal: usize,
        start: &str,
        end: &str,
    ) -> Result<Self, TaskValidationError> {
        let (start_at, end_at) = match (parse_date_time(start), parse_date_time(end)) {
            (Some(start_at), Some(end_at)) => (start_at, end_at),
            _ => {
                return Err(TaskValidationError::InvalidDateTime {
                    start: start.trim().to_string(),
                    end: end.trim().to_string(),
                })
            }
        };
        if end_at <= start_at {
            return Err(TaskValidationError::EndNotAfterStart {
                start: start.trim().to_string(),
                end: end.trim().to_string(),
            });
        }
        Self::with_kind(
            description,
            ordinal,
            TaskKind::TimeRange {
                start: start_at,
                end: end_at,
            },
        )
    }

    /// Creates a task of `variant` from positional raw fields.
    ///
    /// Missing fields default to empty text, which then fails date parsing for
    /// the temporal variants.
    pub fn from_fields(
        variant: TaskVariant,
        description: impl Into<String>,
        ordinal: usize,
        fields: &[&str],
    ) -> Result<Self, TaskValidationError> {
        let field = |index: usize| fields.get(index).copied().unwrap_or("");
        match variant {
            TaskVariant::Plain => Self::plain(description, ordinal),
            TaskVariant::Deadline => Self::deadline(description, ordinal, field(0)),
            TaskVariant::TimeRange => Self::time_range(description, ordinal, field(0), field(1)),
        }
    }

    fn with_kind(
        description: impl Into<String>,
        ordinal: usize,
        kind: TaskKind,
    ) -> Result<Self, TaskValidationError> {
        let description = description.into();
        ensure_storable_description(&description)?;
        Ok(Self {
            description,
            completed: false,
            ordinal,
            kind,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn variant(&self) -> TaskVariant {
        self.kind.variant()
    }

    pub fn mark_done(&mut self) {
        self.completed = true;
    }

    pub fn mark_undone(&mut self) {
        self.completed = false;
    }

    /// Renders the user-facing line, e.g. `[X] [D] return book (by: Sep 3, 2025)`.
    pub fn display_line(&self) -> String {
        let marker = if self.completed { 'X' } else { ' ' };
        let tag = self.variant().tag();
        match &self.kind {
            TaskKind::Plain => format!("[{marker}] [{tag}] {}", self.description),
            TaskKind::Deadline { due } => format!(
                "[{marker}] [{tag}] {} (by: {})",
                self.description,
                due.format(PRETTY_DATE_FORMAT)
            ),
            TaskKind::TimeRange { start, end } => format!(
                "[{marker}] [{tag}] {} (from: {} to: {})",
                self.description,
                start.format(PRETTY_DATE_TIME_FORMAT),
                end.format(PRETTY_DATE_TIME_FORMAT)
            ),
        }
    }

    /// Renders the `|`-delimited storage line.
    ///
    /// Field order: `tag | done | description | variant fields...`.
    pub fn storage_line(&self) -> String {
        let tag = self.variant().tag();
        let done = if self.completed { "1" } else { "0" };
        match &self.kind {
            TaskKind::Plain => format!("{tag} | {done} | {}", self.description),
            TaskKind::Deadline { due } => format!(
                "{tag} | {done} | {} | {}",
                self.description,
                due.format(DATE_FORMAT)
            ),
            TaskKind::TimeRange { start, end } => format!(
                "{tag} | {done} | {} | {} | {}",
                self.description,
                format_iso_date_time(start),
                format_iso_date_time(end)
            ),
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_line())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, TaskValidationError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| {
        TaskValidationError::InvalidDate {
            raw: trimmed.to_string(),
        }
    })
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATE_TIME_WITH_SECONDS_FORMAT))
        .ok()
}

// The storage line is `|`-delimited with no escaping.
fn ensure_storable_description(description: &str) -> Result<(), TaskValidationError> {
    if description.contains(FIELD_SEPARATOR) {
        return Err(TaskValidationError::DescriptionHasSeparator);
    }
    Ok(())
}

// Seconds and fractions are only written when present, so every accepted
// input reads back to the same instant.
fn format_iso_date_time(value: &NaiveDateTime) -> String {
    if value.second() == 0 && value.nanosecond() == 0 {
        value.format(DATE_TIME_FORMAT).to_string()
    } else {
        value.format(DATE_TIME_WITH_SECONDS_FORMAT).to_string()
    }
}

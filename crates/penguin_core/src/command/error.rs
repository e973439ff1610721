//! User-facing error taxonomy for the command boundary.

use crate::model::task::TaskValidationError;
use crate::search::fuzzy::SearchError;
use crate::service::task_list::{IndexRef, TaskListError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandOutcome<T> = Result<T, CommandError>;

/// Recoverable command failure rendered as a one-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unrecognized verb, or empty input.
    UnknownCommand(String),
    /// Required argument missing or blank; carries the usage string.
    MissingArgument { expected: &'static str },
    InvalidIndex(IndexRef),
    InvalidFormat(TaskValidationError),
    Search(SearchError),
    /// Backing-store failure, already rendered.
    Io(String),
    /// Anything else surfaced by the collection.
    Internal(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(verb) => write!(f, "unknown command: \"{verb}\""),
            Self::MissingArgument { expected } => {
                write!(f, "missing or invalid arguments; expected: {expected}")
            }
            Self::InvalidIndex(index) => write!(f, "invalid task index: {index}"),
            Self::InvalidFormat(err) => write!(f, "{err}"),
            Self::Search(err) => write!(f, "{err}"),
            Self::Io(message) => write!(f, "storage failure: {message}"),
            Self::Internal(message) => write!(f, "{message}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFormat(err) => Some(err),
            Self::Search(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskListError> for CommandError {
    fn from(value: TaskListError) -> Self {
        match value {
            TaskListError::InvalidIndex(index) => Self::InvalidIndex(index),
            TaskListError::Validation(err) => Self::InvalidFormat(err),
            TaskListError::Search(err) => Self::Search(err),
            TaskListError::Store(err) => Self::Io(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

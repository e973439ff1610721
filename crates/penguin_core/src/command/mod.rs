//! Command grammar and dispatch onto a `TaskList`.
//!
//! # Responsibility
//! - Map `verb argument` lines to typed commands.
//! - Convert 1-based user indices before calling the collection.
//! - Fold every collection failure into the `CommandError` taxonomy.
//!
//! # Invariants
//! - Commands never panic on user input.
//! - Only `bye` produces an exit result.

pub mod error;
pub mod parser;

pub use error::{CommandError, CommandOutcome};
pub use parser::parse;

use crate::model::task::TaskVariant;
use crate::service::task_list::{IndexRef, TaskList};

/// Parsed command ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { raw: String, variant: TaskVariant },
    Mark { raw: String },
    Unmark { raw: String },
    Delete { raw: String },
    Find { query: String },
    Bye,
}

/// Message to display plus whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
    pub is_exit: bool,
}

impl CommandResult {
    pub fn of(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_exit: false,
        }
    }

    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_exit: true,
        }
    }
}

impl Command {
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Bye)
    }

    /// Stable verb name for logs.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add { .. } => "add",
            Self::Mark { .. } => "mark",
            Self::Unmark { .. } => "unmark",
            Self::Delete { .. } => "delete",
            Self::Find { .. } => "find",
            Self::Bye => "bye",
        }
    }

    /// Runs the command against `tasks`.
    pub fn execute(&self, tasks: &mut TaskList) -> CommandOutcome<CommandResult> {
        let message = match self {
            Self::List => tasks.list(),
            Self::Add { raw, variant } => tasks.add(raw, *variant)?,
            Self::Mark { raw } => {
                let index = resolve_index(raw, tasks)?;
                tasks.mark_done(index)?
            }
            Self::Unmark { raw } => {
                let index = resolve_index(raw, tasks)?;
                tasks.mark_undone(index)?
            }
            Self::Delete { raw } => {
                let index = resolve_index(raw, tasks)?;
                tasks.delete(index)?
            }
            Self::Find { query } => render_hits(tasks, query)?,
            Self::Bye => return Ok(CommandResult::exit("bye")),
        };
        Ok(CommandResult::of(message))
    }
}

/// Parses a 1-based index and converts it to a checked 0-based one.
fn resolve_index(raw: &str, tasks: &TaskList) -> CommandOutcome<i64> {
    let trimmed = raw.trim();
    let position = trimmed
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidIndex(IndexRef::Raw(trimmed.to_string())))?;
    let index = position.saturating_sub(1);
    if tasks.is_invalid_index(index) {
        return Err(CommandError::InvalidIndex(IndexRef::Position(position)));
    }
    Ok(index)
}

fn render_hits(tasks: &TaskList, query: &str) -> CommandOutcome<String> {
    let hits = tasks.find(query)?;
    if hits.is_empty() {
        return Ok("No matching tasks found.".to_string());
    }
    let lines = hits
        .iter()
        .map(|hit| format!("{}. {}", hit.position(), hit.task.display_line()))
        .collect::<Vec<_>>();
    Ok(format!(
        "Here are the matching tasks in your list:\n{}",
        lines.join("\n")
    ))
}

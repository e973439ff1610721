//! Verb + argument grammar for single-line commands.

use super::error::{CommandError, CommandOutcome};
use super::Command;
use crate::model::task::TaskVariant;

pub const TODO_USAGE: &str = "todo <description>";
pub const DEADLINE_USAGE: &str = "deadline <description> /<yyyy-MM-dd>";
pub const EVENT_USAGE: &str = "event <description> /<yyyy-MM-ddTHH:mm> /<yyyy-MM-ddTHH:mm>";
pub const MARK_USAGE: &str = "mark <index>";
pub const UNMARK_USAGE: &str = "unmark <index>";
pub const DELETE_USAGE: &str = "delete <index>";
pub const FIND_USAGE: &str = "find <query>";

/// Parses one raw input line into a command.
///
/// # Errors
/// - `UnknownCommand` for empty input or an unrecognized verb.
/// - `MissingArgument` when a verb that needs an argument has none.
pub fn parse(input: &str) -> CommandOutcome<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CommandError::UnknownCommand("(empty)".to_string()));
    }

    let (verb, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    match verb {
        "list" => Ok(Command::List),
        "todo" => add(arg, TaskVariant::Plain, TODO_USAGE),
        "deadline" => add(arg, TaskVariant::Deadline, DEADLINE_USAGE),
        "event" => add(arg, TaskVariant::TimeRange, EVENT_USAGE),
        "mark" => require_arg(arg, MARK_USAGE).map(|raw| Command::Mark { raw }),
        "unmark" => require_arg(arg, UNMARK_USAGE).map(|raw| Command::Unmark { raw }),
        "delete" => require_arg(arg, DELETE_USAGE).map(|raw| Command::Delete { raw }),
        "find" => require_arg(arg, FIND_USAGE).map(|query| Command::Find { query }),
        "bye" => Ok(Command::Bye),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn add(arg: &str, variant: TaskVariant, usage: &'static str) -> CommandOutcome<Command> {
    let raw = require_arg(arg, usage)?;
    Ok(Command::Add { raw, variant })
}

fn require_arg(arg: &str, expected: &'static str) -> CommandOutcome<String> {
    if arg.trim().is_empty() {
        return Err(CommandError::MissingArgument { expected });
    }
    Ok(arg.to_string())
}

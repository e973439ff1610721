//! Request/response command loop shared by every front end.
//!
//! # Responsibility
//! - Read one line, execute it fully, display the result, repeat.
//! - Save the collection once when the loop ends.
//!
//! # Invariants
//! - Command errors are displayed and never end the loop.
//! - Only `bye` or end of input ends the loop.
//! - A failed save is reported and leaves in-memory tasks intact.

pub mod channel;

use crate::command::parse;
use crate::service::task_list::{TaskList, TaskListError};
use log::{debug, info, warn};

/// Front-end surface driven by [`run_session`].
pub trait Ui {
    fn show_intro(&mut self);
    fn show_text(&mut self, text: &str);
    fn show_error(&mut self, message: &str);
    /// Blocks for the next input line. `None` means input is closed.
    fn read_line(&mut self) -> Option<String>;
    fn show_exit(&mut self);
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub errors: usize,
    /// Whether the final save reached the backing file.
    pub saved: bool,
}

/// Runs the command loop until `bye` or end of input, then saves.
pub fn run_session<U: Ui + ?Sized>(ui: &mut U, tasks: &mut TaskList) -> SessionSummary {
    let mut summary = SessionSummary::default();
    ui.show_intro();
    info!(
        "event=session_start module=session status=ok tasks={} bound={}",
        tasks.size(),
        tasks.store_path().is_some()
    );

    while let Some(line) = ui.read_line() {
        summary.commands += 1;
        let outcome = parse(&line).and_then(|command| {
            debug!("event=command module=session verb={}", command.verb());
            command.execute(tasks)
        });

        match outcome {
            Ok(result) if result.is_exit => break,
            Ok(result) => ui.show_text(&result.message),
            Err(err) => {
                summary.errors += 1;
                ui.show_error(&err.to_string());
            }
        }
    }

    summary.saved = persist(ui, tasks);
    ui.show_exit();
    info!(
        "event=session_end module=session status=ok commands={} errors={} saved={}",
        summary.commands, summary.errors, summary.saved
    );
    summary
}

fn persist<U: Ui + ?Sized>(ui: &mut U, tasks: &TaskList) -> bool {
    match tasks.save() {
        Ok(()) => true,
        Err(TaskListError::Unbound) => false,
        Err(err) => {
            warn!("event=session_save module=session status=error error={err}");
            ui.show_error(&format!("failed to save tasks: {err}"));
            false
        }
    }
}

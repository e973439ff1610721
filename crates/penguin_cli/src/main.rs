//! Console entry point for the Penguin task tracker.
//!
//! # Responsibility
//! - Parse configuration, start logging and open the backing store.
//! - Hand stdin/stdout to the shared session loop.

mod args;
mod console;

use args::Cli;
use clap::Parser;
use console::ConsoleUi;
use log::warn;
use penguin_core::{init_logging, run_session, TaskList, TaskListError};
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_level(), cli.log_dir()) {
        eprintln!("penguin: file logging disabled: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("penguin: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), TaskListError> {
    let mut tasks = open_tasks(cli)?;
    let mut ui = ConsoleUi::new(BufReader::new(io::stdin()), io::stdout());
    run_session(&mut ui, &mut tasks);
    Ok(())
}

/// Loads the backing store, or falls back to an unbound empty list so an
/// unreadable file is never overwritten on exit.
fn open_tasks(cli: &Cli) -> Result<TaskList, TaskListError> {
    if cli.no_store {
        return TaskList::new(cli.limit);
    }

    match TaskList::open(cli.limit, &cli.data_file) {
        Ok(tasks) => Ok(tasks),
        Err(err @ TaskListError::Store(_)) => {
            warn!("event=store_open module=cli status=fallback error={err}");
            eprintln!("penguin: could not load tasks ({err}); starting with an empty list that will not be saved");
            TaskList::new(cli.limit)
        }
        Err(err) => Err(err),
    }
}

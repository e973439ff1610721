//! Core domain logic for the Penguin task tracker.
//! This crate is the single source of truth for task invariants.

pub mod command;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod session;
pub mod store;

pub use command::{parse, Command, CommandError, CommandOutcome, CommandResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Task, TaskKind, TaskValidationError, TaskVariant};
pub use search::fuzzy::{find_matches, SearchError, SearchHit, SearchResult};
pub use service::task_list::{IndexRef, TaskList, TaskListError, TaskListResult};
pub use session::channel::{input_channel, ChannelUi, InputReceiver, InputSender, UiEvent};
pub use session::{run_session, SessionSummary, Ui};
pub use store::{decode_line, encode_line, CodecError, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

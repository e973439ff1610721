//! Cross-thread input hand-off for non-console front ends.
//!
//! # Responsibility
//! - Carry user lines from a UI thread to the engine thread.
//! - Carry display events back without blocking the engine.
//!
//! # Invariants
//! - `InputReceiver::recv` blocks until a line arrives or every sender closed.
//! - Blank lines are never queued.

use super::Ui;
use std::sync::mpsc::{self, Receiver, Sender};

const INTRO_MESSAGE: &str = "Hello! I'm Penguin. What can I do for you today?";
const EXIT_MESSAGE: &str = "Bye. Hope to see you again soon!";

/// Creates a connected single-producer/single-consumer input pair.
pub fn input_channel() -> (InputSender, InputReceiver) {
    let (tx, rx) = mpsc::channel();
    (InputSender { tx: Some(tx) }, InputReceiver { rx })
}

/// Producer half, owned by the UI thread.
#[derive(Debug)]
pub struct InputSender {
    tx: Option<Sender<String>>,
}

impl InputSender {
    /// Queues one line. Returns `false` when the line is blank or the channel
    /// is closed.
    pub fn send(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        match &self.tx {
            Some(tx) => tx.send(text.to_string()).is_ok(),
            None => false,
        }
    }

    /// Closes the channel; the engine sees end of input after draining.
    pub fn close(&mut self) {
        self.tx = None;
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_none()
    }
}

/// Consumer half, owned by the engine thread.
#[derive(Debug)]
pub struct InputReceiver {
    rx: Receiver<String>,
}

impl InputReceiver {
    /// Blocks for the next line. `None` once closed and drained.
    pub fn recv(&self) -> Option<String> {
        self.rx.recv().ok()
    }
}

/// Display event emitted by [`ChannelUi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Intro(String),
    Text(String),
    Error(String),
    Exit(String),
}

/// `Ui` backed by an input channel and an output event queue.
#[derive(Debug)]
pub struct ChannelUi {
    input: InputReceiver,
    output: Sender<UiEvent>,
}

impl ChannelUi {
    pub fn new(input: InputReceiver, output: Sender<UiEvent>) -> Self {
        Self { input, output }
    }

    // A front end that stopped listening is not an engine error.
    fn emit(&self, event: UiEvent) {
        let _ = self.output.send(event);
    }
}

impl Ui for ChannelUi {
    fn show_intro(&mut self) {
        self.emit(UiEvent::Intro(INTRO_MESSAGE.to_string()));
    }

    fn show_text(&mut self, text: &str) {
        self.emit(UiEvent::Text(text.to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.emit(UiEvent::Error(message.to_string()));
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.recv()
    }

    fn show_exit(&mut self) {
        self.emit(UiEvent::Exit(EXIT_MESSAGE.to_string()));
    }
}

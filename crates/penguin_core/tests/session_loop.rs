use penguin_core::{
    input_channel, run_session, ChannelUi, TaskList, TaskVariant, Ui, UiEvent,
};
use std::collections::VecDeque;
use std::fs;
use std::sync::mpsc;
use std::thread;

#[derive(Default)]
struct ScriptedUi {
    inputs: VecDeque<String>,
    texts: Vec<String>,
    errors: Vec<String>,
    intro_shown: bool,
    exit_shown: bool,
}

impl ScriptedUi {
    fn new(lines: &[&str]) -> Self {
        Self {
            inputs: lines.iter().map(|line| line.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Ui for ScriptedUi {
    fn show_intro(&mut self) {
        self.intro_shown = true;
    }

    fn show_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn read_line(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }

    fn show_exit(&mut self) {
        self.exit_shown = true;
    }
}

#[test]
fn session_runs_until_bye_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let mut tasks = TaskList::open(10, &path).unwrap();
    let mut ui = ScriptedUi::new(&[
        "todo read book",
        "deadline return book /2025-09-02",
        "mark 1",
        "bogus",
        "bye",
        "todo never reached",
    ]);

    let summary = run_session(&mut ui, &mut tasks);

    assert_eq!(summary.commands, 5);
    assert_eq!(summary.errors, 1);
    assert!(summary.saved);
    assert!(ui.intro_shown);
    assert!(ui.exit_shown);
    assert_eq!(ui.texts.len(), 3);
    assert_eq!(ui.errors, vec!["unknown command: \"bogus\"".to_string()]);
    assert_eq!(ui.inputs.len(), 1);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "T | 1 | read book\nD | 0 | return book | 2025-09-02\n"
    );
}

#[test]
fn end_of_input_also_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let mut tasks = TaskList::open(10, &path).unwrap();
    let mut ui = ScriptedUi::new(&["todo read book"]);

    let summary = run_session(&mut ui, &mut tasks);

    assert!(summary.saved);
    assert!(ui.exit_shown);
    assert_eq!(fs::read_to_string(&path).unwrap(), "T | 0 | read book\n");
}

#[test]
fn errors_do_not_stop_the_loop() {
    let mut tasks = TaskList::new(10).unwrap();
    let mut ui = ScriptedUi::new(&["", "mark", "delete 4", "todo stretch", "list"]);

    let summary = run_session(&mut ui, &mut tasks);

    assert_eq!(summary.errors, 3);
    assert!(!summary.saved);
    assert_eq!(ui.texts.last().unwrap(), "1. [ ] [T] stretch");
}

#[test]
fn failed_save_is_reported_and_tasks_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let mut tasks = TaskList::open(10, &path).unwrap();
    tasks.add("read book", TaskVariant::Plain).unwrap();
    fs::create_dir(&path).unwrap();

    let mut ui = ScriptedUi::new(&["bye"]);
    let summary = run_session(&mut ui, &mut tasks);

    assert!(!summary.saved);
    assert_eq!(ui.errors.len(), 1);
    assert!(ui.errors[0].starts_with("failed to save tasks"));
    assert_eq!(tasks.size(), 1);
}

#[test]
fn channel_ui_hands_input_across_threads() {
    let (mut sender, receiver) = input_channel();
    let (event_tx, event_rx) = mpsc::channel();

    let producer = thread::spawn(move || {
        assert!(sender.send("todo read book"));
        assert!(!sender.send("   "));
        assert!(sender.send("list"));
        sender.close();
    });

    let mut tasks = TaskList::new(10).unwrap();
    let mut ui = ChannelUi::new(receiver, event_tx);
    let summary = run_session(&mut ui, &mut tasks);
    producer.join().unwrap();
    drop(ui);

    let events = event_rx.iter().collect::<Vec<_>>();
    assert_eq!(summary.commands, 2);
    assert!(matches!(events.first(), Some(UiEvent::Intro(_))));
    assert!(matches!(events.last(), Some(UiEvent::Exit(_))));
    assert_eq!(
        events[2],
        UiEvent::Text("1. [ ] [T] read book".to_string())
    );
}

use penguin_core::{
    IndexRef, SearchError, TaskKind, TaskList, TaskListError, TaskValidationError, TaskVariant,
};

fn list_with(descriptions: &[&str]) -> TaskList {
    let mut tasks = TaskList::new(20).unwrap();
    for description in descriptions {
        tasks.add(description, TaskVariant::Plain).unwrap();
    }
    tasks
}

#[test]
fn new_rejects_zero_limit() {
    assert!(matches!(
        TaskList::new(0),
        Err(TaskListError::InvalidLimit(0))
    ));
}

#[test]
fn add_plain_reports_line_and_count() {
    let mut tasks = TaskList::new(5).unwrap();
    let message = tasks.add("read book", TaskVariant::Plain).unwrap();

    assert!(message.contains("[ ] [T] read book"));
    assert!(message.ends_with("Now you have 1 task in the list."));
    assert_eq!(tasks.size(), 1);

    let message = tasks.add("write essay", TaskVariant::Plain).unwrap();
    assert!(message.ends_with("Now you have 2 tasks in the list."));
}

#[test]
fn add_splits_variant_fields_on_space_slash() {
    let mut tasks = TaskList::new(5).unwrap();
    tasks
        .add("return book /2025-09-02", TaskVariant::Deadline)
        .unwrap();
    tasks
        .add(
            "project meeting /2025-09-02T14:30 /2025-09-02T16:00",
            TaskVariant::TimeRange,
        )
        .unwrap();

    let deadline = tasks.get(0).unwrap();
    assert_eq!(deadline.description(), "return book");
    assert!(matches!(deadline.kind(), TaskKind::Deadline { .. }));

    let event = tasks.get(1).unwrap();
    assert_eq!(event.description(), "project meeting");
    assert_eq!(event.ordinal(), 1);
    assert!(matches!(event.kind(), TaskKind::TimeRange { .. }));
}

#[test]
fn add_propagates_format_errors_without_mutation() {
    let mut tasks = TaskList::new(5).unwrap();

    let err = tasks
        .add("return book /June 6th", TaskVariant::Deadline)
        .unwrap_err();
    assert!(matches!(
        err,
        TaskListError::Validation(TaskValidationError::InvalidDate { ref raw }) if raw == "June 6th"
    ));

    let err = tasks
        .add("standup /2025-08-07T10:00", TaskVariant::TimeRange)
        .unwrap_err();
    assert!(matches!(
        err,
        TaskListError::Validation(TaskValidationError::InvalidDateTime { .. })
    ));
    assert!(tasks.is_empty());
}

#[test]
fn add_rejects_description_with_field_separator() {
    let mut tasks = TaskList::new(5).unwrap();

    let err = tasks
        .add("pay rent | utilities /2025-09-01", TaskVariant::Deadline)
        .unwrap_err();
    assert!(matches!(
        err,
        TaskListError::Validation(TaskValidationError::DescriptionHasSeparator)
    ));
    assert!(tasks.is_empty());
}

#[test]
fn add_at_capacity_returns_notice_and_keeps_size() {
    let mut tasks = TaskList::new(2).unwrap();
    tasks.add("one", TaskVariant::Plain).unwrap();
    tasks.add("two", TaskVariant::Plain).unwrap();

    for _ in 0..3 {
        let message = tasks.add("three", TaskVariant::Plain).unwrap();
        assert!(message.contains("full"));
        assert!(message.contains("limit 2"));
        assert_eq!(tasks.size(), 2);
    }
}

#[test]
fn list_renders_numbered_lines_or_empty_notice() {
    let empty = TaskList::new(3).unwrap();
    assert_eq!(empty.list(), "No tasks in your list yet.");

    let tasks = list_with(&["read book", "write essay"]);
    assert_eq!(
        tasks.list(),
        "1. [ ] [T] read book\n2. [ ] [T] write essay"
    );
}

#[test]
fn is_invalid_index_matches_bounds() {
    let tasks = list_with(&["a", "b", "c"]);
    for index in [-5, -1, 3, 4, i64::MAX, i64::MIN] {
        assert!(tasks.is_invalid_index(index), "index {index}");
    }
    for index in 0..3 {
        assert!(!tasks.is_invalid_index(index), "index {index}");
    }
}

#[test]
fn mark_and_unmark_toggle_completion() {
    let mut tasks = list_with(&["read book"]);

    let message = tasks.mark_done(0).unwrap();
    assert!(message.contains("[X] [T] read book"));
    assert!(tasks.get(0).unwrap().is_completed());

    let message = tasks.mark_undone(0).unwrap();
    assert!(message.contains("[ ] [T] read book"));
    assert!(!tasks.get(0).unwrap().is_completed());
}

#[test]
fn mutations_reject_invalid_indices_with_one_based_value() {
    let mut tasks = list_with(&["read book"]);

    for err in [
        tasks.mark_done(5).unwrap_err(),
        tasks.mark_undone(-1).unwrap_err(),
        tasks.delete(1).unwrap_err(),
    ] {
        assert!(matches!(err, TaskListError::InvalidIndex(IndexRef::Position(_))));
    }
    let err = tasks.mark_done(5).unwrap_err();
    assert_eq!(err.to_string(), "invalid task index: 6");
    assert_eq!(tasks.size(), 1);
    assert!(!tasks.get(0).unwrap().is_completed());
}

#[test]
fn delete_reports_remaining_count_and_keeps_ordinals() {
    let mut tasks = list_with(&["one", "two", "three"]);

    let message = tasks.delete(0).unwrap();
    assert!(message.contains("[ ] [T] one"));
    assert!(message.ends_with("Now you have 2 tasks in the list."));

    let message = tasks.delete(0).unwrap();
    assert!(message.ends_with("Now you have 1 task in the list."));

    let survivor = tasks.get(0).unwrap();
    assert_eq!(survivor.description(), "three");
    assert_eq!(survivor.ordinal(), 2);
    assert_eq!(tasks.list(), "1. [ ] [T] three");
}

#[test]
fn find_delegates_to_search() {
    let tasks = list_with(&["read book", "booking venue", "team meeting notes"]);

    let hits = tasks.find("book").unwrap();
    let positions = hits.iter().map(|hit| hit.position()).collect::<Vec<_>>();
    assert_eq!(positions, vec![1, 2]);

    assert!(matches!(
        tasks.find(" "),
        Err(TaskListError::Search(SearchError::EmptyQuery))
    ));
}

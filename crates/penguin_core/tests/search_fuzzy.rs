use penguin_core::{find_matches, SearchError, Task};

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::plain("read book", 0).unwrap(),
        Task::plain("booking venue", 1).unwrap(),
        Task::plain("team meeting notes", 2).unwrap(),
        Task::plain("Project status Aug update", 3).unwrap(),
    ]
}

fn matched_indices(query: &str, tasks: &[Task]) -> Vec<usize> {
    find_matches(query, tasks)
        .unwrap()
        .into_iter()
        .map(|hit| hit.index)
        .collect()
}

#[test]
fn bare_token_matches_substrings_across_tasks() {
    assert_eq!(matched_indices("book", &sample_tasks()), vec![0, 1]);
}

#[test]
fn quoted_phrase_matches_exact_phrase_only() {
    assert_eq!(matched_indices("\"team meeting\"", &sample_tasks()), vec![2]);
    assert!(matched_indices("\"meeting team\"", &sample_tasks()).is_empty());
}

#[test]
fn one_substitution_matches_same_length_word_only() {
    assert_eq!(matched_indices("bokk", &sample_tasks()), vec![0]);
}

#[test]
fn one_deletion_matches_longer_word() {
    assert_eq!(matched_indices("meetng", &sample_tasks()), vec![2]);
}

#[test]
fn short_tokens_get_no_typo_tolerance() {
    assert!(matched_indices("bok", &sample_tasks()).is_empty());
}

#[test]
fn all_terms_must_match() {
    assert_eq!(matched_indices("project Aug", &sample_tasks()), vec![3]);
    assert!(matched_indices("project book", &sample_tasks()).is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(matched_indices("READ", &sample_tasks()), vec![0]);
}

#[test]
fn hits_keep_original_positions() {
    let tasks = sample_tasks();
    let hits = find_matches("venue", &tasks).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 1);
    assert_eq!(hits[0].position(), 2);
    assert_eq!(hits[0].task.description(), "booking venue");
}

#[test]
fn deadline_dates_are_searchable_through_display_line() {
    let tasks = vec![
        Task::deadline("return book", 0, "2025-09-03").unwrap(),
        Task::plain("read book", 1).unwrap(),
    ];
    assert_eq!(matched_indices("sep", &tasks), vec![0]);
}

#[test]
fn blank_query_is_an_error() {
    let tasks = sample_tasks();
    assert_eq!(
        find_matches("   ", &tasks).unwrap_err(),
        SearchError::EmptyQuery
    );
    assert_eq!(
        find_matches("\"\"", &tasks).unwrap_err(),
        SearchError::EmptyQuery
    );
}

#[test]
fn unterminated_quote_is_treated_as_text() {
    let tasks = vec![
        Task::plain("say \"hi there", 0).unwrap(),
        Task::plain("say hi", 1).unwrap(),
    ];
    assert_eq!(matched_indices("\"hi", &tasks), vec![0]);
}

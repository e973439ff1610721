//! Substring, partial-word and one-edit search over display lines.
//!
//! # Responsibility
//! - Provide `find_matches` over an ordered task slice.
//! - Keep term classification and edit-distance rules in one place.
//!
//! # Invariants
//! - Haystack and query are compared in lowercase.
//! - Blank queries are rejected instead of matching everything.

use crate::model::task::Task;
use log::debug;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum token/word length for the partial-word rule.
const PARTIAL_WORD_MIN_CHARS: usize = 3;
/// Minimum token/word length for the one-edit rule.
const TYPO_MIN_CHARS: usize = 4;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Query is blank or tokenizes to no terms.
    EmptyQuery,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "nothing to search for"),
        }
    }
}

impl Error for SearchError {}

/// One matching task and its pre-filter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// Zero-based position in the searched slice.
    pub index: usize,
    pub task: &'a Task,
}

impl SearchHit<'_> {
    /// One-based number shown to users.
    pub fn position(&self) -> usize {
        self.index + 1
    }
}

/// Returns every task whose display line matches all query terms.
///
/// # Errors
/// - `EmptyQuery` when `query` is blank or yields no terms.
pub fn find_matches<'a>(query: &str, tasks: &'a [Task]) -> SearchResult<Vec<SearchHit<'a>>> {
    if query.trim().is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    let terms = tokenize(&query.to_lowercase());
    if terms.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let hits = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| matches_all(&task.display_line().to_lowercase(), &terms))
        .map(|(index, task)| SearchHit { index, task })
        .collect::<Vec<_>>();

    debug!(
        "event=task_find module=search status=ok terms={} scanned={} hits={}",
        terms.len(),
        tasks.len(),
        hits.len()
    );
    Ok(hits)
}

/// Splits a query into terms.
///
/// A term is either the literal text between a pair of double quotes or a
/// whitespace-delimited token. An unterminated quote is an ordinary character.
pub fn tokenize(query: &str) -> Vec<String> {
    let chars = query.chars().collect::<Vec<_>>();
    let mut terms = Vec::new();
    let mut cursor = 0;

    while cursor < chars.len() {
        if chars[cursor].is_whitespace() {
            cursor += 1;
            continue;
        }

        if chars[cursor] == '"' {
            let closing = chars[cursor + 1..]
                .iter()
                .position(|ch| *ch == '"')
                .map(|offset| cursor + 1 + offset);
            if let Some(closing) = closing {
                let phrase = chars[cursor + 1..closing].iter().collect::<String>();
                if !phrase.trim().is_empty() {
                    terms.push(phrase);
                }
                cursor = closing + 1;
                continue;
            }
        }

        let start = cursor;
        while cursor < chars.len() && !chars[cursor].is_whitespace() {
            cursor += 1;
        }
        terms.push(chars[start..cursor].iter().collect());
    }

    terms
}

/// Returns whether `haystack` matches every term. Both must be lowercase.
pub fn matches_all(haystack: &str, terms: &[String]) -> bool {
    let words = haystack
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();
    terms
        .iter()
        .all(|term| term_matches(haystack, &words, term))
}

fn term_matches(haystack: &str, words: &[&str], term: &str) -> bool {
    if term.contains(' ') {
        return haystack.contains(term);
    }
    if haystack.contains(term) {
        return true;
    }

    let term_chars = term.chars().count();
    if term_chars >= PARTIAL_WORD_MIN_CHARS
        && words.iter().any(|word| {
            word.chars().count() >= PARTIAL_WORD_MIN_CHARS && word.contains(term)
        })
    {
        return true;
    }

    term_chars >= TYPO_MIN_CHARS
        && words
            .iter()
            .any(|word| word.chars().count() >= TYPO_MIN_CHARS && within_one_edit(word, term))
}

/// Single-pass check for Levenshtein distance `<= 1`.
///
/// Exits as soon as a second edit is found.
pub fn within_one_edit(left: &str, right: &str) -> bool {
    let left = left.chars().collect::<Vec<_>>();
    let right = right.chars().collect::<Vec<_>>();
    if left.len().abs_diff(right.len()) > 1 {
        return false;
    }

    let (mut i, mut j, mut edits) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] == right[j] {
            i += 1;
            j += 1;
            continue;
        }

        edits += 1;
        if edits > 1 {
            return false;
        }
        match left.len().cmp(&right.len()) {
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
            Ordering::Greater => i += 1,
            Ordering::Less => j += 1,
        }
    }

    edits + (left.len() - i) + (right.len() - j) <= 1
}

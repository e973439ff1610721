//! Bounded, ordered task collection.
//!
//! # Responsibility
//! - Own the in-memory task sequence and its mutation use-cases.
//! - Bridge user-facing 1-based numbering and 0-based positions.
//! - Delegate persistence to `store` and querying to `search`.
//!
//! # Invariants
//! - `size() <= limit()` at all times.
//! - Invalid indices never mutate state.
//! - Display numbering comes from current position, never from `ordinal`.

use crate::model::task::{Task, TaskValidationError, TaskVariant};
use crate::search::fuzzy::{find_matches, SearchError, SearchHit};
use crate::store::file::{load_tasks, save_tasks, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Separator between description and variant fields in `add` input.
pub const ADD_FIELD_DELIMITER: &str = " /";

pub type TaskListResult<T> = Result<T, TaskListError>;

/// How an invalid index was supplied, for echoing back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexRef {
    /// Text that failed integer parsing.
    Raw(String),
    /// One-based number that is out of range.
    Position(i64),
}

impl Display for IndexRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw(raw) => write!(f, "\"{raw}\""),
            Self::Position(position) => write!(f, "{position}"),
        }
    }
}

/// Collection-level error for index, validation, search and store failures.
#[derive(Debug)]
pub enum TaskListError {
    /// Capacity must be at least one.
    InvalidLimit(usize),
    InvalidIndex(IndexRef),
    Validation(TaskValidationError),
    Search(SearchError),
    Store(StoreError),
    /// `save()` called without a bound backing path.
    Unbound,
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLimit(limit) => write!(f, "task limit must be positive, got {limit}"),
            Self::InvalidIndex(index) => write!(f, "invalid task index: {index}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Search(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Unbound => write!(f, "task list is not bound to a storage file"),
        }
    }
}

impl Error for TaskListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Search(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for TaskListError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SearchError> for TaskListError {
    fn from(value: SearchError) -> Self {
        Self::Search(value)
    }
}

impl From<StoreError> for TaskListError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Ordered task collection with an optional backing file.
#[derive(Debug)]
pub struct TaskList {
    tasks: Vec<Task>,
    limit: usize,
    store_path: Option<PathBuf>,
}

impl TaskList {
    /// Creates an empty, unbound collection.
    ///
    /// # Errors
    /// - `InvalidLimit` when `limit == 0`.
    pub fn new(limit: usize) -> TaskListResult<Self> {
        if limit == 0 {
            return Err(TaskListError::InvalidLimit(limit));
        }
        Ok(Self {
            tasks: Vec::new(),
            limit,
            store_path: None,
        })
    }

    /// Creates a collection bound to `path` and loads it.
    ///
    /// # Errors
    /// - `InvalidLimit` when `limit == 0`.
    /// - `Store` when the file cannot be read or a line aborts the load.
    pub fn open(limit: usize, path: impl Into<PathBuf>) -> TaskListResult<Self> {
        let mut list = Self::new(limit)?;
        list.load_from_file(path)?;
        Ok(list)
    }

    /// Appends the tasks of `path` until the limit is reached, then binds it.
    ///
    /// Returns the number of tasks appended. On error nothing is appended and
    /// the previous binding is kept, so a later `save` never overwrites a file
    /// that failed to load.
    pub fn load_from_file(&mut self, path: impl Into<PathBuf>) -> TaskListResult<usize> {
        let path = path.into();
        let remaining = self.limit - self.tasks.len();
        let loaded = load_tasks(&path, remaining, self.tasks.len())?;
        let count = loaded.len();
        self.tasks.extend(loaded);
        self.store_path = Some(path);
        Ok(count)
    }

    /// Overwrites the bound backing file with the current tasks.
    ///
    /// # Errors
    /// - `Unbound` when no path is bound; nothing is written.
    /// - `Store` when writing fails; in-memory tasks are kept.
    pub fn save(&self) -> TaskListResult<()> {
        let path = self.store_path.as_deref().ok_or(TaskListError::Unbound)?;
        self.save_to_file(path)
    }

    /// Writes the current tasks to `path` without rebinding.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> TaskListResult<()> {
        save_tasks(path, &self.tasks)?;
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Returns whether `index` is outside `[0, size())`.
    pub fn is_invalid_index(&self, index: i64) -> bool {
        index < 0 || index >= self.tasks.len() as i64
    }

    /// Parses `raw_text` into a task of `variant` and appends it.
    ///
    /// `raw_text` is split on `" /"`: description, then the due date for a
    /// deadline, or start and end for a time range. At capacity a notice is
    /// returned and nothing changes.
    ///
    /// # Errors
    /// - `Validation` when date or time fields are malformed, or the
    ///   description contains `|`.
    pub fn add(&mut self, raw_text: &str, variant: TaskVariant) -> TaskListResult<String> {
        if self.tasks.len() >= self.limit {
            warn!(
                "event=task_add module=task_list status=rejected reason=capacity limit={}",
                self.limit
            );
            return Ok(format!(
                "Your task list is full (limit {}). Delete a task before adding another.",
                self.limit
            ));
        }

        let mut parts = raw_text.split(ADD_FIELD_DELIMITER);
        let description = parts.next().unwrap_or("").trim();
        let fields = parts.collect::<Vec<_>>();
        let task = Task::from_fields(variant, description, self.tasks.len(), &fields)?;

        let line = task.display_line();
        self.tasks.push(task);
        info!(
            "event=task_add module=task_list status=ok kind={} count={}",
            variant.as_str(),
            self.tasks.len()
        );
        Ok(format!(
            "Got it. I've added this task:\n  {line}\nNow you have {} in the list.",
            count_phrase(self.tasks.len())
        ))
    }

    /// Renders every task as a 1-based numbered line.
    pub fn list(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks in your list yet.".to_string();
        }
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| format!("{}. {}", index + 1, task.display_line()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Marks the task at 0-based `index` as done.
    pub fn mark_done(&mut self, index: i64) -> TaskListResult<String> {
        let task = self.task_mut(index)?;
        task.mark_done();
        let line = task.display_line();
        info!("event=task_mark module=task_list status=ok done=true");
        Ok(format!("Nice! I've marked this task as done:\n  {line}"))
    }

    /// Marks the task at 0-based `index` as not done.
    pub fn mark_undone(&mut self, index: i64) -> TaskListResult<String> {
        let task = self.task_mut(index)?;
        task.mark_undone();
        let line = task.display_line();
        info!("event=task_mark module=task_list status=ok done=false");
        Ok(format!(
            "OK, I've marked this task as not done yet:\n  {line}"
        ))
    }

    /// Removes the task at 0-based `index`.
    ///
    /// Surviving tasks keep their ordinals.
    pub fn delete(&mut self, index: i64) -> TaskListResult<String> {
        let position = self.resolve_index(index)?;
        let removed = self.tasks.remove(position);
        info!(
            "event=task_delete module=task_list status=ok count={}",
            self.tasks.len()
        );
        Ok(format!(
            "Noted. I've removed this task:\n  {}\nNow you have {} in the list.",
            removed.display_line(),
            count_phrase(self.tasks.len())
        ))
    }

    /// Returns tasks matching `query`, in collection order.
    ///
    /// # Errors
    /// - `Search(EmptyQuery)` for a blank query.
    pub fn find(&self, query: &str) -> TaskListResult<Vec<SearchHit<'_>>> {
        Ok(find_matches(query, &self.tasks)?)
    }

    fn resolve_index(&self, index: i64) -> TaskListResult<usize> {
        if self.is_invalid_index(index) {
            return Err(TaskListError::InvalidIndex(IndexRef::Position(
                index.saturating_add(1),
            )));
        }
        usize::try_from(index)
            .map_err(|_| TaskListError::InvalidIndex(IndexRef::Position(index.saturating_add(1))))
    }

    fn task_mut(&mut self, index: i64) -> TaskListResult<&mut Task> {
        let position = self.resolve_index(index)?;
        Ok(&mut self.tasks[position])
    }
}

fn count_phrase(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}

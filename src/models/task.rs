//! Task model.
//!
//! A task is a unit of recurring work that needs exactly one assignee in
//! every week it appears. It has no internal structure: two tasks are the
//! same task when their names are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, recurring unit of work.
///
/// Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    /// Creates a task with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Task name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the task, returning its name.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Task {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Task {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Task {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Task {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Task {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Builds a task list from names.
pub fn tasks<I, S>(names: I) -> Vec<Task>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Task::new).collect()
}

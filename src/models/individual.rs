//! Individual (roster member) model.
//!
//! An individual is identified by name and carries an ordered list of
//! tasks they are capable of performing. Assignment records reference
//! individuals by name only, never by value.

use serde::{Deserialize, Serialize};

use super::Task;

/// A roster member with a fixed set of capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Individual {
    /// Unique name within a roster. Used as the identity key.
    pub name: String,
    /// Tasks this individual may perform, in declaration order.
    pub can_do: Vec<Task>,
}

impl Individual {
    /// Creates an individual with no capabilities.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            can_do: Vec::new(),
        }
    }

    /// Adds a capability. Duplicates are ignored.
    pub fn with_task(mut self, task: impl Into<Task>) -> Self {
        let task = task.into();
        if !self.can_do.contains(&task) {
            self.can_do.push(task);
        }
        self
    }

    /// Adds several capabilities in order. Duplicates are ignored.
    pub fn with_tasks<I, T>(self, tasks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Task>,
    {
        tasks.into_iter().fold(self, |ind, t| ind.with_task(t))
    }

    /// Whether this individual can perform the task.
    pub fn can_perform(&self, task: &Task) -> bool {
        self.can_do.contains(task)
    }

    /// Number of declared capabilities.
    pub fn capability_count(&self) -> usize {
        self.can_do.len()
    }
}

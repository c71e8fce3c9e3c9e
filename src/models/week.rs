//! Week (one time slot) model.
//!
//! A week maps every roster task to at most one assignee. Assignees are
//! referenced by name only; an unassigned entry is serialized with an
//! empty `assignedTo`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Task;

/// A task and the name of the individual assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTask {
    /// The task.
    pub task: Task,
    /// Assignee name. `None` = unassigned (`""` on the wire).
    #[serde(with = "sentinel")]
    pub assigned_to: Option<String>,
}

impl AssignedTask {
    /// Creates an unassigned entry.
    pub fn unassigned(task: Task) -> Self {
        Self {
            task,
            assigned_to: None,
        }
    }

    /// Creates an entry assigned to the named individual.
    pub fn assigned(task: Task, name: impl Into<String>) -> Self {
        Self {
            task,
            assigned_to: Some(name.into()),
        }
    }

    /// Whether the entry has an assignee.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    /// Whether the entry is assigned to `name`.
    #[inline]
    pub fn is_assigned_to(&self, name: &str) -> bool {
        self.assigned_to.as_deref() == Some(name)
    }
}

/// One full task → assignee mapping, in task-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week {
    /// Entries, one per task.
    pub assignments: Vec<AssignedTask>,
}

impl Week {
    /// Creates a week with every task unassigned.
    pub fn unassigned(tasks: &[Task]) -> Self {
        Self {
            assignments: tasks.iter().cloned().map(AssignedTask::unassigned).collect(),
        }
    }

    /// Creates a week from explicit entries.
    pub fn from_assignments(assignments: Vec<AssignedTask>) -> Self {
        Self { assignments }
    }

    /// Whether every task has an assignee.
    pub fn is_complete(&self) -> bool {
        self.assignments.iter().all(AssignedTask::is_assigned)
    }

    /// Number of unassigned entries.
    pub fn unassigned_count(&self) -> usize {
        self.assignments.iter().filter(|a| !a.is_assigned()).count()
    }

    /// Whether the task is present and still unassigned.
    pub fn is_open(&self, task: &Task) -> bool {
        self.assignments
            .iter()
            .any(|a| &a.task == task && !a.is_assigned())
    }

    /// Assigns `task` to `name` if the task is present and unassigned.
    ///
    /// Returns `true` on success.
    pub fn assign(&mut self, task: &Task, name: &str) -> bool {
        match self
            .assignments
            .iter_mut()
            .find(|a| &a.task == task && !a.is_assigned())
        {
            Some(entry) => {
                entry.assigned_to = Some(name.to_string());
                true
            }
            None => false,
        }
    }

    /// Clears every assignment.
    pub fn clear(&mut self) {
        for a in &mut self.assignments {
            a.assigned_to = None;
        }
    }

    /// Assignee of a task, if any.
    pub fn assignee_of(&self, task: &Task) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| &a.task == task)
            .and_then(|a| a.assigned_to.as_deref())
    }

    /// Task assigned to `name`, if any.
    pub fn task_of(&self, name: &str) -> Option<&Task> {
        self.assignments
            .iter()
            .find(|a| a.is_assigned_to(name))
            .map(|a| &a.task)
    }

    /// Whether no name is assigned to more than one task.
    pub fn has_no_double_booking(&self) -> bool {
        let mut seen = HashSet::new();
        self.assignments
            .iter()
            .filter_map(|a| a.assigned_to.as_deref())
            .all(|name| seen.insert(name))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the week has no entries.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates over entries.
    pub fn iter(&self) -> std::slice::Iter<'_, AssignedTask> {
        self.assignments.iter()
    }
}

impl<'a> IntoIterator for &'a Week {
    type Item = &'a AssignedTask;
    type IntoIter = std::slice::Iter<'a, AssignedTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

/// Maps `None` to `""` and back.
mod sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(d)?;
        Ok(if raw.is_empty() { None } else { Some(raw) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tasks;

    #[test]
    fn test_unassigned_week() {
        let week = Week::unassigned(&tasks(["A", "B"]));
        assert_eq!(week.len(), 2);
        assert_eq!(week.unassigned_count(), 2);
        assert!(!week.is_complete());
        assert!(week.is_open(&Task::new("A")));
    }

    #[test]
    fn test_assign_and_lookup() {
        let mut week = Week::unassigned(&tasks(["A", "B"]));
        assert!(week.assign(&Task::new("A"), "Ana"));
        assert!(!week.assign(&Task::new("A"), "Luis")); // already taken
        assert!(!week.assign(&Task::new("Z"), "Luis")); // not in week
        assert!(week.assign(&Task::new("B"), "Luis"));

        assert!(week.is_complete());
        assert_eq!(week.assignee_of(&Task::new("A")), Some("Ana"));
        assert_eq!(week.task_of("Luis"), Some(&Task::new("B")));
        assert!(week.task_of("Nobody").is_none());
    }

    #[test]
    fn test_clear() {
        let mut week = Week::unassigned(&tasks(["A"]));
        week.assign(&Task::new("A"), "Ana");
        week.clear();
        assert_eq!(week.unassigned_count(), 1);
    }

    #[test]
    fn test_double_booking_detection() {
        let week = Week::from_assignments(vec![
            AssignedTask::assigned(Task::new("A"), "Ana"),
            AssignedTask::assigned(Task::new("B"), "Ana"),
        ]);
        assert!(!week.has_no_double_booking());

        let ok = Week::from_assignments(vec![
            AssignedTask::assigned(Task::new("A"), "Ana"),
            AssignedTask::unassigned(Task::new("B")),
            AssignedTask::unassigned(Task::new("C")),
        ]);
        assert!(ok.has_no_double_booking());
    }

    #[test]
    fn test_sentinel_wire_shape() {
        let week = Week::from_assignments(vec![
            AssignedTask::assigned(Task::new("A"), "Ana"),
            AssignedTask::unassigned(Task::new("B")),
        ]);
        let json = serde_json::to_string(&week).unwrap();
        assert_eq!(
            json,
            r#"[{"task":"A","assignedTo":"Ana"},{"task":"B","assignedTo":""}]"#
        );

        let back: Week = serde_json::from_str(&json).unwrap();
        assert_eq!(back, week);
        assert!(!back.assignments[1].is_assigned());
    }
}

//! Roster model.
//!
//! A roster pairs the ordered task list with the individuals who can
//! perform those tasks. It is the single source of truth for capability
//! data and cannot be mutated after construction; generation works on
//! its own copies.

use serde::{Deserialize, Serialize};

use super::{Individual, Task};
use crate::error::ChronogramError;
use crate::validation::validate_roster;

/// A validated roster: individuals plus the ordered task list.
///
/// # Invariants
/// - Individual names are unique and non-empty.
/// - The task list has no duplicates.
/// - Every capability references a task in the task list, at most once.
///
/// # Example
///
/// ```
/// use u_chronogram::models::{Individual, Roster, Task};
///
/// let roster = Roster::new(
///     vec![
///         Individual::new("Ana").with_tasks(["Sound", "Stage"]),
///         Individual::new("Luis").with_tasks(["Stage"]),
///     ],
///     vec![Task::new("Sound"), Task::new("Stage")],
/// )
/// .unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.capable_of(&Task::new("Stage")).count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterData", into = "RosterData")]
pub struct Roster {
    individuals: Vec<Individual>,
    tasks: Vec<Task>,
}

/// Unvalidated wire form of a roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterData {
    individuals: Vec<Individual>,
    tasks: Vec<Task>,
}

impl TryFrom<RosterData> for Roster {
    type Error = ChronogramError;

    fn try_from(data: RosterData) -> Result<Self, Self::Error> {
        Roster::new(data.individuals, data.tasks)
    }
}

impl From<Roster> for RosterData {
    fn from(roster: Roster) -> Self {
        Self {
            individuals: roster.individuals,
            tasks: roster.tasks,
        }
    }
}

impl Roster {
    /// Validates and builds a roster.
    ///
    /// Returns [`ChronogramError::InvalidRoster`] carrying every detected
    /// integrity problem.
    pub fn new(individuals: Vec<Individual>, tasks: Vec<Task>) -> Result<Self, ChronogramError> {
        validate_roster(&individuals, &tasks).map_err(ChronogramError::InvalidRoster)?;
        Ok(Self { individuals, tasks })
    }

    /// Individuals in roster order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Tasks in task-list order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up an individual by name.
    pub fn individual(&self, name: &str) -> Option<&Individual> {
        self.individuals.iter().find(|i| i.name == name)
    }

    /// Capabilities of the named individual.
    pub fn capabilities_of(&self, name: &str) -> Option<&[Task]> {
        self.individual(name).map(|i| i.can_do.as_slice())
    }

    /// Individuals capable of performing the task.
    pub fn capable_of<'a>(&'a self, task: &'a Task) -> impl Iterator<Item = &'a Individual> + 'a {
        self.individuals.iter().filter(move |i| i.can_perform(task))
    }

    /// Tasks nobody on the roster can perform.
    pub fn unschedulable_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.capable_of(t).next().is_none())
            .collect()
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the roster has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample_roster() -> Roster {
        Roster::new(
            vec![
                Individual::new("Juan").with_tasks(["Computer", "Sound"]),
                Individual::new("Sofia").with_tasks(["Sound"]),
            ],
            vec![Task::new("Computer"), Task::new("Sound"), Task::new("Usher")],
        )
        .unwrap()
    }

    #[test]
    fn test_roster_accessors() {
        let roster = sample_roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.task_count(), 3);
        assert!(!roster.is_empty());
        assert_eq!(
            roster.capabilities_of("Sofia"),
            Some(&[Task::new("Sound")][..])
        );
        assert!(roster.capabilities_of("Nobody").is_none());
        assert_eq!(roster.individual("Juan").unwrap().capability_count(), 2);
    }

    #[test]
    fn test_capable_of() {
        let roster = sample_roster();
        let sound = Task::new("Sound");
        let names: Vec<&str> = roster.capable_of(&sound).map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Juan", "Sofia"]);
    }

    #[test]
    fn test_unschedulable_tasks() {
        let roster = sample_roster();
        assert_eq!(roster.unschedulable_tasks(), vec![&Task::new("Usher")]);
    }

    #[test]
    fn test_invalid_roster_rejected() {
        let err = Roster::new(
            vec![Individual::new("X"), Individual::new("X")],
            vec![Task::new("A")],
        )
        .unwrap_err();

        match err {
            ChronogramError::InvalidRoster(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::DuplicateName));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Roster = serde_json::from_str(
            r#"{"individuals":[{"name":"Ana","canDo":["A"]}],"tasks":["A"]}"#,
        )
        .unwrap();
        assert_eq!(ok.len(), 1);

        let bad = serde_json::from_str::<Roster>(
            r#"{"individuals":[{"name":"Ana","canDo":["Z"]}],"tasks":["A"]}"#,
        );
        assert!(bad.is_err());
    }
}

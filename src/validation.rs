//! Input validation for rotation scheduling.
//!
//! Checks structural integrity of a roster before scheduling. Detects:
//! - Duplicate or empty individual names
//! - Duplicate tasks in the task list or in a capability list
//! - Capabilities referencing unknown tasks
//!
//! Also provides the feasibility checks run before the greedy loop:
//! tasks nobody can perform, and whether a complete week is reachable at
//! all (maximum bipartite matching between tasks and individuals).
//!
//! # Reference
//! Hopcroft & Karp (1973), "An n^5/2 Algorithm for Maximum Matchings in
//! Bipartite Graphs" (augmenting paths; the simple DFS variant is used here)

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::models::{Individual, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two individuals share the same name.
    DuplicateName,
    /// An individual has an empty name (collides with "unassigned").
    EmptyName,
    /// The task list contains the same task twice.
    DuplicateTask,
    /// An individual lists the same capability twice.
    DuplicateCapability,
    /// A capability references a task absent from the task list.
    UnknownTask,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a roster and its task list.
///
/// Checks:
/// 1. No duplicate tasks in the task list
/// 2. No empty individual names
/// 3. No duplicate individual names
/// 4. No duplicate capability within one individual
/// 5. Every capability references a task in the task list
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(individuals: &[Individual], tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut task_set = HashSet::new();
    for task in tasks {
        if !task_set.insert(task) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTask,
                format!("Duplicate task: {task}"),
            ));
        }
    }

    let mut names = HashSet::new();
    for ind in individuals {
        if ind.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Individual with an empty name",
            ));
        } else if !names.insert(ind.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate individual name: {}", ind.name),
            ));
        }

        let mut seen = HashSet::new();
        for task in &ind.can_do {
            if !seen.insert(task) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateCapability,
                    format!("Individual '{}' lists '{task}' more than once", ind.name),
                ));
            }
            if !task_set.contains(task) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTask,
                    format!("Individual '{}' references unknown task '{task}'", ind.name),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Tasks no individual can perform, in task-list order.
pub fn unschedulable_tasks<'a>(individuals: &[Individual], tasks: &'a [Task]) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| !individuals.iter().any(|i| i.can_perform(t)))
        .collect()
}

/// Size of a maximum task → individual matching.
///
/// A complete week exists iff this equals the number of tasks.
///
/// # Algorithm
/// For each task, search for an augmenting path by DFS over the
/// individuals able to perform it, re-seating previously matched tasks.
/// O(T * E) where T = tasks, E = capability edges.
pub fn maximum_matching(individuals: &[Individual], tasks: &[Task]) -> usize {
    // task index → indices of capable individuals
    let adj: Vec<Vec<usize>> = tasks
        .iter()
        .map(|t| {
            individuals
                .iter()
                .enumerate()
                .filter(|(_, i)| i.can_perform(t))
                .map(|(idx, _)| idx)
                .collect()
        })
        .collect();

    // individual index → task index
    let mut matched: HashMap<usize, usize> = HashMap::new();
    let mut size = 0;

    for task in 0..tasks.len() {
        let mut visited = HashSet::new();
        if augment(task, &adj, &mut matched, &mut visited) {
            size += 1;
        }
    }

    size
}

fn augment(
    task: usize,
    adj: &[Vec<usize>],
    matched: &mut HashMap<usize, usize>,
    visited: &mut HashSet<usize>,
) -> bool {
    for &person in &adj[task] {
        if !visited.insert(person) {
            continue;
        }
        let free = match matched.get(&person).copied() {
            None => true,
            Some(other) => augment(other, adj, matched, visited),
        };
        if free {
            matched.insert(person, task);
            return true;
        }
    }
    false
}

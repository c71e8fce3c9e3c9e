//! Per-individual assignment distribution.
//!
//! Tallies, for every individual, how often they were assigned overall
//! and to each task, and how far apart their assignments fall.
//! Reports are derived views recomputed from a chronogram on every call.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::models::{Chronogram, Individual, Roster, Task};

/// Assignment tally for one individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDistributionReport {
    /// Individual name.
    pub individual: String,
    /// Assignments across all weeks.
    pub total_number_of_times_assigned: usize,
    /// Assignments per task, in task-list order. Every known task is
    /// present, default 0.
    pub total_number_of_times_assigned_to_each_task: TaskCounts,
    /// Mean gap (in weeks) between consecutive weeks with an assignment.
    ///
    /// 0.0 when the individual is assigned in fewer than two weeks.
    pub average_weeks_between_assignments: f64,
}

impl AssignmentDistributionReport {
    /// Computes the report for one individual.
    ///
    /// Assignments to tasks missing from `tasks` count towards the total
    /// but get no per-task entry.
    pub fn calculate(individual: &str, tasks: &[Task], chronogram: &Chronogram) -> Self {
        let mut per_task = TaskCounts::zeroed(tasks);
        let mut total = 0;

        for week in chronogram {
            for entry in week {
                if entry.is_assigned_to(individual) {
                    total += 1;
                    per_task.increment(&entry.task);
                }
            }
        }

        Self {
            individual: individual.to_string(),
            total_number_of_times_assigned: total,
            total_number_of_times_assigned_to_each_task: per_task,
            average_weeks_between_assignments: average_gap(&chronogram.weeks_assigned(individual)),
        }
    }

    /// Assignment count for a task (0 if unknown).
    pub fn count_for(&self, task: &Task) -> usize {
        self.total_number_of_times_assigned_to_each_task
            .get(task)
            .unwrap_or(0)
    }
}

/// Per-task counts kept in task-list order.
///
/// Serialized as a map whose keys follow the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCounts(Vec<(Task, usize)>);

impl TaskCounts {
    /// A zero count for every task, in order.
    pub fn zeroed(tasks: &[Task]) -> Self {
        Self(tasks.iter().map(|t| (t.clone(), 0)).collect())
    }

    /// Count for a task, `None` if the task is not tracked.
    pub fn get(&self, task: &Task) -> Option<usize> {
        self.0.iter().find(|(t, _)| t == task).map(|(_, n)| *n)
    }

    /// Adds one to a tracked task. Returns `false` for unknown tasks.
    fn increment(&mut self, task: &Task) -> bool {
        match self.0.iter_mut().find(|(t, _)| t == task) {
            Some((_, n)) => {
                *n += 1;
                true
            }
            None => false,
        }
    }

    /// Number of tracked tasks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no task is tracked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(task, count)` in task-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&Task, usize)> + '_ {
        self.0.iter().map(|(t, n)| (t, *n))
    }
}

impl Serialize for TaskCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (task, count) in &self.0 {
            map.serialize_entry(task, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TaskCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = TaskCounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of task name to count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TaskCounts, A::Error> {
                let mut counts = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((task, count)) = access.next_entry::<Task, usize>()? {
                    counts.push((task, count));
                }
                Ok(TaskCounts(counts))
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// Mean difference between consecutive sorted week indices.
fn average_gap(week_indices: &[usize]) -> f64 {
    match (week_indices.first(), week_indices.last()) {
        (Some(&first), Some(&last)) if week_indices.len() >= 2 => {
            (last - first) as f64 / (week_indices.len() - 1) as f64
        }
        _ => 0.0,
    }
}

/// Reports for every individual, in the given order.
pub fn report(
    individuals: &[Individual],
    tasks: &[Task],
    chronogram: &Chronogram,
) -> Vec<AssignmentDistributionReport> {
    individuals
        .iter()
        .map(|i| AssignmentDistributionReport::calculate(&i.name, tasks, chronogram))
        .collect()
}

/// Reports for every roster member, in roster order.
pub fn report_roster(
    roster: &Roster,
    chronogram: &Chronogram,
) -> Vec<AssignmentDistributionReport> {
    report(roster.individuals(), roster.tasks(), chronogram)
}

//! Chronogram (solution) model.
//!
//! A chronogram is the ordered sequence of generated weeks. Order is
//! chronological and drives the repetition and distribution metrics.

use serde::{Deserialize, Serialize};

use super::{Task, Week};

/// Number of weeks a UI is expected to render.
///
/// Longer chronograms remain valid for analysing how assignments are
/// distributed, but rosters change (people learn tasks, lose privileges)
/// so far-future weeks go stale.
pub const MAX_RENDERED_WEEKS: usize = 12;

/// An ordered sequence of weeks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chronogram {
    /// Weeks in chronological order.
    pub weeks: Vec<Week>,
}

impl Chronogram {
    /// Creates an empty chronogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chronogram from weeks.
    pub fn from_weeks(weeks: Vec<Week>) -> Self {
        Self { weeks }
    }

    /// Appends a week.
    pub fn push(&mut self, week: Week) {
        self.weeks.push(week);
    }

    /// Number of weeks.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Whether there are no weeks.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Week at `index`.
    pub fn week(&self, index: usize) -> Option<&Week> {
        self.weeks.get(index)
    }

    /// Iterates over weeks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Week> {
        self.weeks.iter()
    }

    /// The prefix a UI should render (at most [`MAX_RENDERED_WEEKS`]).
    pub fn rendered(&self) -> &[Week] {
        &self.weeks[..self.weeks.len().min(MAX_RENDERED_WEEKS)]
    }

    /// Whether every week has every task assigned.
    pub fn is_complete(&self) -> bool {
        self.weeks.iter().all(Week::is_complete)
    }

    /// Week indices at which `name` holds any assignment.
    pub fn weeks_assigned(&self, name: &str) -> Vec<usize> {
        self.weeks
            .iter()
            .enumerate()
            .filter(|(_, w)| w.iter().any(|a| a.is_assigned_to(name)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Assignees of `task` in week order (`None` where unassigned).
    pub fn assignees_of<'a>(
        &'a self,
        task: &'a Task,
    ) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.weeks.iter().map(move |w| w.assignee_of(task))
    }
}

impl<'a> IntoIterator for &'a Chronogram {
    type Item = &'a Week;
    type IntoIter = std::slice::Iter<'a, Week>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}

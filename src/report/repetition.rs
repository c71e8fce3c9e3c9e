//! Rotation quality metrics.
//!
//! Measures how well a chronogram avoids back-to-back repetition and how
//! evenly it spreads work.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Back-to-back repeats | (person, task) pairs held in two consecutive weeks |
//! | Back-to-back assignments | People assigned in two consecutive weeks |
//! | Unassigned slots | Entries without an assignee |
//! | Workload spread | Max − min assignment count over assigned people |

use std::collections::HashMap;

use crate::models::Chronogram;

/// Repetition and workload indicators for a chronogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepetitionKpi {
    /// Same person on the same task in consecutive weeks.
    pub back_to_back_repeats: usize,
    /// Same person assigned (any task) in consecutive weeks.
    pub back_to_back_assignments: usize,
    /// Entries left unassigned across all weeks.
    pub unassigned_slots: usize,
    /// Assignment counts per person.
    pub assignments_by_individual: HashMap<String, usize>,
    /// Fewest assignments held by any assigned person.
    pub min_assignments: usize,
    /// Most assignments held by any person.
    pub max_assignments: usize,
}

impl RepetitionKpi {
    /// Computes the indicators for a chronogram.
    pub fn calculate(chronogram: &Chronogram) -> Self {
        let mut back_to_back_repeats = 0;
        let mut back_to_back_assignments = 0;
        let mut unassigned_slots = 0;
        let mut assignments_by_individual: HashMap<String, usize> = HashMap::new();

        for week in chronogram {
            for entry in week {
                match entry.assigned_to.as_deref() {
                    Some(name) => {
                        *assignments_by_individual
                            .entry(name.to_string())
                            .or_insert(0) += 1;
                    }
                    None => unassigned_slots += 1,
                }
            }
        }

        for pair in chronogram.weeks.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            for entry in next {
                let Some(name) = entry.assigned_to.as_deref() else {
                    continue;
                };
                if let Some(previous_task) = prev.task_of(name) {
                    back_to_back_assignments += 1;
                    if *previous_task == entry.task {
                        back_to_back_repeats += 1;
                    }
                }
            }
        }

        let min_assignments = assignments_by_individual.values().copied().min().unwrap_or(0);
        let max_assignments = assignments_by_individual.values().copied().max().unwrap_or(0);

        Self {
            back_to_back_repeats,
            back_to_back_assignments,
            unassigned_slots,
            assignments_by_individual,
            min_assignments,
            max_assignments,
        }
    }

    /// Difference between the busiest and least busy assigned person.
    pub fn workload_spread(&self) -> usize {
        self.max_assignments - self.min_assignments
    }

    /// Whether repetition and spread stay within the given limits.
    pub fn meets_thresholds(&self, max_repeats: usize, max_spread: usize) -> bool {
        self.back_to_back_repeats <= max_repeats && self.workload_spread() <= max_spread
    }
}

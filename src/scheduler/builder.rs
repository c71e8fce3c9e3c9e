//! Multi-week chronogram builder.
//!
//! # Algorithm
//!
//! 1. Reject structurally impossible inputs up front: a task nobody can
//!    perform, or a task list larger than any possible matching.
//! 2. Randomize the individual order and every capability list once.
//! 3. Run the [`WeekScheduler`] for each week, carrying the same depleted
//!    capability pool and cursor forward. Depletion is only reset by
//!    starvation-triggered regeneration, which spreads each individual's
//!    rotation across weeks instead of within one.
//!
//! # Reference
//! Burke et al. (2004), "The State of the Art of Nurse Rostering"

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::week::{SchedulerState, WeekScheduler};
use super::SchedulerConfig;
use crate::error::ChronogramError;
use crate::models::{Chronogram, Individual, Roster, Task};
use crate::validation::maximum_matching;

/// Builds chronograms from a roster.
///
/// # Example
///
/// ```
/// use u_chronogram::models::{Individual, Roster, Task};
/// use u_chronogram::scheduler::{ChronogramBuilder, SchedulerConfig};
///
/// let roster = Roster::new(
///     vec![
///         Individual::new("Ana").with_tasks(["Sound", "Stage"]),
///         Individual::new("Luis").with_tasks(["Sound", "Stage"]),
///     ],
///     vec![Task::new("Sound"), Task::new("Stage")],
/// )
/// .unwrap();
///
/// let builder = ChronogramBuilder::with_config(SchedulerConfig::default().with_seed(7));
/// let chronogram = builder.build(&roster, 4).unwrap();
/// assert_eq!(chronogram.len(), 4);
/// assert!(chronogram.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChronogramBuilder {
    config: SchedulerConfig,
}

impl ChronogramBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Builds `number_of_weeks` weeks.
    ///
    /// Uses the configured seed when present, thread-local entropy otherwise.
    pub fn build(
        &self,
        roster: &Roster,
        number_of_weeks: usize,
    ) -> Result<Chronogram, ChronogramError> {
        match self.config.seed {
            Some(seed) => {
                self.build_with_rng(roster, number_of_weeks, &mut StdRng::seed_from_u64(seed))
            }
            None => self.build_with_rng(roster, number_of_weeks, &mut rand::rng()),
        }
    }

    /// Builds `number_of_weeks` weeks drawing randomness from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(
        &self,
        roster: &Roster,
        number_of_weeks: usize,
        rng: &mut R,
    ) -> Result<Chronogram, ChronogramError> {
        if number_of_weeks == 0 {
            return Err(ChronogramError::InvalidWeekCount);
        }
        check_feasibility(roster)?;

        let scheduler = WeekScheduler::new(roster, &self.config);
        let mut state = SchedulerState::new(roster, rng);
        let mut chronogram = Chronogram::new();

        for index in 0..number_of_weeks {
            let outcome = scheduler.schedule_week(&mut state, index, rng)?;
            debug!(
                week = index,
                attempts = outcome.attempts,
                regenerations = outcome.regenerations,
                restarts = outcome.restarts,
                "week scheduled"
            );
            chronogram.push(outcome.week);
        }

        info!(
            weeks = number_of_weeks,
            individuals = roster.len(),
            tasks = roster.task_count(),
            "chronogram built"
        );
        Ok(chronogram)
    }
}

/// Verifies that a complete week is reachable at all.
///
/// Reports the first task nobody can perform, then whether the roster
/// can cover every task simultaneously.
pub fn check_feasibility(roster: &Roster) -> Result<(), ChronogramError> {
    if let Some(task) = roster.unschedulable_tasks().first() {
        warn!(task = %task, "task has no capable individual");
        return Err(ChronogramError::UnschedulableTask {
            task: (*task).clone(),
        });
    }

    let required = roster.task_count();
    let assignable = maximum_matching(roster.individuals(), roster.tasks());
    if assignable < required {
        warn!(assignable, required, "roster cannot cover every task in one week");
        return Err(ChronogramError::InfeasibleWeek {
            assignable,
            required,
        });
    }

    Ok(())
}

/// Validates raw inputs and builds a chronogram with the default configuration.
///
/// Invalid rosters are rejected before any scheduling starts. The inputs
/// are only read; the caller's data is never modified.
pub fn generate_chronogram(
    individuals: &[Individual],
    tasks: &[Task],
    number_of_weeks: usize,
) -> Result<Chronogram, ChronogramError> {
    let roster = Roster::new(individuals.to_vec(), tasks.to_vec())?;
    ChronogramBuilder::new().build(&roster, number_of_weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tasks;
    use rand::rngs::SmallRng;
    use std::collections::HashMap;

    const ALL: [&str; 6] = ["Computer", "Sound", "Stage", "Mic 1", "Mic 2", "Usher"];

    fn sample_roster() -> Roster {
        let mut people: Vec<Individual> = ["Juan", "Pedro", "Maria", "Ana", "Luis", "Carlos"]
            .into_iter()
            .map(|n| Individual::new(n).with_tasks(ALL))
            .collect();
        people.push(Individual::new("Sofia").with_tasks(["Mic 1", "Mic 2", "Stage"]));
        people.push(Individual::new("Luisa").with_tasks(["Mic 1", "Mic 2", "Stage", "Usher"]));
        people.push(Individual::new("Lorena").with_tasks(["Stage", "Usher"]));
        people.push(Individual::new("Fernando").with_tasks(["Mic 1", "Mic 2"]));
        Roster::new(people, tasks(ALL)).unwrap()
    }

    /// Every scarce-capability individual is needed every week.
    fn tight_roster() -> Roster {
        Roster::new(
            vec![
                Individual::new("Ana").with_tasks(["A", "B", "C"]),
                Individual::new("Luis").with_tasks(["A"]),
                Individual::new("Rosa").with_tasks(["A", "B"]),
            ],
            tasks(["A", "B", "C"]),
        )
        .unwrap()
    }

    fn build_seeded(roster: &Roster, weeks: usize, seed: u64) -> Chronogram {
        let mut rng = SmallRng::seed_from_u64(seed);
        ChronogramBuilder::new()
            .build_with_rng(roster, weeks, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_capability_invariant() {
        let roster = sample_roster();
        for seed in 0..10 {
            let c = build_seeded(&roster, 30, seed);
            for week in &c {
                for entry in week {
                    if let Some(name) = entry.assigned_to.as_deref() {
                        let caps = roster.capabilities_of(name).unwrap();
                        assert!(caps.contains(&entry.task), "{name} cannot do {}", entry.task);
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_double_booking() {
        let roster = sample_roster();
        for seed in 0..10 {
            let c = build_seeded(&roster, 30, seed);
            assert!(c.iter().all(|w| w.has_no_double_booking()));
        }
    }

    #[test]
    fn test_completeness_and_task_order() {
        let roster = sample_roster();
        let c = build_seeded(&roster, 52, 42);
        assert_eq!(c.len(), 52);
        assert!(c.is_complete());
        for week in &c {
            let order: Vec<&Task> = week.iter().map(|a| &a.task).collect();
            let expected: Vec<&Task> = roster.tasks().iter().collect();
            assert_eq!(order, expected);
        }
    }

    #[test]
    fn test_tight_roster_completes() {
        // Only one matching exists: Luis→A, Rosa→B, Ana→C.
        let roster = tight_roster();
        for seed in 0..20 {
            let c = build_seeded(&roster, 10, seed);
            for week in &c {
                assert_eq!(week.assignee_of(&Task::new("A")), Some("Luis"));
                assert_eq!(week.assignee_of(&Task::new("B")), Some("Rosa"));
                assert_eq!(week.assignee_of(&Task::new("C")), Some("Ana"));
            }
        }
    }

    #[test]
    fn test_deterministic_with_fixed_seed() {
        let roster = sample_roster();
        assert_eq!(build_seeded(&roster, 20, 99), build_seeded(&roster, 20, 99));

        let builder = ChronogramBuilder::with_config(SchedulerConfig::default().with_seed(5));
        assert_eq!(
            builder.build(&roster, 12).unwrap(),
            builder.build(&roster, 12).unwrap()
        );
    }

    #[test]
    fn test_does_not_mutate_roster() {
        let roster = sample_roster();
        let before = roster.clone();
        let _ = build_seeded(&roster, 25, 3);
        assert_eq!(roster, before);

        let people = roster.individuals().to_vec();
        let list = roster.tasks().to_vec();
        let _ = generate_chronogram(&people, &list, 5).unwrap();
        assert_eq!(people, before.individuals());
        assert_eq!(list, before.tasks());
    }

    #[test]
    fn test_unschedulable_task_detected() {
        let people = vec![Individual::new("X").with_task("A")];
        let list = tasks(["A", "B"]);
        for weeks in 1..=5 {
            let err = generate_chronogram(&people, &list, weeks).unwrap_err();
            assert_eq!(
                err,
                ChronogramError::UnschedulableTask {
                    task: Task::new("B")
                }
            );
        }
    }

    #[test]
    fn test_infeasible_week_detected() {
        let people = vec![Individual::new("Ana").with_tasks(["A", "B"])];
        let err = generate_chronogram(&people, &tasks(["A", "B"]), 1).unwrap_err();
        assert_eq!(
            err,
            ChronogramError::InfeasibleWeek {
                assignable: 1,
                required: 2
            }
        );
    }

    #[test]
    fn test_invalid_roster_reported_first() {
        // Unknown task and unschedulable task together: roster errors win.
        let people = vec![Individual::new("X").with_task("Ghost")];
        let err = generate_chronogram(&people, &tasks(["A"]), 1).unwrap_err();
        assert!(matches!(err, ChronogramError::InvalidRoster(_)));
    }

    #[test]
    fn test_zero_weeks_rejected() {
        let roster = sample_roster();
        let err = ChronogramBuilder::new().build(&roster, 0).unwrap_err();
        assert_eq!(err, ChronogramError::InvalidWeekCount);
    }

    #[test]
    fn test_starvation_recovery_terminates() {
        let roster = Roster::new(
            vec![
                Individual::new("Ana").with_tasks(["A", "B"]),
                Individual::new("Luis").with_tasks(["A", "B"]),
            ],
            tasks(["A", "B"]),
        )
        .unwrap();

        for seed in 0..200 {
            let c = build_seeded(&roster, 50, seed);
            assert_eq!(c.len(), 50);
            assert!(c.is_complete());
        }
    }

    #[test]
    fn test_depletion_rotates_second_week() {
        // After week 0 each person only has the other task left.
        let roster = Roster::new(
            vec![
                Individual::new("Ana").with_tasks(["A", "B"]),
                Individual::new("Luis").with_tasks(["A", "B"]),
            ],
            tasks(["A", "B"]),
        )
        .unwrap();

        for seed in 0..50 {
            let c = build_seeded(&roster, 2, seed);
            let a = Task::new("A");
            let first = c.week(0).unwrap().assignee_of(&a);
            let second = c.week(1).unwrap().assignee_of(&a);
            assert_ne!(first, second);
        }
    }

    #[test]
    fn test_workload_spreads() {
        let people: Vec<Individual> = ["P1", "P2", "P3", "P4", "P5", "P6"]
            .into_iter()
            .map(|n| Individual::new(n).with_tasks(["A", "B", "C"]))
            .collect();
        let roster = Roster::new(people, tasks(["A", "B", "C"])).unwrap();
        let c = build_seeded(&roster, 60, 17);

        let mut totals: HashMap<&str, usize> = HashMap::new();
        for week in &c {
            for entry in week {
                if let Some(name) = entry.assigned_to.as_deref() {
                    *totals.entry(name).or_insert(0) += 1;
                }
            }
        }
        assert_eq!(totals.len(), 6);
        assert!(totals.values().all(|&n| (15..=45).contains(&n)), "{totals:?}");
    }

    #[test]
    fn test_no_tasks_builds_empty_weeks() {
        let roster = Roster::new(vec![Individual::new("Ana")], vec![]).unwrap();
        let c = build_seeded(&roster, 3, 0);
        assert_eq!(c.len(), 3);
        assert!(c.iter().all(|w| w.is_empty()));
    }
}

//! Single-week greedy scheduler.
//!
//! # Algorithm
//!
//! 1. Advance a cyclic cursor over the randomized individual order.
//! 2. Skip individuals already booked this week, with an empty remaining
//!    capability list, or whose remaining tasks are all taken.
//! 3. Otherwise assign the first open task in the individual's remaining
//!    (randomized) list and remove it from that list (depletion).
//! 4. Count consecutive skips. After more than one full pass without an
//!    assignment, regenerate every remaining list from the original
//!    capabilities. If a full pass after a regeneration is still
//!    unproductive, the partial week is a dead end: clear it and start
//!    the week over.
//! 5. Stop when every task is assigned, or fail once the attempt budget
//!    is spent.
//!
//! Depletion is the fairness device: an individual is not offered a task
//! they already performed until their list is regenerated, which rotates
//! them through the tasks they have not done recently.
//!
//! # Complexity
//! O(T * C) per cursor step, where T = tasks, C = capabilities per individual.

use rand::Rng;
use tracing::{trace, warn};

use super::SchedulerConfig;
use crate::error::ChronogramError;
use crate::models::{Individual, Roster, Task, Week};
use crate::randomizer::{randomize_capabilities, randomize_order};

/// Cyclic position over the individual order.
///
/// An explicit value rather than iterator state, so scheduling can be
/// inspected and resumed between weeks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Option<usize>,
}

impl Cursor {
    /// A cursor positioned before the first individual.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to the next slot, wrapping after the last, and returns it.
    ///
    /// `len` must be non-zero.
    pub fn advance(&mut self, len: usize) -> usize {
        let next = match self.position {
            None => 0,
            Some(p) => (p + 1) % len,
        };
        self.position = Some(next);
        next
    }

    /// Current slot, if the cursor has moved.
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

/// Remaining capability lists, one buffer per individual.
///
/// Indexed by roster position. Owned by a single build and discarded
/// with it; the roster's own capability lists are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityPool {
    remaining: Vec<Vec<Task>>,
}

impl CapabilityPool {
    /// Randomized copies of every individual's capabilities.
    pub fn randomized<R: Rng + ?Sized>(individuals: &[Individual], rng: &mut R) -> Self {
        Self {
            remaining: individuals
                .iter()
                .map(|i| randomize_capabilities(&i.can_do, rng))
                .collect(),
        }
    }

    /// Builds a pool from explicit lists.
    pub fn from_lists(remaining: Vec<Vec<Task>>) -> Self {
        Self { remaining }
    }

    /// Replaces every list with a fresh randomized copy of the originals.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, individuals: &[Individual], rng: &mut R) {
        *self = Self::randomized(individuals, rng);
    }

    /// Remaining tasks for the individual at `index`.
    pub fn remaining(&self, index: usize) -> &[Task] {
        match self.remaining.get(index) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Number of buffers.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether the pool has no buffers.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Removes and returns the first remaining task still open in `week`.
    fn take_first_open(&mut self, index: usize, week: &Week) -> Option<Task> {
        let list = self.remaining.get_mut(index)?;
        let pos = list.iter().position(|t| week.is_open(t))?;
        Some(list.remove(pos))
    }
}

/// Scheduling state carried from one week to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerState {
    /// Randomized visiting order (roster indices).
    pub order: Vec<usize>,
    /// Progressively depleted capability lists.
    pub pool: CapabilityPool,
    /// Position in `order`.
    pub cursor: Cursor,
}

impl SchedulerState {
    /// Fresh state: randomized order and randomized capability copies.
    pub fn new<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Self {
        let order = randomize_order(roster.len(), rng);
        let pool = CapabilityPool::randomized(roster.individuals(), rng);
        Self::from_parts(order, pool)
    }

    /// State from an explicit order and pool.
    pub fn from_parts(order: Vec<usize>, pool: CapabilityPool) -> Self {
        Self {
            order,
            pool,
            cursor: Cursor::new(),
        }
    }

    /// Whether `order` is a permutation of `0..individuals` and the pool
    /// holds one buffer per individual.
    pub fn fits(&self, individuals: usize) -> bool {
        if self.order.len() != individuals || self.pool.len() != individuals {
            return false;
        }
        let mut seen = vec![false; individuals];
        self.order
            .iter()
            .all(|&i| i < individuals && !std::mem::replace(&mut seen[i], true))
    }
}

/// Result of scheduling one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekOutcome {
    /// The completed week.
    pub week: Week,
    /// Cursor steps taken.
    pub attempts: usize,
    /// Capability regenerations triggered by starvation.
    pub regenerations: usize,
    /// Dead-end restarts.
    pub restarts: usize,
}

/// Greedy depletion scheduler for one week.
#[derive(Debug, Clone)]
pub struct WeekScheduler<'a> {
    roster: &'a Roster,
    config: &'a SchedulerConfig,
}

impl<'a> WeekScheduler<'a> {
    /// Creates a week scheduler over a roster.
    pub fn new(roster: &'a Roster, config: &'a SchedulerConfig) -> Self {
        Self { roster, config }
    }

    /// Schedules one week, advancing `state`.
    ///
    /// `week_index` is only used for error reporting and logging.
    pub fn schedule_week<R: Rng + ?Sized>(
        &self,
        state: &mut SchedulerState,
        week_index: usize,
        rng: &mut R,
    ) -> Result<WeekOutcome, ChronogramError> {
        let individuals = self.roster.individuals();
        if !state.fits(individuals.len()) {
            return Err(ChronogramError::StateMismatch {
                individuals: individuals.len(),
                order: state.order.len(),
                pool: state.pool.len(),
            });
        }
        let n = state.order.len();
        let mut week = Week::unassigned(self.roster.tasks());

        if n == 0 {
            if let Some(task) = self.roster.tasks().first() {
                return Err(ChronogramError::UnschedulableTask { task: task.clone() });
            }
            return Ok(WeekOutcome {
                week,
                attempts: 0,
                regenerations: 0,
                restarts: 0,
            });
        }

        let budget = self
            .config
            .attempt_budget(individuals.len(), self.roster.task_count());
        let mut booked = vec![false; individuals.len()];
        let mut attempts = 0;
        let mut starvation = 0;
        let mut regenerations = 0;
        let mut restarts = 0;
        let mut regenerated_since_progress = false;

        while !week.is_complete() {
            if attempts >= budget {
                warn!(
                    week = week_index,
                    attempts,
                    regenerations,
                    restarts,
                    unassigned = week.unassigned_count(),
                    "week starved"
                );
                return Err(ChronogramError::StarvationTimeout {
                    week: week_index,
                    attempts,
                });
            }
            attempts += 1;

            let person = state.order[state.cursor.advance(n)];
            if !booked[person] {
                if let Some(task) = state.pool.take_first_open(person, &week) {
                    week.assign(&task, &individuals[person].name);
                    booked[person] = true;
                    starvation = 0;
                    regenerated_since_progress = false;
                    continue;
                }
            }

            starvation += 1;
            if starvation > n {
                if regenerated_since_progress && self.config.restart_dead_ends {
                    trace!(week = week_index, attempts, "dead end, restarting week");
                    week.clear();
                    booked.fill(false);
                    restarts += 1;
                }
                trace!(week = week_index, attempts, "regenerating capabilities");
                state.pool.regenerate(individuals, rng);
                regenerations += 1;
                regenerated_since_progress = true;
                starvation = 0;
            }
        }

        Ok(WeekOutcome {
            week,
            attempts,
            regenerations,
            restarts,
        })
    }
}

//! Greedy rotation scheduling.
//!
//! Assigns every task to a capable individual, week after week, using a
//! randomized greedy pass with capability depletion and starvation
//! recovery.
//!
//! # Algorithm
//!
//! [`WeekScheduler`] fills one week; [`ChronogramBuilder`] drives it over
//! N weeks while carrying the depleted capability pool forward. The
//! result is not an optimal fairness distribution, but it never breaks
//! capabilities, never double-books, and rotates people through the
//! tasks they have not done recently.
//!
//! An earlier approach enumerated every valid week and filtered by a
//! "no repeated assignee in the last K weeks" window. That search grows
//! factorially with roster size and is not provided here.
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"

mod builder;
mod config;
mod week;

pub use builder::{check_feasibility, generate_chronogram, ChronogramBuilder};
pub use config::SchedulerConfig;
pub use week::{CapabilityPool, Cursor, SchedulerState, WeekOutcome, WeekScheduler};

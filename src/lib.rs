//! Weekly task rotation for the U-Engine ecosystem.
//!
//! Assigns a recurring set of named tasks to a roster of people over a
//! sequence of weeks. Every assignment respects the assignee's declared
//! capabilities, nobody holds two tasks in one week, and capability
//! depletion rotates people through the tasks they have not done
//! recently.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Individual`, `Roster`,
//!   `AssignedTask`, `Week`, `Chronogram`
//! - **`validation`**: Roster integrity checks and feasibility (matching)
//! - **`randomizer`**: Shuffled copies of rosters and capability lists
//! - **`scheduler`**: Week scheduler and multi-week chronogram builder
//! - **`report`**: Assignment distribution and repetition metrics
//! - **`error`**: `ChronogramError`
//!
//! # Example
//!
//! ```
//! use u_chronogram::models::{Individual, Task};
//! use u_chronogram::report::report;
//! use u_chronogram::scheduler::generate_chronogram;
//!
//! let people = vec![
//!     Individual::new("Ana").with_tasks(["Sound", "Stage"]),
//!     Individual::new("Luis").with_tasks(["Sound", "Stage"]),
//!     Individual::new("Rosa").with_tasks(["Stage"]),
//! ];
//! let tasks = vec![Task::new("Sound"), Task::new("Stage")];
//!
//! let chronogram = generate_chronogram(&people, &tasks, 8).unwrap();
//! assert!(chronogram.is_complete());
//!
//! let reports = report(&people, &tasks, &chronogram);
//! let total: usize = reports.iter().map(|r| r.total_number_of_times_assigned).sum();
//! assert_eq!(total, 16);
//! ```
//!
//! # References
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review"

pub mod error;
pub mod models;
pub mod randomizer;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::ChronogramError;

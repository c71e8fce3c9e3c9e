//! Chronogram reporting.
//!
//! Read-only consumers of generated chronograms:
//!
//! - [`AssignmentDistributionReport`]: per-individual tallies (overall,
//!   per task, mean gap between assigned weeks)
//! - [`RepetitionKpi`]: back-to-back repetition and workload spread

mod distribution;
mod repetition;

pub use distribution::{report, report_roster, AssignmentDistributionReport, TaskCounts};
pub use repetition::RepetitionKpi;

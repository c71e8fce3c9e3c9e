//! Roster and chronogram domain models.
//!
//! Provides the data types for rotation scheduling inputs (who can do
//! what) and outputs (who does what, week by week).
//!
//! # Domain Mappings
//!
//! | u-chronogram | Volunteer rota | Chores | On-call |
//! |--------------|----------------|--------|---------|
//! | Task | Sound desk / Usher | Dishes | Primary pager |
//! | Individual | Volunteer | Housemate | Engineer |
//! | Week | Service plan | Chore chart | Rotation slot |
//! | Chronogram | Quarterly rota | Chart | On-call calendar |

mod chronogram;
mod individual;
mod roster;
mod task;
mod week;

pub use chronogram::{Chronogram, MAX_RENDERED_WEEKS};
pub use individual::Individual;
pub use roster::Roster;
pub use task::{tasks, Task};
pub use week::{AssignedTask, Week};

//! Error types for chronogram generation.
//!
//! Every failure is local to one build call. Callers decide whether to
//! retry (starvation timeouts are randomness-dependent), surface the
//! problem to a user, or abort.

use thiserror::Error;

use crate::models::Task;
use crate::validation::ValidationError;

/// Errors returned by roster construction and chronogram generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChronogramError {
    /// The roster failed integrity checks.
    #[error("invalid roster: {}", join(.0))]
    InvalidRoster(Vec<ValidationError>),

    /// Zero weeks were requested.
    #[error("number of weeks must be at least 1")]
    InvalidWeekCount,

    /// No individual can perform the task.
    #[error("task '{task}' cannot be performed by anyone on the roster")]
    UnschedulableTask {
        /// The task nobody can perform.
        task: Task,
    },

    /// No assignment covers every task in a single week.
    #[error("no complete week exists: at most {assignable} of {required} tasks can be assigned")]
    InfeasibleWeek {
        /// Size of the largest possible assignment.
        assignable: usize,
        /// Number of tasks per week.
        required: usize,
    },

    /// Scheduler state does not match the roster it is used with.
    #[error("scheduler state does not fit a roster of {individuals} (order {order}, pool {pool})")]
    StateMismatch {
        /// Individuals on the roster.
        individuals: usize,
        /// Entries in the visiting order.
        order: usize,
        /// Buffers in the capability pool.
        pool: usize,
    },

    /// The week scheduler exhausted its attempt budget.
    #[error("week {week} could not be completed within {attempts} attempts")]
    StarvationTimeout {
        /// Zero-based index of the failing week.
        week: usize,
        /// Cursor steps spent before giving up.
        attempts: usize,
    },
}

impl ChronogramError {
    /// Whether retrying with fresh randomness may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StarvationTimeout { .. })
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Individual;
    use crate::validation::validate_roster;

    #[test]
    fn test_display_messages() {
        let err = ChronogramError::UnschedulableTask {
            task: Task::new("B"),
        };
        assert_eq!(
            err.to_string(),
            "task 'B' cannot be performed by anyone on the roster"
        );

        let err = ChronogramError::StarvationTimeout {
            week: 3,
            attempts: 40,
        };
        assert!(err.to_string().contains("week 3"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_invalid_roster_lists_all_errors() {
        let errors = validate_roster(
            &[Individual::new("A"), Individual::new("A").with_task("Z")],
            &[],
        )
        .unwrap_err();
        let err = ChronogramError::InvalidRoster(errors);
        let msg = err.to_string();
        assert!(msg.starts_with("invalid roster: "));
        assert!(msg.contains("Duplicate individual name: A"));
        assert!(msg.contains("unknown task 'Z'"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_state_mismatch_message() {
        let err = ChronogramError::StateMismatch {
            individuals: 2,
            order: 1,
            pool: 1,
        };
        assert!(err.to_string().contains("roster of 2"));
        assert!(!err.is_retryable());
    }
}

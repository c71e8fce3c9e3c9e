//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for chronogram generation.
///
/// # Example
///
/// ```
/// use u_chronogram::scheduler::SchedulerConfig;
///
/// let config = SchedulerConfig::default().with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.attempt_budget(3, 2), 10_000 * 3 * 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Cursor steps allowed per (individual × task) before a week is
    /// declared starved.
    pub attempts_per_individual: usize,
    /// Fixed random seed. `None` = thread-local entropy.
    pub seed: Option<u64>,
    /// Restart a week whose partial assignment became a dead end.
    ///
    /// When disabled, only capability regeneration is attempted and a
    /// dead-end week ends in a starvation timeout.
    pub restart_dead_ends: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            attempts_per_individual: 10_000,
            seed: None,
            restart_dead_ends: true,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-individual attempt factor.
    pub fn with_attempts_per_individual(mut self, attempts: usize) -> Self {
        self.attempts_per_individual = attempts;
        self
    }

    /// Sets a fixed random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables dead-end week restarts.
    pub fn with_restart_dead_ends(mut self, enabled: bool) -> Self {
        self.restart_dead_ends = enabled;
        self
    }

    /// Cursor-step budget for one week.
    pub fn attempt_budget(&self, individuals: usize, tasks: usize) -> usize {
        self.attempts_per_individual
            .saturating_mul(individuals.max(1))
            .saturating_mul(tasks.max(1))
    }
}

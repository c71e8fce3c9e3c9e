//! Capability and roster randomization.
//!
//! Greedy assignment order biases who receives scarce tasks first.
//! Shuffling both the roster order and each individual's capability
//! order on every regeneration cycle keeps any individual or task from
//! systematically front-running the greedy pass.
//!
//! All operations return shuffled copies; inputs are never mutated.
//!
//! # Reference
//! Knuth (1997), "The Art of Computer Programming", Vol. 2, §3.4.2
//! (Fisher–Yates shuffle)

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Task;

/// Returns the same tasks in a uniformly random order.
pub fn randomize_capabilities<R: Rng + ?Sized>(capabilities: &[Task], rng: &mut R) -> Vec<Task> {
    let mut shuffled = capabilities.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Returns the roster entries in a uniformly random order.
///
/// Only the order of entries changes; their contents are cloned as-is.
pub fn randomize_roster<T: Clone, R: Rng + ?Sized>(individuals: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = individuals.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Returns `0..len` in a uniformly random order.
pub fn randomize_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

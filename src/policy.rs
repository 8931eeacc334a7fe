//! Admission and eviction policy.
//!
//! Every write classifies its target slot three ways:
//!
//! | Slot state              | Action                                   | `inserted` |
//! |-------------------------|------------------------------------------|------------|
//! | empty                   | occupy, priority = 1, link at front      | `true`     |
//! | same key                | priority += 1 (saturating)               | `false`    |
//! | different key           | arbitrate, see below                     | on replace |
//!
//! On a collision with an incumbent of priority `p`, the probabilistic
//! policy draws `u` uniformly from `[0, 1)` and replaces the incumbent iff
//! `u < decay(p)`. With the default [`Decay::Binary`], an entry hit ten times
//! survives a colliding newcomer with probability `1 - 2^-10`, while a
//! one-off entry is displaced half of the time.
//!
//! [`Eviction::Overwrite`] always replaces and gives plain last-write-wins
//! map semantics.

use log::trace;

use crate::random::UnitSource;

/// Replacement probability as a function of incumbent priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decay {
    /// `2^-p`.
    #[default]
    Binary,
    /// `e^-p`.
    Exponential,
}

impl Decay {
    /// Probability that an incumbent of the given priority is replaced.
    pub fn threshold(self, priority: u32) -> f64 {
        match self {
            Decay::Binary => 0.5f64.powi(priority as i32),
            Decay::Exponential => (-(priority as f64)).exp(),
        }
    }
}

/// Collision arbitration strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eviction {
    /// Replace with probability `decay(priority)`.
    Probabilistic(Decay),
    /// Always replace.
    Overwrite,
}

impl Default for Eviction {
    fn default() -> Self {
        Eviction::Probabilistic(Decay::default())
    }
}

impl Eviction {
    /// Decides whether a colliding write displaces an incumbent of priority `priority`.
    ///
    /// Draws from `source` only under [`Eviction::Probabilistic`].
    pub fn replaces<R: UnitSource>(&self, priority: u32, source: &mut R) -> bool {
        match *self {
            Eviction::Overwrite => true,
            Eviction::Probabilistic(decay) => {
                let threshold = decay.threshold(priority);
                let u = source.sample();
                let replace = u < threshold;
                trace!(
                    "collision: priority = {}, u = {:.6}, threshold = {:.6} => {}",
                    priority,
                    u,
                    threshold,
                    if replace { "replace" } else { "keep" }
                );
                replace
            }
        }
    }
}

/// Result of a mutating access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Key stored in a previously empty slot.
    Admitted,
    /// Key was already present; its priority was incremented.
    Hit,
    /// Key displaced a different incumbent.
    Replaced,
    /// Key lost the collision and was discarded.
    Rejected,
}

impl Outcome {
    /// Returns `true` if the incoming key now occupies the slot as a new entry.
    pub fn is_inserted(self) -> bool {
        matches!(self, Outcome::Admitted | Outcome::Replaced)
    }
}

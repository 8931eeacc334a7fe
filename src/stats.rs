//! Access statistics.

use crate::policy::Outcome;

/// Counters of mutating accesses.
///
/// Read-only lookups (`find`, `get`, `at`, ...) are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferStats {
    /// Accesses that found their key already stored.
    pub hits: u64,
    /// Accesses that landed in an empty slot.
    pub misses: u64,
    /// Accesses that landed in a slot held by another key.
    pub collisions: u64,
    /// Collisions won by the incoming key.
    pub replacements: u64,
    /// Collisions lost by the incoming key.
    pub rejections: u64,
}

impl BufferStats {
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Admitted => self.misses += 1,
            Outcome::Hit => self.hits += 1,
            Outcome::Replaced => {
                self.collisions += 1;
                self.replacements += 1;
            }
            Outcome::Rejected => {
                self.collisions += 1;
                self.rejections += 1;
            }
        }
    }

    /// Total number of recorded accesses.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses + self.collisions
    }

    /// Fraction of accesses that were hits, or `0.0` before any access.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

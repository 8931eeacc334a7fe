//! # unordered-buffer: a hash-addressed cache with frequency-biased eviction
//!
//! **`unordered-buffer`** provides [`UnorderedBuffer`][crate::buffer::UnorderedBuffer], a
//! fixed-capacity associative container in the spirit of the computed tables found in
//! decision-diagram packages: every key maps to exactly one slot, there is no chaining
//! and no probing, and memory use never grows past the bucket count.
//!
//! ## How it differs from a hash map
//!
//! - **Bounded**: at most `bucket_count()` entries, regardless of how many keys are written.
//! - **Lossy**: when two keys share a slot, only one survives. Which one is decided by the
//!   [eviction policy][crate::policy::Eviction].
//! - **Frequency-biased**: each slot counts hits to its key (up to
//!   [`MAX_PRIORITY`][crate::slot::MAX_PRIORITY]). An incumbent with priority `p` is replaced by
//!   a colliding newcomer with probability `2^-p`, so hot keys stay and one-off keys churn.
//! - **Ordered by admission**: iteration walks entries from the most recently admitted to the
//!   oldest. Hits do not reorder.
//!
//! ## Basic Usage
//!
//! ```rust
//! use unordered_buffer::buffer::UnorderedBuffer;
//! use unordered_buffer::config::BufferConfig;
//!
//! let config = BufferConfig {
//!     buckets: 256,
//!     seed: Some(42),
//!     ..BufferConfig::default()
//! };
//! let mut memo = UnorderedBuffer::<(u32, u32), u64>::with_config(&config);
//!
//! fn gcd(a: u32, b: u32) -> u64 {
//!     if b == 0 { a as u64 } else { gcd(b, a % b) }
//! }
//!
//! // A miss only means the value has to be recomputed.
//! for (a, b) in [(12, 18), (7, 21), (12, 18)] {
//!     let g = match memo.get(&(a, b)) {
//!         Some(&g) => g,
//!         None => {
//!             let g = gcd(a, b);
//!             memo.insert((a, b), g);
//!             g
//!         }
//!     };
//!     assert_eq!(g, gcd(a, b));
//! }
//!
//! assert!(memo.len() <= memo.bucket_count());
//! ```
//!
//! ## Core Components
//!
//! - **[`buffer`]**: the [`UnorderedBuffer`][crate::buffer::UnorderedBuffer] container.
//! - **[`policy`]**: collision arbitration ([`Eviction`][crate::policy::Eviction], [`Decay`][crate::policy::Decay]).
//! - **[`random`]**: randomness sources consulted on collisions.
//! - **[`hash`]**: hash builders for bucket addressing.
//! - **[`config`]**, **[`stats`]**, **[`error`]**: configuration, counters and lookup errors.

pub mod buffer;
pub mod config;
pub mod error;
pub mod hash;
pub mod iter;
pub mod policy;
pub mod random;
pub mod slot;
pub mod stats;
pub mod usage;

pub use buffer::UnorderedBuffer;
pub use error::NotFound;
pub use slot::{Position, MAX_PRIORITY};

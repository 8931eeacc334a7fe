//! Randomness sources for collision arbitration.
//!
//! Every buffer owns one [`UnitSource`]. The source is consulted only when a
//! write collides with a differently-keyed incumbent, and only under the
//! probabilistic eviction policy.
//!
//! - [`RngSource`] wraps a `rand` generator (default: [`SmallRng`]), seeded
//!   from OS entropy or from an explicit seed.
//! - [`Scripted`] replays a fixed list of draws, which makes eviction
//!   decisions reproducible in tests.
//!
//! Cloning a buffer calls [`UnitSource::fork`], so the copy gets its own
//! generator instead of replaying the original's sequence.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// A source of uniform draws from `[0, 1)`.
pub trait UnitSource {
    /// Draws the next value from `[0, 1)`.
    fn sample(&mut self) -> f64;

    /// Returns a source for a cloned buffer.
    fn fork(&self) -> Self
    where
        Self: Sized;
}

/// [`UnitSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = SmallRng> {
    rng: R,
}

impl RngSource<SmallRng> {
    /// Creates a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a source with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R> RngSource<R> {
    /// Wraps an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RngSource<SmallRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R> UnitSource for RngSource<R>
where
    R: RngCore + SeedableRng,
{
    #[inline]
    fn sample(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Forks are reseeded from OS entropy, independently of `self`.
    fn fork(&self) -> Self {
        Self { rng: R::from_os_rng() }
    }
}

/// [`UnitSource`] that replays a fixed list of draws, cycling when exhausted.
///
/// # Example
///
/// ```
/// use unordered_buffer::random::{Scripted, UnitSource};
///
/// let mut s = Scripted::new([0.25, 0.75]);
/// assert_eq!(s.sample(), 0.25);
/// assert_eq!(s.sample(), 0.75);
/// assert_eq!(s.sample(), 0.25);
/// assert_eq!(s.taken(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Scripted {
    draws: Vec<f64>,
    taken: usize,
}

impl Scripted {
    /// Creates a source replaying `draws` in order.
    ///
    /// # Panics
    ///
    /// Panics if `draws` is empty or any draw lies outside `[0, 1)`.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let draws: Vec<f64> = draws.into_iter().collect();
        assert!(!draws.is_empty(), "Scripted source needs at least one draw");
        for &u in &draws {
            assert!((0.0..1.0).contains(&u), "Draw must be in [0, 1), got {}", u);
        }
        Self { draws, taken: 0 }
    }

    /// Creates a source that always draws `u`.
    pub fn constant(u: f64) -> Self {
        Self::new([u])
    }

    /// Returns how many draws have been taken so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl UnitSource for Scripted {
    #[inline]
    fn sample(&mut self) -> f64 {
        let u = self.draws[self.taken % self.draws.len()];
        self.taken += 1;
        u
    }

    /// Forks continue the script from the same point.
    fn fork(&self) -> Self {
        self.clone()
    }
}

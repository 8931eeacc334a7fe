//! Construction settings.

use crate::policy::Eviction;

/// Bucket count used by [`BufferConfig::default`] and `UnorderedBuffer::new`.
pub const DEFAULT_BUCKETS: usize = 1024;

/// Settings for [`UnorderedBuffer::with_config`][crate::buffer::UnorderedBuffer::with_config].
///
/// # Examples
///
/// ```
/// use unordered_buffer::buffer::UnorderedBuffer;
/// use unordered_buffer::config::BufferConfig;
/// use unordered_buffer::policy::{Decay, Eviction};
///
/// let config = BufferConfig {
///     buckets: 64,
///     eviction: Eviction::Probabilistic(Decay::Exponential),
///     seed: Some(42),
/// };
///
/// let buffer = UnorderedBuffer::<u32, String>::with_config(&config);
/// assert_eq!(buffer.bucket_count(), 64);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BufferConfig {
    /// Number of slots (default: 1024). Must be positive.
    pub buckets: usize,
    /// Collision arbitration (default: probabilistic, `2^-p`).
    pub eviction: Eviction,
    /// Seed for the eviction draws (default: `None`, seeded from OS entropy).
    pub seed: Option<u64>,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
            eviction: Eviction::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::policy::Decay;

    #[test]
    fn test_default() {
        let config = BufferConfig::default();
        assert_eq!(config.buckets, 1024);
        assert_eq!(config.eviction, Eviction::Probabilistic(Decay::Binary));
        assert_eq!(config.seed, None);
    }
}

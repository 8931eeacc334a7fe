//! Error types.

use std::fmt;

/// Error returned by [`UnorderedBuffer::at`][crate::buffer::UnorderedBuffer::at]
/// when the key is not stored.
///
/// The target bucket is either empty or occupied by a different key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    /// The bucket the key hashes to is empty.
    EmptyBucket { bucket: usize },
    /// The bucket is occupied by another key.
    Occupied { bucket: usize },
}

impl NotFound {
    /// Returns the bucket the missing key hashes to.
    pub fn bucket(&self) -> usize {
        match *self {
            NotFound::EmptyBucket { bucket } | NotFound::Occupied { bucket } => bucket,
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFound::EmptyBucket { bucket } => write!(f, "key not found: bucket {} is empty", bucket),
            NotFound::Occupied { bucket } => write!(f, "key not found: bucket {} holds another key", bucket),
        }
    }
}

impl std::error::Error for NotFound {}

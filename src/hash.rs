//! Hashing capabilities for bucket addressing.
//!
//! A buffer addresses its slots with `hash(key) mod N`, so the hasher decides
//! which keys compete for the same slot. Two builders are provided:
//!
//! - [`DefaultHashBuilder`]: [`FxBuildHasher`] from `rustc-hash`, fast and
//!   deterministic across runs and clones.
//! - [`BuildIdentityHasher`]: passes integer keys through unchanged, so that
//!   key `k` lands in bucket `k mod N`. Multi-word keys such as `(u64, u64)`
//!   are combined with the [Szudzik pairing function][szudzik-pairing].
//!
//! [szudzik-pairing]: http://szudzik.com/ElegantPairing.pdf

use std::hash::{BuildHasherDefault, Hasher};

pub use rustc_hash::FxBuildHasher;

/// Hasher used when none is specified.
pub type DefaultHashBuilder = FxBuildHasher;

/// Builder for [`IdentityHasher`].
pub type BuildIdentityHasher = BuildHasherDefault<IdentityHasher>;

/// [Szudzik pairing function][szudzik-pairing], wrapping on overflow.
///
/// ```text
/// (a, b) -> if (a<b) then (b^2 + a) else (a^2 + a + b)
/// ```
///
/// [szudzik-pairing]: http://szudzik.com/ElegantPairing.pdf
pub fn pairing_szudzik(a: u64, b: u64) -> u64 {
    if a < b {
        b.wrapping_mul(b).wrapping_add(a)
    } else {
        a.wrapping_mul(a).wrapping_add(a).wrapping_add(b)
    }
}

/// Hasher that returns integer keys as-is.
///
/// The first word written becomes the hash; every further word is folded in
/// with [`pairing_szudzik`]. Byte slices (strings and the like) fall back to
/// FNV-1a.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasher {
    hash: u64,
    written: bool,
}

impl IdentityHasher {
    #[inline]
    fn push(&mut self, word: u64) {
        self.hash = if self.written {
            pairing_szudzik(self.hash, word)
        } else {
            word
        };
        self.written = true;
    }
}

impl Hasher for IdentityHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut h = FNV_OFFSET;
        for &b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(FNV_PRIME);
        }
        self.push(h);
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.push(i as u64);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.push(i as u64);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.push(i as u64);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.push(i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.push(i as u64);
    }

    #[inline]
    fn write_i8(&mut self, i: i8) {
        self.push(i as u8 as u64);
    }

    #[inline]
    fn write_i16(&mut self, i: i16) {
        self.push(i as u16 as u64);
    }

    #[inline]
    fn write_i32(&mut self, i: i32) {
        self.push(i as u32 as u64);
    }

    #[inline]
    fn write_i64(&mut self, i: i64) {
        self.push(i as u64);
    }

    #[inline]
    fn write_isize(&mut self, i: isize) {
        self.push(i as usize as u64);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::BuildHasher;

    use super::*;

    #[test]
    fn test_szudzik() {
        // a\b  0  1  2  3  4
        // ------------------
        // 0    0  1  4  9 16
        // 1    2  3  5 10 17
        // 2    6  7  8 11 18
        // 3   12 13 14 15 19
        // 4   20 21 22 23 24
        assert_eq!(pairing_szudzik(0, 0), 0);
        assert_eq!(pairing_szudzik(0, 1), 1);
        assert_eq!(pairing_szudzik(1, 0), 2);
        assert_eq!(pairing_szudzik(1, 1), 3);
        assert_eq!(pairing_szudzik(0, 2), 4);
        assert_eq!(pairing_szudzik(1, 2), 5);
        assert_eq!(pairing_szudzik(2, 0), 6);
        assert_eq!(pairing_szudzik(4, 0), 20);
        assert_eq!(pairing_szudzik(4, 4), 24);
    }

    #[test]
    fn test_szudzik_wraps() {
        // Must not panic in debug builds.
        let _ = pairing_szudzik(u64::MAX, u64::MAX);
        let _ = pairing_szudzik(0, u64::MAX);
    }

    #[test]
    fn test_identity_integers() {
        let b = BuildIdentityHasher::default();
        assert_eq!(b.hash_one(0u64), 0);
        assert_eq!(b.hash_one(42u32), 42);
        assert_eq!(b.hash_one(7usize), 7);
        assert_eq!(b.hash_one(255u8), 255);
        assert_eq!(b.hash_one(-1i32), u32::MAX as u64);
    }

    #[test]
    fn test_identity_pairs() {
        let b = BuildIdentityHasher::default();
        assert_eq!(b.hash_one((1u64, 2u64)), pairing_szudzik(1, 2));
        assert_ne!(b.hash_one((1u64, 2u64)), b.hash_one((2u64, 1u64)));
    }

    #[test]
    fn test_identity_strings_are_stable() {
        let b = BuildIdentityHasher::default();
        assert_eq!(b.hash_one("hello"), b.hash_one("hello"));
        assert_ne!(b.hash_one("hello"), b.hash_one("world"));
    }

    #[test]
    fn test_default_builder_is_deterministic() {
        let a = DefaultHashBuilder::default();
        let b = DefaultHashBuilder::default();
        assert_eq!(a.hash_one(12345u64), b.hash_one(12345u64));
    }
}

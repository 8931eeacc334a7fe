//! Property tests: structural invariants under arbitrary operation sequences.

use proptest::prelude::*;

use unordered_buffer::hash::BuildIdentityHasher;
use unordered_buffer::random::RngSource;
use unordered_buffer::{UnorderedBuffer, MAX_PRIORITY};

type Buf = UnorderedBuffer<u32, u32, BuildIdentityHasher, RngSource>;

fn buffer(buckets: usize, seed: u64) -> Buf {
    UnorderedBuffer::with_hasher_and_source(buckets, BuildIdentityHasher::default(), RngSource::seeded(seed))
}

/// Every stored entry is reachable by key at the position iteration reports,
/// and iteration visits exactly `len()` entries.
fn check_structure(buf: &Buf) -> Result<(), TestCaseError> {
    prop_assert!(buf.len() <= buf.bucket_count());
    prop_assert_eq!(buf.iter().count(), buf.len());
    prop_assert_eq!(buf.is_empty(), buf.len() == 0);
    for (pos, k, v) in buf.positions() {
        prop_assert_eq!(buf.find(k), Some(pos));
        prop_assert_eq!(buf.get(k), Some(v));
        prop_assert_eq!(pos.index(), buf.bucket(k));
        let priority = buf.priority_at(pos).unwrap_or(0);
        prop_assert!((1..=MAX_PRIORITY).contains(&priority));
    }
    Ok(())
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(u32, u32),
    Assign(u32, u32),
    Find(u32),
    Erase(u32),
    Rehash(usize),
    Clear,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        6 => (0u32..64, any::<u32>()).prop_map(|(k, v)| Operation::Insert(k, v)),
        2 => (0u32..64, any::<u32>()).prop_map(|(k, v)| Operation::Assign(k, v)),
        2 => (0u32..64).prop_map(Operation::Find),
        2 => (0u32..64).prop_map(Operation::Erase),
        1 => (1usize..40).prop_map(Operation::Rehash),
        1 => Just(Operation::Clear),
    ]
}

proptest! {
    /// len() never exceeds the bucket count.
    #[test]
    fn prop_len_within_buckets(
        buckets in 1usize..32,
        seed in any::<u64>(),
        ops in prop::collection::vec((0u32..200, 0u32..100), 0..300)
    ) {
        let mut buf = buffer(buckets, seed);
        for (key, value) in ops {
            buf.insert(key, value);
            prop_assert!(buf.len() <= buf.bucket_count());
        }
    }

    /// Arbitrary operation sequences keep slots and the usage list in sync.
    #[test]
    fn prop_arbitrary_ops_maintain_structure(
        buckets in 1usize..24,
        seed in any::<u64>(),
        ops in prop::collection::vec(operation_strategy(), 0..200)
    ) {
        let mut buf = buffer(buckets, seed);
        for op in ops {
            match op {
                Operation::Insert(k, v) => { buf.insert(k, v); }
                Operation::Assign(k, v) => { buf.assign(k, v); }
                Operation::Find(k) => { buf.find(&k); }
                Operation::Erase(k) => { buf.erase(&k); }
                Operation::Rehash(n) => buf.rehash(n),
                Operation::Clear => buf.clear(),
            }
            check_structure(&buf)?;
        }
    }

    /// A hit never changes the stored value and raises priority by one, up to the cap.
    #[test]
    fn prop_hit_increments_priority(
        key in 0u32..1000,
        hits in 0u32..50,
        value in any::<u32>()
    ) {
        let mut buf = buffer(16, 0);
        buf.insert(key, value);
        for i in 0..hits {
            let (_, inserted) = buf.insert(key, i);
            prop_assert!(!inserted);
        }
        prop_assert_eq!(buf.get(&key), Some(&value));
        prop_assert_eq!(buf.priority(&key), Some((1 + hits).min(MAX_PRIORITY)));
    }

    /// Read-only queries leave priorities, order and statistics alone.
    #[test]
    fn prop_queries_are_pure(
        keys in prop::collection::vec(0u32..100, 1..50),
        probes in prop::collection::vec(0u32..100, 0..50)
    ) {
        let mut buf = buffer(32, 1);
        for &k in &keys {
            buf.insert(k, k);
        }
        let snapshot: Vec<(u32, Option<u32>)> = buf.keys().map(|k| (*k, buf.priority(k))).collect();
        let stats = buf.stats();

        for p in probes {
            let _ = buf.find(&p);
            let _ = buf.at(&p);
            let _ = buf.count(&p);
            let _ = buf.equal_range(&p);
        }

        let after: Vec<(u32, Option<u32>)> = buf.keys().map(|k| (*k, buf.priority(k))).collect();
        prop_assert_eq!(snapshot, after);
        prop_assert_eq!(stats, buf.stats());
    }

    /// Growing into a table where every key has its own bucket loses nothing.
    #[test]
    fn prop_growing_rehash_is_lossless(
        buckets in 1usize..16,
        seed in any::<u64>(),
        ops in prop::collection::vec((0u32..64, any::<u32>()), 0..100)
    ) {
        let mut buf = buffer(buckets, seed);
        for (k, v) in ops {
            buf.insert(k, v);
        }
        let before: Vec<(u32, u32, Option<u32>)> = buf.iter().map(|(k, v)| (*k, *v, buf.priority(k))).collect();

        // Identity hashing: keys below 64 never share a bucket of 64.
        buf.rehash(64);

        let after: Vec<(u32, u32, Option<u32>)> = buf.iter().map(|(k, v)| (*k, *v, buf.priority(k))).collect();
        prop_assert_eq!(before, after);
    }

    /// Clones evolve independently of the original.
    #[test]
    fn prop_clone_independent(
        ops in prop::collection::vec((0u32..32, any::<u32>()), 1..60)
    ) {
        let mut original = buffer(8, 3);
        for &(k, v) in &ops {
            original.insert(k, v);
        }
        let snapshot: Vec<(u32, u32)> = original.iter().map(|(k, v)| (*k, *v)).collect();

        let mut copy = original.clone();
        copy.clear();
        for (k, v) in ops {
            copy.assign(k, v.wrapping_add(1));
        }

        let after: Vec<(u32, u32)> = original.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(snapshot, after);
    }
}

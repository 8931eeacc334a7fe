//! Fixed-capacity hash-addressed buffer with frequency-biased eviction.
//!
//! [`UnorderedBuffer`] stores at most one entry per bucket. A write that
//! targets a bucket holding a different key does not chain or probe: the
//! incumbent and the newcomer compete for the slot according to the
//! [`Eviction`] policy. Frequently hit keys become exponentially harder to
//! displace, one-off keys are cheaply overwritten.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                   UnorderedBuffer<K, V, S, R>                    │
//! │                                                                  │
//! │  hasher: S ──► hash(key) mod N ──► slot index                    │
//! │                                                                  │
//! │  table:  [ p=0 | p=3 (a,1) | p=0 | p=1 (b,7) | p=9 (c,2) ]       │
//! │                     ▲                 ▲            ▲             │
//! │  usage:  head ─► [ 3 ] ◄──────► [ 4 ] ◄──────► [ 1 ] ◄── tail    │
//! │                                                                  │
//! │  eviction: Probabilistic(2^-p)      source: R (uniform [0,1))    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Mutating vs. read-only access
//!
//! [`insert`], [`emplace`], [`assign`] and [`get_or_insert_default`] count as
//! accesses: they raise the priority of a stored key and arbitrate
//! collisions. [`find`], [`get`], [`at`], [`count`], [`contains_key`] and
//! [`equal_range`] are pure queries and never change priorities, order,
//! statistics or draw randomness.
//!
//! [`insert`]: UnorderedBuffer::insert
//! [`emplace`]: UnorderedBuffer::emplace
//! [`assign`]: UnorderedBuffer::assign
//! [`get_or_insert_default`]: UnorderedBuffer::get_or_insert_default
//! [`find`]: UnorderedBuffer::find
//! [`get`]: UnorderedBuffer::get
//! [`at`]: UnorderedBuffer::at
//! [`count`]: UnorderedBuffer::count
//! [`contains_key`]: UnorderedBuffer::contains_key
//! [`equal_range`]: UnorderedBuffer::equal_range
//!
//! # Example
//!
//! ```
//! use unordered_buffer::buffer::UnorderedBuffer;
//!
//! let mut buffer = UnorderedBuffer::with_capacity(128);
//!
//! let (pos, inserted) = buffer.insert("apple", 3);
//! assert!(inserted);
//! assert_eq!(buffer.entry_at(pos), Some((&"apple", &3)));
//!
//! // A second insert of the same key is a hit: the value is kept,
//! // the priority goes up.
//! let (_, inserted) = buffer.insert("apple", 4);
//! assert!(!inserted);
//! assert_eq!(buffer.get(&"apple"), Some(&3));
//! assert_eq!(buffer.priority(&"apple"), Some(2));
//! ```

use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

use log::debug;

use crate::config::{BufferConfig, DEFAULT_BUCKETS};
use crate::error::NotFound;
use crate::hash::DefaultHashBuilder;
use crate::iter::{IntoIter, Iter, IterMut, Keys, Positions, Values};
use crate::policy::{Eviction, Outcome};
use crate::random::{RngSource, UnitSource};
use crate::slot::{bump, Position, SlotTable, INITIAL_PRIORITY};
use crate::stats::BufferStats;
use crate::usage::UsageList;

/// Fixed-capacity associative cache with one entry per bucket.
///
/// # Type Parameters
///
/// - `K`: key type, `Hash + Eq` for every keyed operation.
/// - `V`: value type.
/// - `S`: hash builder (default: [`DefaultHashBuilder`]).
/// - `R`: randomness source for collision arbitration (default: [`RngSource`]).
///
/// # Thread Safety
///
/// Not synchronized. Every mutating method takes `&mut self`; wrap the buffer
/// in a lock to share it between threads.
pub struct UnorderedBuffer<K, V, S = DefaultHashBuilder, R = RngSource> {
    table: SlotTable<K, V>,
    usage: UsageList,
    hasher: S,
    source: R,
    eviction: Eviction,
    stats: BufferStats,
}

// =============================================================================
// Construction
// =============================================================================

impl<K, V> UnorderedBuffer<K, V> {
    /// Creates a buffer with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKETS)
    }

    /// Creates a buffer with `buckets` buckets and an entropy-seeded source.
    ///
    /// # Panics
    ///
    /// Panics if `buckets == 0`.
    pub fn with_capacity(buckets: usize) -> Self {
        Self::with_hasher_and_source(buckets, DefaultHashBuilder::default(), RngSource::from_entropy())
    }

    /// Creates a buffer from a [`BufferConfig`].
    ///
    /// # Panics
    ///
    /// Panics if `config.buckets == 0`.
    pub fn with_config(config: &BufferConfig) -> Self {
        let source = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        Self::with_hasher_and_source(config.buckets, DefaultHashBuilder::default(), source).with_eviction(config.eviction)
    }
}

impl<K, V> UnorderedBuffer<K, V>
where
    K: Hash + Eq,
{
    /// Creates a buffer with `buckets` buckets and inserts every pair.
    ///
    /// Pairs go through the regular admission policy, so colliding pairs
    /// may be dropped.
    pub fn from_pairs<I>(pairs: I, buckets: usize) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut buffer = Self::with_capacity(buckets);
        buffer.extend(pairs);
        buffer
    }
}

impl<K, V, S, R> UnorderedBuffer<K, V, S, R> {
    /// Creates a buffer with an explicit hasher and randomness source.
    ///
    /// # Panics
    ///
    /// Panics if `buckets == 0`.
    pub fn with_hasher_and_source(buckets: usize, hasher: S, source: R) -> Self {
        debug!("UnorderedBuffer::new(buckets = {})", buckets);

        Self {
            table: SlotTable::new(buckets),
            usage: UsageList::new(buckets),
            hasher,
            source,
            eviction: Eviction::default(),
            stats: BufferStats::default(),
        }
    }

    /// Replaces the collision arbitration policy.
    pub fn with_eviction(mut self, eviction: Eviction) -> Self {
        self.eviction = eviction;
        self
    }
}

impl<K, V, S, R> Default for UnorderedBuffer<K, V, S, R>
where
    S: Default,
    R: Default,
{
    fn default() -> Self {
        Self::with_hasher_and_source(DEFAULT_BUCKETS, S::default(), R::default())
    }
}

// =============================================================================
// Capacity, iteration and positional access (no hashing required)
// =============================================================================

impl<K, V, S, R> UnorderedBuffer<K, V, S, R> {
    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.usage.len()
    }

    /// Returns `true` if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    /// Maximum number of entries, equal to [`bucket_count`](Self::bucket_count).
    pub fn max_size(&self) -> usize {
        self.table.buckets()
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.table.buckets()
    }

    /// Collision arbitration policy.
    pub fn eviction(&self) -> Eviction {
        self.eviction
    }

    /// Access statistics since creation or the last [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> BufferStats {
        self.stats
    }

    /// Zeroes the access statistics.
    pub fn reset_stats(&mut self) {
        self.stats = BufferStats::default();
    }

    /// Hash builder.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Randomness source.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Iterates over `(&K, &V)`, most recently admitted first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.table, self.usage.iter())
    }

    /// Iterates over `(&K, &mut V)`, most recently admitted first.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.table.slots_mut(), self.usage.iter())
    }

    /// Iterates over `(Position, &K, &V)`, most recently admitted first.
    pub fn positions(&self) -> Positions<'_, K, V> {
        Positions::new(&self.table, self.usage.iter())
    }

    /// Iterates over keys, most recently admitted first.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over values, most recently admitted first.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Position of the most recently admitted entry.
    pub fn front(&self) -> Option<Position> {
        self.usage.front().map(Position)
    }

    /// Position of the least recently admitted entry.
    pub fn back(&self) -> Option<Position> {
        self.usage.back().map(Position)
    }

    /// Position after `pos` in admission order.
    pub fn next(&self, pos: Position) -> Option<Position> {
        self.usage.next(pos.0).map(Position)
    }

    /// Position before `pos` in admission order.
    pub fn prev(&self, pos: Position) -> Option<Position> {
        self.usage.prev(pos.0).map(Position)
    }

    /// Entry at `pos`, or `None` if the slot is empty.
    pub fn entry_at(&self, pos: Position) -> Option<(&K, &V)> {
        self.table.entry(pos.0)
    }

    /// Mutable value at `pos`, or `None` if the slot is empty.
    ///
    /// Does not change the priority.
    pub fn value_at_mut(&mut self, pos: Position) -> Option<&mut V> {
        if !self.table.is_occupied(pos.0) {
            return None;
        }
        self.table.slot_mut(pos.0).entry.as_mut().map(|(_, v)| v)
    }

    /// Priority at `pos`, or `None` if the slot is empty.
    pub fn priority_at(&self, pos: Position) -> Option<u32> {
        self.table.priority(pos.0)
    }

    /// Removes the entry at `pos`.
    ///
    /// Returns the position that followed `pos` in admission order. Returns
    /// `None` if `pos` was the last entry or did not refer to a stored entry,
    /// in which case nothing is removed.
    pub fn erase_at(&mut self, pos: Position) -> Option<Position> {
        self.remove_at(pos.0).and_then(|(_, next)| next).map(Position)
    }

    /// Removes the entries from `first` up to, but excluding, `last`.
    ///
    /// `last = None` removes through the back of the list. Returns `last`.
    pub fn erase_range(&mut self, first: Position, last: Option<Position>) -> Option<Position> {
        let mut cur = Some(first);
        while let Some(pos) = cur {
            if Some(pos) == last {
                break;
            }
            match self.remove_at(pos.0) {
                Some((_, next)) => cur = next.map(Position),
                None => break,
            }
        }
        last
    }

    /// Removes every entry for which `keep` returns `false`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut cur = self.usage.front();
        while let Some(index) = cur {
            cur = self.usage.next(index);
            let drop = match self.table.slot_mut(index).entry.as_mut() {
                Some((k, v)) => !keep(&*k, v),
                None => false,
            };
            if drop {
                self.remove_at(index);
            }
        }
    }

    /// Removes every entry; the bucket count is unchanged.
    pub fn clear(&mut self) {
        debug!("clear(len = {}, buckets = {})", self.len(), self.bucket_count());
        self.table.clear();
        self.usage.clear();
    }

    /// Exchanges contents with `other`.
    ///
    /// Each buffer keeps its own randomness source and eviction policy.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.table, &mut other.table);
        std::mem::swap(&mut self.usage, &mut other.usage);
        std::mem::swap(&mut self.hasher, &mut other.hasher);
        std::mem::swap(&mut self.stats, &mut other.stats);
    }

    /// Checks that occupied slots and usage-list nodes are in bijection.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.usage.debug_validate_invariants();
        let occupied = (0..self.table.buckets()).filter(|&i| self.table.is_occupied(i)).count();
        assert_eq!(occupied, self.usage.len(), "occupied slots != usage entries");
        for index in self.usage.iter() {
            assert!(self.table.is_occupied(index), "usage entry {} points to an empty slot", index);
        }
        assert!(self.len() <= self.bucket_count());
    }

    fn remove_at(&mut self, index: usize) -> Option<((K, V), Option<usize>)> {
        let next = self.usage.unlink(index)?;
        let entry = self.table.vacate(index)?;
        Some((entry, next))
    }
}

// =============================================================================
// Keyed queries (read-only)
// =============================================================================

impl<K, V, S, R> UnorderedBuffer<K, V, S, R>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Bucket index of `key`.
    pub fn bucket<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        self.table.index(self.hasher.hash_one(key))
    }

    /// Slot index of `key` if it is stored there.
    fn lookup<Q>(&self, key: &Q) -> Result<usize, NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let bucket = self.bucket(key);
        match self.table.entry(bucket) {
            None => Err(NotFound::EmptyBucket { bucket }),
            Some((k, _)) if k.borrow() == key => Ok(bucket),
            Some(_) => Err(NotFound::Occupied { bucket }),
        }
    }

    /// Position of `key`, or `None`.
    pub fn find<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).ok().map(Position)
    }

    /// Value of `key`, or `None`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Stored key and value of `key`, or `None`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.lookup(key).ok()?;
        self.table.entry(index)
    }

    /// Mutable value of `key`, or `None`. Does not change the priority.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.lookup(key).ok()?;
        self.table.slot_mut(index).entry.as_mut().map(|(_, v)| v)
    }

    /// Value of `key`.
    ///
    /// # Errors
    ///
    /// [`NotFound`] if the key's bucket is empty or holds another key.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.lookup(key)?;
        self.table
            .entry(index)
            .map(|(_, v)| v)
            .ok_or(NotFound::EmptyBucket { bucket: index })
    }

    /// Priority of `key`, or `None`.
    pub fn priority<Q>(&self, key: &Q) -> Option<u32>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.lookup(key).ok()?;
        self.table.priority(index)
    }

    /// Number of entries with `key`: `0` or `1`.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        usize::from(self.contains_key(key))
    }

    /// Returns `true` if `key` is stored.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).is_ok()
    }

    /// Range of entries with `key`.
    ///
    /// Keys are unique, so this is `(pos, pos)` when found and `(None, None)`
    /// otherwise.
    pub fn equal_range<Q>(&self, key: &Q) -> (Option<Position>, Option<Position>)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find(key);
        (pos, pos)
    }

    /// Removes `key`, returning its entry.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.lookup(key).ok()?;
        self.remove_at(index).map(|(entry, _)| entry)
    }

    /// Removes `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes `key`. Returns `true` if it was stored.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Rebuilds the table with `buckets` buckets.
    ///
    /// Entries are re-placed front to back in usage-list order, keeping their
    /// priorities and relative order. When two entries land in the same new
    /// bucket, the one later in usage-list order (the older admission)
    /// overwrites the other, which is dropped. Shrinking may therefore lose
    /// entries.
    ///
    /// A request for zero buckets is ignored: rehashing never fails.
    pub fn rehash(&mut self, buckets: usize) {
        if buckets == 0 {
            debug!("rehash(buckets = 0) ignored");
            return;
        }

        let mut table = SlotTable::new(buckets);
        let mut usage = UsageList::new(buckets);
        let mut dropped = 0usize;

        for index in self.usage.iter() {
            let Some(priority) = self.table.priority(index) else {
                continue;
            };
            let Some((key, value)) = self.table.vacate(index) else {
                continue;
            };
            let target = table.index(self.hasher.hash_one(&key));
            if table.put(target, key, value, priority).is_some() {
                usage.unlink(target);
                dropped += 1;
            }
            usage.push_back(target);
        }

        debug!(
            "rehash(buckets: {} -> {}, kept = {}, dropped = {})",
            self.table.buckets(),
            buckets,
            usage.len(),
            dropped
        );

        self.table = table;
        self.usage = usage;
    }

    /// Grows the table to `buckets` buckets if it currently has fewer.
    pub fn reserve(&mut self, buckets: usize) {
        if buckets > self.table.buckets() {
            self.rehash(buckets);
        }
    }
}

// =============================================================================
// Mutating access (admission policy)
// =============================================================================

impl<K, V, S, R> UnorderedBuffer<K, V, S, R>
where
    K: Hash + Eq,
    S: BuildHasher,
    R: UnitSource,
{
    /// Applies the admission policy for `key` and returns the slot index,
    /// the outcome and the value now stored in the slot.
    ///
    /// `make` is called only when the incoming pair is stored, or on a hit
    /// when `overwrite` is set.
    fn access<F>(&mut self, key: K, make: F, overwrite: bool) -> (usize, Outcome, &mut V)
    where
        F: FnOnce() -> V,
    {
        let index = self.table.index(self.hasher.hash_one(&key));
        let slot = self.table.slot_mut(index);

        let (outcome, value) = match slot.entry {
            None => {
                slot.priority = INITIAL_PRIORITY;
                self.usage.push_front(index);
                let (_, v) = slot.entry.insert((key, make()));
                (Outcome::Admitted, v)
            }
            Some((ref mut k, ref mut v)) => {
                if *k == key {
                    slot.priority = bump(slot.priority);
                    if overwrite {
                        *v = make();
                    }
                    (Outcome::Hit, v)
                } else if self.eviction.replaces(slot.priority, &mut self.source) {
                    *k = key;
                    *v = make();
                    slot.priority = INITIAL_PRIORITY;
                    (Outcome::Replaced, v)
                } else {
                    (Outcome::Rejected, v)
                }
            }
        };

        self.stats.record(outcome);
        (index, outcome, value)
    }

    /// Inserts `key` with `value` under the admission policy.
    ///
    /// Returns the slot position and whether the pair was stored. On a hit
    /// the stored value is kept and the priority incremented. On a lost
    /// collision the pair is discarded and the position refers to the
    /// incumbent.
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        let (index, outcome, _) = self.access(key, move || value, false);
        (Position(index), outcome.is_inserted())
    }

    /// Like [`insert`](Self::insert), but builds the value only if it is stored.
    pub fn emplace<F>(&mut self, key: K, make: F) -> (Position, bool)
    where
        F: FnOnce() -> V,
    {
        let (index, outcome, _) = self.access(key, make, false);
        (Position(index), outcome.is_inserted())
    }

    /// Assignment-style write: like [`insert`](Self::insert), but a hit also
    /// overwrites the stored value.
    ///
    /// Returns the slot position and the full [`Outcome`].
    pub fn assign(&mut self, key: K, value: V) -> (Position, Outcome) {
        let (index, outcome, _) = self.access(key, move || value, true);
        (Position(index), outcome)
    }

    /// Returns the value of `key`, creating it with `V::default()` on a miss.
    ///
    /// Counts as an access. If `key` loses a collision, the returned
    /// reference is the incumbent's value.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let (_, _, value) = self.access(key, V::default, false);
        value
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<K, V, S, R> Clone for UnorderedBuffer<K, V, S, R>
where
    K: Clone,
    V: Clone,
    S: Clone,
    R: UnitSource,
{
    /// Deep-copies entries and order; the copy gets a forked randomness source.
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            usage: self.usage.clone(),
            hasher: self.hasher.clone(),
            source: self.source.fork(),
            eviction: self.eviction,
            stats: self.stats,
        }
    }
}

impl<K, V, S, R> Debug for UnorderedBuffer<K, V, S, R>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, Q, V, S, R> Index<&Q> for UnorderedBuffer<K, V, S, R>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not stored.
    fn index(&self, key: &Q) -> &V {
        match self.at(key) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<K, V, S, R> Extend<(K, V)> for UnorderedBuffer<K, V, S, R>
where
    K: Hash + Eq,
    S: BuildHasher,
    R: UnitSource,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S, R> FromIterator<(K, V)> for UnorderedBuffer<K, V, S, R>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    R: UnitSource + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut buffer = Self::default();
        buffer.extend(iter);
        buffer
    }
}

impl<'a, K, V, S, R> IntoIterator for &'a UnorderedBuffer<K, V, S, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S, R> IntoIterator for &'a mut UnorderedBuffer<K, V, S, R> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, S, R> IntoIterator for UnorderedBuffer<K, V, S, R> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Consumes the buffer, yielding entries most recently admitted first.
    fn into_iter(mut self) -> IntoIter<K, V> {
        let mut entries = Vec::with_capacity(self.len());
        let mut cur = self.usage.front();
        while let Some(index) = cur {
            cur = self.usage.next(index);
            if let Some(entry) = self.table.vacate(index) {
                entries.push(entry);
            }
        }
        IntoIter {
            inner: entries.into_iter(),
        }
    }
}

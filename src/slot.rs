//! Slot table and bucket addressing.
//!
//! The table is a fixed-length array of slots. A key lives in exactly one
//! slot, `hash(key) mod N`; there is no probing and no chaining.
//!
//! ```text
//!   index:     0        1        2        3        4
//!           ┌────────┬────────┬────────┬────────┬────────┐
//!   prio    │   0    │   3    │   0    │   1    │  1000  │
//!   entry   │   -    │ (a, 1) │   -    │ (b, 7) │ (c, 2) │
//!           └────────┴────────┴────────┴────────┴────────┘
//!              empty   occupied          occupied  saturated
//! ```
//!
//! A priority of `0` marks an empty slot. Occupied slots carry a priority in
//! `1..=MAX_PRIORITY`.

use std::fmt;

/// Upper bound of the per-slot hit counter.
pub const MAX_PRIORITY: u32 = 1000;

/// Priority of a freshly admitted or replaced entry.
pub const INITIAL_PRIORITY: u32 = 1;

/// Increments a priority, saturating at [`MAX_PRIORITY`].
#[inline]
pub const fn bump(priority: u32) -> u32 {
    if priority >= MAX_PRIORITY {
        MAX_PRIORITY
    } else {
        priority + 1
    }
}

/// Stable handle to a slot.
///
/// Positions survive every operation except [`rehash`] and [`reserve`]
/// (when it grows the table). A position whose slot was erased no longer
/// refers to an entry; lookups through it return `None`.
///
/// [`rehash`]: crate::buffer::UnorderedBuffer::rehash
/// [`reserve`]: crate::buffer::UnorderedBuffer::reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(pub(crate) usize);

impl Position {
    /// Returns the slot index this position refers to.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[derive(Clone)]
pub(crate) struct Slot<K, V> {
    pub(crate) priority: u32,
    pub(crate) entry: Option<(K, V)>,
}

impl<K, V> Slot<K, V> {
    const EMPTY: Self = Self {
        priority: 0,
        entry: None,
    };

    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        self.priority > 0
    }
}

#[derive(Clone)]
pub(crate) struct SlotTable<K, V> {
    slots: Vec<Slot<K, V>>,
}

impl<K, V> SlotTable<K, V> {
    /// Creates a table of `buckets` empty slots.
    pub(crate) fn new(buckets: usize) -> Self {
        assert!(buckets > 0, "Bucket count must be positive");

        Self {
            slots: std::iter::repeat_with(|| Slot::EMPTY).take(buckets).collect(),
        }
    }

    /// Number of slots.
    #[inline]
    pub(crate) fn buckets(&self) -> usize {
        self.slots.len()
    }

    /// Maps a hash to its slot index.
    #[inline]
    pub(crate) fn index(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> Option<&Slot<K, V>> {
        self.slots.get(index)
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Slot<K, V> {
        &mut self.slots[index]
    }

    /// Returns the entry at `index` if the slot is occupied.
    #[inline]
    pub(crate) fn entry(&self, index: usize) -> Option<(&K, &V)> {
        self.slot(index)
            .and_then(|slot| slot.entry.as_ref())
            .map(|(k, v)| (k, v))
    }

    /// Returns the priority at `index` if the slot is occupied.
    #[inline]
    pub(crate) fn priority(&self, index: usize) -> Option<u32> {
        self.slot(index).filter(|slot| slot.is_occupied()).map(|slot| slot.priority)
    }

    #[inline]
    pub(crate) fn is_occupied(&self, index: usize) -> bool {
        self.slot(index).is_some_and(Slot::is_occupied)
    }

    /// Stores an entry with the given priority, returning the previous occupant.
    pub(crate) fn put(&mut self, index: usize, key: K, value: V, priority: u32) -> Option<(K, V)> {
        debug_assert!(priority > 0 && priority <= MAX_PRIORITY);
        let slot = &mut self.slots[index];
        slot.priority = priority;
        slot.entry.replace((key, value))
    }

    /// Empties the slot at `index`, returning its entry.
    pub(crate) fn vacate(&mut self, index: usize) -> Option<(K, V)> {
        let slot = self.slots.get_mut(index)?;
        slot.priority = 0;
        slot.entry.take()
    }

    /// Empties every slot.
    pub(crate) fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.priority = 0;
            slot.entry = None;
        }
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<K, V>] {
        &mut self.slots
    }
}

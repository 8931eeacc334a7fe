//! Usage list: admission-ordered doubly linked list over slot indices.
//!
//! Every occupied slot has exactly one node in this list. Nodes are not
//! allocated separately: the list keeps one `prev`/`next` link pair per slot
//! of the table, addressed by the slot index itself.
//!
//! ```text
//!   links (one per slot)
//!   ┌───────┬──────────────────────────┐
//!   │ index │ Link { prev, next }      │
//!   ├───────┼──────────────────────────┤
//!   │   0   │ { NIL, NIL }   (unused)  │
//!   │   1   │ { 4,   NIL }             │
//!   │   2   │ { NIL, NIL }   (unused)  │
//!   │   3   │ { NIL, 4 }               │
//!   │   4   │ { 3,   1 }               │
//!   └───────┴──────────────────────────┘
//!
//!   head ─► [3] ◄──► [4] ◄──► [1] ◄── tail
//! ```
//!
//! The front holds the most recently admitted slot. Hits do not move nodes.
//!
//! ## Operations
//! - `push_front` / `push_back`: O(1)
//! - `unlink`: O(1)
//! - `clear`: O(N) in the number of slots

/// Link sentinel.
const NIL: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    prev: usize,
    next: usize,
}

impl Link {
    const DETACHED: Self = Self { prev: NIL, next: NIL };
}

/// Doubly linked list over the indices `0..N` of a slot table.
#[derive(Debug, Clone)]
pub struct UsageList {
    links: Vec<Link>,
    head: usize,
    tail: usize,
    len: usize,
}

impl UsageList {
    /// Creates an empty list able to link indices `0..slots`.
    pub fn new(slots: usize) -> Self {
        Self {
            links: vec![Link::DETACHED; slots],
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Number of linked indices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no index is linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of indices this list can link.
    pub fn slots(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if `index` is currently linked.
    pub fn contains(&self, index: usize) -> bool {
        match self.links.get(index) {
            Some(link) => link.prev != NIL || self.head == index,
            None => false,
        }
    }

    /// First (most recently admitted) index.
    pub fn front(&self) -> Option<usize> {
        wrap(self.head)
    }

    /// Last (least recently admitted) index.
    pub fn back(&self) -> Option<usize> {
        wrap(self.tail)
    }

    /// Index following `index`, if `index` is linked and not the back.
    pub fn next(&self, index: usize) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        wrap(self.links[index].next)
    }

    /// Index preceding `index`, if `index` is linked and not the front.
    pub fn prev(&self, index: usize) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        wrap(self.links[index].prev)
    }

    /// Links `index` at the front.
    pub fn push_front(&mut self, index: usize) {
        debug_assert!(!self.contains(index), "index {} is already linked", index);

        self.links[index] = Link {
            prev: NIL,
            next: self.head,
        };
        if self.head != NIL {
            self.links[self.head].prev = index;
        } else {
            self.tail = index;
        }
        self.head = index;
        self.len += 1;
    }

    /// Links `index` at the back.
    pub fn push_back(&mut self, index: usize) {
        debug_assert!(!self.contains(index), "index {} is already linked", index);

        self.links[index] = Link {
            prev: self.tail,
            next: NIL,
        };
        if self.tail != NIL {
            self.links[self.tail].next = index;
        } else {
            self.head = index;
        }
        self.tail = index;
        self.len += 1;
    }

    /// Unlinks `index`, returning the index that followed it.
    ///
    /// Returns `None` without changes if `index` was not linked.
    pub fn unlink(&mut self, index: usize) -> Option<Option<usize>> {
        if !self.contains(index) {
            return None;
        }

        let Link { prev, next } = self.links[index];
        if prev != NIL {
            self.links[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.links[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.links[index] = Link::DETACHED;
        self.len -= 1;

        Some(wrap(next))
    }

    /// Unlinks every index.
    pub fn clear(&mut self) {
        self.links.fill(Link::DETACHED);
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Iterates over linked indices from front to back.
    pub fn iter(&self) -> Indices<'_> {
        Indices {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Checks the list structure, panicking on the first violation.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut count = 0;
        let mut prev = NIL;
        let mut cur = self.head;
        while cur != NIL {
            assert!(cur < self.links.len(), "link {} out of range", cur);
            assert_eq!(self.links[cur].prev, prev, "broken back link at {}", cur);
            prev = cur;
            cur = self.links[cur].next;
            count += 1;
            assert!(count <= self.links.len(), "cycle detected");
        }
        assert_eq!(self.tail, prev, "tail mismatch");
        assert_eq!(self.len, count, "length mismatch");
    }
}

#[inline]
fn wrap(index: usize) -> Option<usize> {
    if index == NIL {
        None
    } else {
        Some(index)
    }
}

/// Double-ended iterator over linked indices.
#[derive(Debug, Clone)]
pub struct Indices<'a> {
    list: &'a UsageList,
    front: usize,
    back: usize,
    remaining: usize,
}

impl Iterator for Indices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front;
        self.front = self.list.links[index].next;
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Indices<'_> {
    fn next_back(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back;
        self.back = self.list.links[index].prev;
        self.remaining -= 1;
        Some(index)
    }
}

impl ExactSizeIterator for Indices<'_> {}

impl std::iter::FusedIterator for Indices<'_> {}

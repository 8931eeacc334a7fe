//! Iterators over buffer entries in usage-list order (most recently admitted first).

use std::iter::FusedIterator;

use crate::slot::{Position, Slot, SlotTable};
use crate::usage::Indices;

/// Iterator over `(&K, &V)`.
pub struct Iter<'a, K, V> {
    table: &'a SlotTable<K, V>,
    indices: Indices<'a>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(table: &'a SlotTable<K, V>, indices: Indices<'a>) -> Self {
        Self { table, indices }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            indices: self.indices.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        self.table.entry(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.indices.next_back()?;
        self.table.entry(index)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over `(Position, &K, &V)`.
pub struct Positions<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Positions<'a, K, V> {
    pub(crate) fn new(table: &'a SlotTable<K, V>, indices: Indices<'a>) -> Self {
        Self {
            inner: Iter::new(table, indices),
        }
    }
}

impl<'a, K, V> Iterator for Positions<'a, K, V> {
    type Item = (Position, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.inner.indices.next()?;
        let (k, v) = self.inner.table.entry(index)?;
        Some((Position(index), k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Positions<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.inner.indices.next_back()?;
        let (k, v) = self.inner.table.entry(index)?;
        Some((Position(index), k, v))
    }
}

impl<K, V> ExactSizeIterator for Positions<'_, K, V> {}

/// Iterator over `(&K, &mut V)`.
///
/// Values may be modified; priorities and order are not affected.
/// Construction costs O(len log len), independent of the bucket count.
pub struct IterMut<'a, K, V> {
    inner: std::vec::IntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(slots: &'a mut [Slot<K, V>], indices: Indices<'_>) -> Self {
        // Visit slots in index order so that a single pass hands out disjoint borrows.
        let mut ranked: Vec<(usize, usize)> = indices.enumerate().map(|(rank, index)| (index, rank)).collect();
        ranked.sort_unstable();

        let mut entries: Vec<Option<(&'a K, &'a mut V)>> = Vec::with_capacity(ranked.len());
        entries.resize_with(ranked.len(), || None);

        let mut rest = slots.iter_mut();
        let mut cursor = 0;
        for (index, rank) in ranked {
            if let Some(slot) = rest.nth(index - cursor) {
                cursor = index + 1;
                entries[rank] = slot.entry.as_mut().map(|(k, v)| (&*k, v));
            }
        }

        let entries: Vec<(&'a K, &'a mut V)> = entries.into_iter().flatten().collect();
        Self {
            inner: entries.into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Iterator over keys.
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over values.
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Owning iterator over `(K, V)`.
pub struct IntoIter<K, V> {
    pub(crate) inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

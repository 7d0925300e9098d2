//! Borrowing iterators over a [`super::SortedMap`].
//!
//! All of them walk successor / predecessor links directly in the arena, so
//! a full traversal costs O(n) and none of them trigger balancing hooks.

use std::cmp::Ordering;

use crate::linked::Slot;
use crate::util::{next, prev};

use super::Entry;

type Arena<'a, K, V, M> = &'a [Slot<Entry<K, V>, M>];

#[inline]
fn pair<K, V, M>(arena: Arena<'_, K, V, M>, idx: u32) -> Option<(&K, &V)> {
    arena[idx as usize]
        .element
        .as_ref()
        .map(|e| (&e.key, &e.value))
}

/// Ascending (and, from the back, descending) entries.
pub struct Iter<'a, K, V, M> {
    arena: Arena<'a, K, V, M>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, K, V, M> Iter<'a, K, V, M> {
    pub(crate) fn new(
        arena: Arena<'a, K, V, M>,
        front: Option<u32>,
        back: Option<u32>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, K, V, M> Iterator for Iter<'a, K, V, M> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        self.remaining -= 1;
        self.front = next(self.arena, idx);
        pair(self.arena, idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, M> DoubleEndedIterator for Iter<'_, K, V, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        self.remaining -= 1;
        self.back = prev(self.arena, idx);
        pair(self.arena, idx)
    }
}

impl<K, V, M> ExactSizeIterator for Iter<'_, K, V, M> {}

pub struct Keys<'a, K, V, M>(pub(crate) Iter<'a, K, V, M>);

impl<'a, K, V, M> Iterator for Keys<'a, K, V, M> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, M> DoubleEndedIterator for Keys<'_, K, V, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, _)| k)
    }
}

impl<K, V, M> ExactSizeIterator for Keys<'_, K, V, M> {}

pub struct Values<'a, K, V, M>(pub(crate) Iter<'a, K, V, M>);

impl<'a, K, V, M> Iterator for Values<'a, K, V, M> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V, M> DoubleEndedIterator for Values<'_, K, V, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(_, v)| v)
    }
}

impl<K, V, M> ExactSizeIterator for Values<'_, K, V, M> {}

/// Entries with `start <= key < stop`, ascending.
pub struct Range<'a, K, V, M, C> {
    arena: Arena<'a, K, V, M>,
    curr: Option<u32>,
    stop: Option<&'a K>,
    comparator: &'a C,
}

impl<'a, K, V, M, C> Range<'a, K, V, M, C> {
    pub(crate) fn new(
        arena: Arena<'a, K, V, M>,
        curr: Option<u32>,
        stop: Option<&'a K>,
        comparator: &'a C,
    ) -> Self {
        Self {
            arena,
            curr,
            stop,
            comparator,
        }
    }
}

impl<'a, K, V, M, C> Iterator for Range<'a, K, V, M, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        let (key, value) = pair(self.arena, idx)?;
        if let Some(stop) = self.stop {
            if (self.comparator)(key, stop) != Ordering::Less {
                self.curr = None;
                return None;
            }
        }
        self.curr = next(self.arena, idx);
        Some((key, value))
    }
}

//! Sorted key/value maps over [`crate::linked::LinkedBinaryTree`].

pub mod iter;
pub mod sorted_map;

use std::cmp::Ordering;

use crate::balance::{Avl, Splay, Unbalanced};

pub use iter::{Iter, Keys, Range, Values};
pub use sorted_map::SortedMap;

/// Key/value pair stored as a map node's element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

pub(crate) fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Unbalanced binary search tree map.
pub type TreeMap<K, V, C = fn(&K, &K) -> Ordering> = SortedMap<K, V, Unbalanced, C>;

/// AVL tree map.
pub type AvlMap<K, V, C = fn(&K, &K) -> Ordering> = SortedMap<K, V, Avl, C>;

/// Splay tree map.
pub type SplayMap<K, V, C = fn(&K, &K) -> Ordering> = SortedMap<K, V, Splay, C>;

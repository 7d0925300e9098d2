use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::balance::{Balance, Unbalanced};
use crate::error::TreeError;
use crate::linked::LinkedBinaryTree;
use crate::tree::{BinaryTree, Tree};
use crate::types::Position;
use crate::util::{first, last, next, prev};

use super::iter::{Iter, Keys, Range, Values};
use super::{default_comparator, Entry};

/// Ordered map on a binary search tree, balanced by the policy `B`.
///
/// The map itself only knows BST shape: lookups walk down from the root,
/// insertions attach a leaf, removals splice out a node with at most one
/// child (substituting the in-order predecessor when needed). After each of
/// these it calls the matching [`Balance`] hook.
///
/// Lookups that may restructure the tree (`get`, `find_position`) take
/// `&mut self`; the `&self` accessors (`peek`, `contains`, `find_*`,
/// iterators) never trigger hooks.
pub struct SortedMap<K, V, B = Unbalanced, C = fn(&K, &K) -> Ordering>
where
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    tree: LinkedBinaryTree<Entry<K, V>, B::Meta>,
    balance: B,
    comparator: C,
}

impl<K, V, B> SortedMap<K, V, B, fn(&K, &K) -> Ordering>
where
    K: Ord,
    B: Balance + Default,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V, B> Default for SortedMap<K, V, B, fn(&K, &K) -> Ordering>
where
    K: Ord,
    B: Balance + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, B, C> SortedMap<K, V, B, C>
where
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self
    where
        B: Default,
    {
        Self::with_balance(B::default(), comparator)
    }

    pub fn with_balance(balance: B, comparator: C) -> Self {
        Self {
            tree: LinkedBinaryTree::new(),
            balance,
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The underlying tree, for positional navigation.
    pub fn tree(&self) -> &LinkedBinaryTree<Entry<K, V>, B::Meta> {
        &self.tree
    }

    pub fn balance(&self) -> &B {
        &self.balance
    }

    #[inline]
    fn entry_at(&self, idx: u32) -> Option<&Entry<K, V>> {
        self.tree.arena()[idx as usize].element.as_ref()
    }

    #[inline]
    fn compare_at(&self, key: &K, idx: u32) -> Option<Ordering> {
        self.entry_at(idx).map(|e| (self.comparator)(key, &e.key))
    }

    #[inline]
    fn pair_at(&self, idx: u32) -> Option<(&K, &V)> {
        self.entry_at(idx).map(|e| (&e.key, &e.value))
    }

    fn search_index(&self, key: &K) -> Option<u32> {
        let arena = self.tree.arena();
        let mut curr = self.tree.root_index()?;
        loop {
            let slot = &arena[curr as usize];
            let child = match (self.comparator)(key, &slot.element.as_ref()?.key) {
                Ordering::Less => slot.l,
                Ordering::Greater => slot.r,
                Ordering::Equal => return Some(curr),
            };
            match child {
                Some(c) => curr = c,
                None => return Some(curr),
            }
        }
    }

    /// Walks down from the root and returns where the walk halted: the node
    /// holding `key`, or the node `key` would be attached under. `None` for
    /// an empty map. Never triggers a hook.
    pub fn search(&self, key: &K) -> Option<Position> {
        self.search_index(key).map(|i| self.tree.position(i))
    }

    /// Like [`SortedMap::search`], then reports an access at the halting node.
    pub fn find_position(&mut self, key: &K) -> Result<Option<Position>, TreeError> {
        let found = self.search(key);
        if let Some(p) = found {
            self.balance.on_access(&mut self.tree, p)?;
        }
        Ok(found)
    }

    /// Position holding exactly `key`, after reporting the access.
    fn access(&mut self, key: &K) -> Result<Position, TreeError> {
        let p = self.find_position(key)?.ok_or(TreeError::KeyNotFound)?;
        if (self.comparator)(key, &self.tree.element(p)?.key) != Ordering::Equal {
            return Err(TreeError::KeyNotFound);
        }
        Ok(p)
    }

    pub fn get(&mut self, key: &K) -> Result<&V, TreeError> {
        let p = self.access(key)?;
        Ok(&self.tree.element(p)?.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, TreeError> {
        let p = self.access(key)?;
        Ok(&mut self.tree.element_mut(p)?.value)
    }

    /// Read-only lookup that leaves the shape alone.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = self.search_index(key)?;
        match self.compare_at(key, idx)? {
            Ordering::Equal => self.entry_at(idx).map(|e| &e.value),
            _ => None,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }

    fn put_at(&mut self, key: K, value: V) -> Result<(Position, Option<V>), TreeError> {
        let Some(p) = self.search(&key) else {
            let root = self.tree.add_root(Entry::new(key, value))?;
            self.balance.on_insert(&mut self.tree, root)?;
            return Ok((root, None));
        };
        let leaf = match (self.comparator)(&key, &self.tree.element(p)?.key) {
            Ordering::Equal => {
                let old = std::mem::replace(&mut self.tree.element_mut(p)?.value, value);
                self.balance.on_access(&mut self.tree, p)?;
                return Ok((p, Some(old)));
            }
            Ordering::Less => self.tree.add_left(p, Entry::new(key, value))?,
            Ordering::Greater => self.tree.add_right(p, Entry::new(key, value))?,
        };
        self.balance.on_insert(&mut self.tree, leaf)?;
        Ok((leaf, None))
    }

    /// Inserts or overwrites. Returns the previous value for an existing key;
    /// the node (and its position) is kept.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, TreeError> {
        self.put_at(key, value).map(|(_, old)| old)
    }

    /// Value for `key`, inserting `default()` first when absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> Result<&mut V, TreeError>
    where
        F: FnOnce() -> V,
    {
        let p = match self.access(&key) {
            Ok(p) => p,
            Err(TreeError::KeyNotFound) => self.put_at(key, default())?.0,
            Err(e) => return Err(e),
        };
        Ok(&mut self.tree.element_mut(p)?.value)
    }

    /// Removes `key`. A miss fails with [`TreeError::KeyNotFound`] and leaves
    /// the tree exactly as it was.
    pub fn remove(&mut self, key: &K) -> Result<V, TreeError> {
        let idx = self.search_index(key).ok_or(TreeError::KeyNotFound)?;
        if self.compare_at(key, idx) != Some(Ordering::Equal) {
            return Err(TreeError::KeyNotFound);
        }
        let p = self.tree.position(idx);
        self.delete(p).map(|(_, v)| v)
    }

    /// Removes the entry at `p`.
    ///
    /// A node with two children takes over its in-order predecessor's entry
    /// and the predecessor's node is unlinked instead. The balance hook sees
    /// the parent of the node actually unlinked.
    pub fn delete(&mut self, p: Position) -> Result<(K, V), TreeError> {
        self.tree.validate(p)?;
        let mut target = p;
        if let (Some(l), Some(_)) = (self.tree.left(p)?, self.tree.right(p)?) {
            target = self.tree.subtree_last(l)?;
            debug!(
                "sorted map: node {} replaced by predecessor {}",
                p.index, target.index
            );
        }
        let parent = self.tree.parent(target)?;
        let unlinked = self.tree.delete(target)?;
        let removed = if target == p {
            unlinked
        } else {
            self.tree.replace(p, unlinked)?
        };
        self.balance.on_delete(&mut self.tree, parent)?;
        Ok(removed.into_pair())
    }

    /// Removes and returns the smallest entry.
    pub fn pop_first(&mut self) -> Result<Option<(K, V)>, TreeError> {
        match self.first() {
            Some(p) => self.delete(p).map(Some),
            None => Ok(None),
        }
    }

    /// Removes and returns the largest entry.
    pub fn pop_last(&mut self) -> Result<Option<(K, V)>, TreeError> {
        match self.last() {
            Some(p) => self.delete(p).map(Some),
            None => Ok(None),
        }
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn first(&self) -> Option<Position> {
        first(self.tree.arena(), self.tree.root_index()).map(|i| self.tree.position(i))
    }

    pub fn last(&self) -> Option<Position> {
        last(self.tree.arena(), self.tree.root_index()).map(|i| self.tree.position(i))
    }

    /// In-order successor position.
    pub fn successor(&self, p: Position) -> Result<Option<Position>, TreeError> {
        self.tree.after(p)
    }

    /// In-order predecessor position.
    pub fn predecessor(&self, p: Position) -> Result<Option<Position>, TreeError> {
        self.tree.before(p)
    }

    pub fn key(&self, p: Position) -> Result<&K, TreeError> {
        Ok(&self.tree.element(p)?.key)
    }

    pub fn value(&self, p: Position) -> Result<&V, TreeError> {
        Ok(&self.tree.element(p)?.value)
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        first(self.tree.arena(), self.tree.root_index()).and_then(|i| self.pair_at(i))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        last(self.tree.arena(), self.tree.root_index()).and_then(|i| self.pair_at(i))
    }

    /// Index of the smallest key with `key` on the wanted side of it.
    /// `strict` excludes an exact match.
    fn ceiling_index(&self, key: &K, strict: bool) -> Option<u32> {
        let idx = self.search_index(key)?;
        let ord = self.compare_at(key, idx)?;
        if ord == Ordering::Greater || (strict && ord == Ordering::Equal) {
            next(self.tree.arena(), idx)
        } else {
            Some(idx)
        }
    }

    fn floor_index(&self, key: &K, strict: bool) -> Option<u32> {
        let idx = self.search_index(key)?;
        let ord = self.compare_at(key, idx)?;
        if ord == Ordering::Less || (strict && ord == Ordering::Equal) {
            prev(self.tree.arena(), idx)
        } else {
            Some(idx)
        }
    }

    /// Smallest entry with key `>= key`.
    pub fn find_ge(&self, key: &K) -> Option<(&K, &V)> {
        self.ceiling_index(key, false).and_then(|i| self.pair_at(i))
    }

    /// Smallest entry with key `> key`.
    pub fn find_gt(&self, key: &K) -> Option<(&K, &V)> {
        self.ceiling_index(key, true).and_then(|i| self.pair_at(i))
    }

    /// Largest entry with key `<= key`.
    pub fn find_le(&self, key: &K) -> Option<(&K, &V)> {
        self.floor_index(key, false).and_then(|i| self.pair_at(i))
    }

    /// Largest entry with key `< key`.
    pub fn find_lt(&self, key: &K) -> Option<(&K, &V)> {
        self.floor_index(key, true).and_then(|i| self.pair_at(i))
    }

    /// Entries with `start <= key < stop`. `None` leaves that end open.
    pub fn find_range<'a>(
        &'a self,
        start: Option<&K>,
        stop: Option<&'a K>,
    ) -> Range<'a, K, V, B::Meta, C> {
        let curr = match start {
            Some(start) => self.ceiling_index(start, false),
            None => first(self.tree.arena(), self.tree.root_index()),
        };
        Range::new(self.tree.arena(), curr, stop, &self.comparator)
    }

    pub fn iter(&self) -> Iter<'_, K, V, B::Meta> {
        let arena = self.tree.arena();
        let root = self.tree.root_index();
        Iter::new(arena, first(arena, root), last(arena, root), self.len())
    }

    pub fn keys(&self) -> Keys<'_, K, V, B::Meta> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V, B::Meta> {
        Values(self.iter())
    }

    /// Checks tree structure, strict key order and the policy invariant.
    pub fn assert_valid(&self) -> Result<(), String> {
        self.tree.assert_valid()?;
        let mut prev_key: Option<&K> = None;
        for (key, _) in self.iter() {
            if let Some(prev_key) = prev_key {
                if (self.comparator)(prev_key, key) != Ordering::Less {
                    return Err("keys are not in strictly increasing order".to_string());
                }
            }
            prev_key = Some(key);
        }
        self.balance.check(&self.tree)
    }

    pub fn to_tree_string(&self) -> String
    where
        K: fmt::Display,
    {
        self.tree.to_tree_string("", |e| e.key.to_string())
    }
}

impl<'a, K, V, B, C> IntoIterator for &'a SortedMap<K, V, B, C>
where
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, B::Meta>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, B, C> fmt::Debug for SortedMap<K, V, B, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    B: Balance,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

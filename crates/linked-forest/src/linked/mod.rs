//! Arena-backed linked binary tree.
//!
//! [`LinkedBinaryTree`] owns its nodes in a `Vec` and hands out
//! [`Position`]s. All structural edits validate their positions first and
//! fail before touching anything.

mod node;

pub(crate) use node::Slot;

use log::trace;

use crate::error::TreeError;
use crate::tree::{BinaryTree, Tree};
use crate::types::{Position, TreeId};
use crate::util::{self, get_l, get_p, get_r, relink, set_p};

/// Binary tree with element type `E` and per-node metadata `M`.
///
/// `M` is scratch space for balancing policies (an AVL height, for
/// instance); plain trees use `()`. Fresh nodes start with `M::default()`.
#[derive(Debug)]
pub struct LinkedBinaryTree<E, M = ()> {
    id: TreeId,
    root: Option<u32>,
    size: usize,
    arena: Vec<Slot<E, M>>,
    free: Vec<u32>,
}

impl<E, M> LinkedBinaryTree<E, M> {
    pub fn new() -> Self {
        Self {
            id: TreeId::fresh(),
            root: None,
            size: 0,
            arena: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    #[inline]
    pub(crate) fn arena(&self) -> &[Slot<E, M>] {
        &self.arena
    }

    #[inline]
    pub(crate) fn root_index(&self) -> Option<u32> {
        self.root
    }

    /// Mints a position for a live arena index.
    #[inline]
    pub(crate) fn position(&self, idx: u32) -> Position {
        Position {
            tree: self.id,
            index: idx,
            generation: self.arena[idx as usize].generation,
        }
    }

    #[inline]
    fn position_of(&self, idx: Option<u32>) -> Option<Position> {
        idx.map(|i| self.position(i))
    }

    /// Resolves `p` to its arena index.
    ///
    /// Fails with [`TreeError::InvalidPosition`] for positions of another
    /// tree and with [`TreeError::StalePosition`] once the node is deleted.
    pub fn validate(&self, p: Position) -> Result<u32, TreeError> {
        if p.tree != self.id {
            return Err(TreeError::InvalidPosition);
        }
        match self.arena.get(p.index as usize) {
            Some(slot) if slot.is_live() && slot.generation == p.generation => Ok(p.index),
            _ => Err(TreeError::StalePosition),
        }
    }

    pub fn element(&self, p: Position) -> Result<&E, TreeError> {
        let idx = self.validate(p)?;
        self.arena[idx as usize]
            .element
            .as_ref()
            .ok_or(TreeError::StalePosition)
    }

    pub fn element_mut(&mut self, p: Position) -> Result<&mut E, TreeError> {
        let idx = self.validate(p)?;
        self.arena[idx as usize]
            .element
            .as_mut()
            .ok_or(TreeError::StalePosition)
    }

    pub fn meta(&self, p: Position) -> Result<&M, TreeError> {
        let idx = self.validate(p)?;
        Ok(&self.arena[idx as usize].meta)
    }

    pub fn meta_mut(&mut self, p: Position) -> Result<&mut M, TreeError> {
        let idx = self.validate(p)?;
        Ok(&mut self.arena[idx as usize].meta)
    }

    /// Swaps the element stored at `p`, returning the old one. Structure and
    /// position validity are unaffected.
    pub fn replace(&mut self, p: Position, e: E) -> Result<E, TreeError> {
        let idx = self.validate(p)?;
        self.arena[idx as usize]
            .element
            .replace(e)
            .ok_or(TreeError::StalePosition)
    }

    /// Rotates `p` above its parent.
    pub fn rotate(&mut self, p: Position) -> Result<(), TreeError> {
        let x = self.validate(p)?;
        let y = get_p(&self.arena, x).ok_or(TreeError::NoParent)?;
        trace!("rotate {x} above {y}");
        self.root = util::rotate(&mut self.arena, self.root, x);
        Ok(())
    }

    /// Trinode restructuring of `x`, its parent `y` and grandparent `z`.
    ///
    /// When `x` and `y` are children on the same side the single rotation
    /// promotes `y`; otherwise `x` is rotated twice. Returns the position that
    /// now occupies `z`'s old slot.
    pub fn restructure(&mut self, x: Position) -> Result<Position, TreeError> {
        let xi = self.validate(x)?;
        let yi = get_p(&self.arena, xi).ok_or(TreeError::NoParent)?;
        let zi = get_p(&self.arena, yi).ok_or(TreeError::NoGrandparent)?;
        let aligned = (get_l(&self.arena, zi) == Some(yi)) == (get_l(&self.arena, yi) == Some(xi));
        trace!("restructure x={xi} y={yi} z={zi} aligned={aligned}");
        if aligned {
            self.root = util::rotate(&mut self.arena, self.root, yi);
            Ok(self.position(yi))
        } else {
            self.root = util::rotate(&mut self.arena, self.root, xi);
            self.root = util::rotate(&mut self.arena, self.root, xi);
            Ok(x)
        }
    }

    /// Leftmost position of `p`'s subtree.
    pub fn subtree_first(&self, p: Position) -> Result<Position, TreeError> {
        let idx = self.validate(p)?;
        Ok(self.position_of(util::first(&self.arena, Some(idx))).unwrap_or(p))
    }

    /// Rightmost position of `p`'s subtree.
    pub fn subtree_last(&self, p: Position) -> Result<Position, TreeError> {
        let idx = self.validate(p)?;
        Ok(self.position_of(util::last(&self.arena, Some(idx))).unwrap_or(p))
    }

    /// In-order successor of `p`.
    pub fn after(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let idx = self.validate(p)?;
        Ok(self.position_of(util::next(&self.arena, idx)))
    }

    /// In-order predecessor of `p`.
    pub fn before(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let idx = self.validate(p)?;
        Ok(self.position_of(util::prev(&self.arena, idx)))
    }

    /// Renders the tree for debugging, one node per line.
    pub fn to_tree_string<F>(&self, tab: &str, label: F) -> String
    where
        F: Fn(&E) -> String,
    {
        util::print::print_tree(&self.arena, self.root, tab, |slot| {
            slot.element.as_ref().map_or_else(String::new, &label)
        })
    }

    /// Checks parent/child consistency, reachability of every live node and
    /// the cached size.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            if self.size != 0 {
                return Err(format!("empty tree reports size {}", self.size));
            }
            return Ok(());
        };
        if get_p(&self.arena, root).is_some() {
            return Err(format!("root {root} has a parent"));
        }
        let mut seen = 0usize;
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            if !self.arena[idx as usize].is_live() {
                return Err(format!("released slot {idx} is linked into the tree"));
            }
            seen += 1;
            if seen > self.size {
                return Err(format!("more than {} reachable nodes", self.size));
            }
            for child in [get_l(&self.arena, idx), get_r(&self.arena, idx)]
                .into_iter()
                .flatten()
            {
                if get_p(&self.arena, child) != Some(idx) {
                    return Err(format!("node {child} does not point back to parent {idx}"));
                }
                stack.push(child);
            }
        }
        if seen != self.size {
            return Err(format!("{seen} reachable nodes, size is {}", self.size));
        }
        let live = self.arena.iter().filter(|s| s.is_live()).count();
        if live != self.size {
            return Err(format!("{live} live slots, size is {}", self.size));
        }
        Ok(())
    }
}

impl<E, M: Default> LinkedBinaryTree<E, M> {
    fn alloc(&mut self, e: E, parent: Option<u32>) -> Result<u32, TreeError> {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize].occupy(e, parent);
                idx
            }
            None => {
                let idx = next_index(self.arena.len())?;
                self.arena.push(Slot::new(e, parent));
                idx
            }
        };
        self.size += 1;
        Ok(idx)
    }

    fn release(&mut self, idx: u32) -> Option<E> {
        let slot = &mut self.arena[idx as usize];
        let element = slot.release();
        if !slot.is_retired() {
            self.free.push(idx);
        }
        element
    }

    /// Creates the sole node of an empty tree.
    pub fn add_root(&mut self, e: E) -> Result<Position, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::TreeNotEmpty);
        }
        let idx = self.alloc(e, None)?;
        self.root = Some(idx);
        Ok(self.position(idx))
    }

    pub fn add_left(&mut self, p: Position, e: E) -> Result<Position, TreeError> {
        self.add_child(p, e, true)
    }

    pub fn add_right(&mut self, p: Position, e: E) -> Result<Position, TreeError> {
        self.add_child(p, e, false)
    }

    fn add_child(&mut self, p: Position, e: E, left: bool) -> Result<Position, TreeError> {
        let parent = self.validate(p)?;
        let occupied = if left {
            get_l(&self.arena, parent)
        } else {
            get_r(&self.arena, parent)
        };
        if occupied.is_some() {
            return Err(TreeError::ChildExists);
        }
        let idx = self.alloc(e, Some(parent))?;
        relink(&mut self.arena, parent, Some(idx), left);
        Ok(self.position(idx))
    }

    /// Removes a node with at most one child, splicing that child into its
    /// place. The position (and every copy of it) becomes stale.
    pub fn delete(&mut self, p: Position) -> Result<E, TreeError> {
        let idx = self.validate(p)?;
        let l = get_l(&self.arena, idx);
        let r = get_r(&self.arena, idx);
        if l.is_some() && r.is_some() {
            return Err(TreeError::TwoChildren);
        }
        let child = l.or(r);
        match get_p(&self.arena, idx) {
            Some(parent) => {
                let is_left = get_l(&self.arena, parent) == Some(idx);
                relink(&mut self.arena, parent, child, is_left);
            }
            None => {
                if let Some(c) = child {
                    set_p(&mut self.arena, c, None);
                }
                self.root = child;
            }
        }
        self.size -= 1;
        self.release(idx).ok_or(TreeError::StalePosition)
    }

    /// Removes every node. Outstanding positions become stale.
    pub fn clear(&mut self) {
        for idx in 0..self.arena.len() as u32 {
            if self.arena[idx as usize].is_live() {
                self.release(idx);
            }
        }
        self.root = None;
        self.size = 0;
    }
}

/// Index for a slot appended to an arena of `len` slots.
fn next_index(len: usize) -> Result<u32, TreeError> {
    u32::try_from(len).map_err(|_| TreeError::CapacityExceeded)
}

impl<E, M> Default for LinkedBinaryTree<E, M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones get a fresh identity: positions of the original are foreign to the
/// copy.
impl<E: Clone, M: Clone> Clone for LinkedBinaryTree<E, M> {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::fresh(),
            root: self.root,
            size: self.size,
            arena: self.arena.clone(),
            free: self.free.clone(),
        }
    }
}

impl<E, M> Tree for LinkedBinaryTree<E, M> {
    fn root(&self) -> Option<Position> {
        self.position_of(self.root)
    }

    fn parent(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let idx = self.validate(p)?;
        Ok(self.position_of(get_p(&self.arena, idx)))
    }

    fn children(&self, p: Position) -> Result<Vec<Position>, TreeError> {
        let idx = self.validate(p)?;
        Ok([get_l(&self.arena, idx), get_r(&self.arena, idx)]
            .into_iter()
            .flatten()
            .map(|i| self.position(i))
            .collect())
    }

    fn len(&self) -> usize {
        self.size
    }

    fn num_children(&self, p: Position) -> Result<usize, TreeError> {
        let idx = self.validate(p)?;
        Ok(get_l(&self.arena, idx).is_some() as usize + get_r(&self.arena, idx).is_some() as usize)
    }
}

impl<E, M> BinaryTree for LinkedBinaryTree<E, M> {
    fn left(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let idx = self.validate(p)?;
        Ok(self.position_of(get_l(&self.arena, idx)))
    }

    fn right(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let idx = self.validate(p)?;
        Ok(self.position_of(get_r(&self.arena, idx)))
    }
}

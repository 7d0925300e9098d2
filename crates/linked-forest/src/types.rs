//! Node link trait and position handles.
//!
//! Nodes live in a [`Vec`]-backed arena owned by a single tree. Every
//! structural "pointer" is an `Option<u32>` index into that arena, so the
//! parent back-references never own anything.

use std::sync::atomic::{AtomicU64, Ordering};

/// Parent / left / right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one tree instance, unique for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeId(u64);

impl TreeId {
    pub(crate) fn fresh() -> Self {
        TreeId(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque handle to one node of one tree.
///
/// Two positions are equal iff they name the same node of the same tree.
/// A position is only meaningful to the tree that produced it; reading
/// through it goes via that tree (`tree.element(p)`), which rejects foreign
/// and stale handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) tree: TreeId,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl Position {
    /// The tree this position belongs to.
    pub fn tree_id(&self) -> TreeId {
        self.tree
    }
}

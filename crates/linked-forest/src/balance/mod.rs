//! Rebalancing policies.
//!
//! A [`crate::map::SortedMap`] performs plain BST navigation and edits, then
//! reports what it touched through the three hooks of [`Balance`]. Every
//! hook defaults to a no-op, which is exactly the unbalanced search tree.

pub mod avl;
pub mod splay;

use crate::error::TreeError;
use crate::linked::LinkedBinaryTree;
use crate::types::Position;

pub use avl::Avl;
pub use splay::Splay;

pub trait Balance {
    /// Per-node bookkeeping the policy keeps inside the tree.
    type Meta: Default;

    /// Called with the freshly attached leaf (or new root).
    fn on_insert<E>(
        &mut self,
        _tree: &mut LinkedBinaryTree<E, Self::Meta>,
        _p: Position,
    ) -> Result<(), TreeError> {
        Ok(())
    }

    /// Called with the former parent of the node that was unlinked, `None`
    /// when the removed node was the root.
    fn on_delete<E>(
        &mut self,
        _tree: &mut LinkedBinaryTree<E, Self::Meta>,
        _parent: Option<Position>,
    ) -> Result<(), TreeError> {
        Ok(())
    }

    /// Called with the position a lookup halted at, or an overwritten node.
    fn on_access<E>(
        &mut self,
        _tree: &mut LinkedBinaryTree<E, Self::Meta>,
        _p: Position,
    ) -> Result<(), TreeError> {
        Ok(())
    }

    /// Verifies the policy's own invariant over the whole tree.
    fn check<E>(&self, _tree: &LinkedBinaryTree<E, Self::Meta>) -> Result<(), String> {
        Ok(())
    }
}

/// Plain binary search tree: no rebalancing at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbalanced;

impl Balance for Unbalanced {
    type Meta = ();
}

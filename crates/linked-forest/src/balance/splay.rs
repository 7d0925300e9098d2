//! Splay balancing: every touched node is rotated all the way to the root.

use log::trace;

use crate::error::TreeError;
use crate::linked::LinkedBinaryTree;
use crate::tree::{BinaryTree, Tree};
use crate::types::Position;

use super::Balance;

/// Self-adjusting policy with amortized logarithmic cost and no per-node
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Splay;

impl Balance for Splay {
    type Meta = ();

    fn on_insert<E>(&mut self, tree: &mut LinkedBinaryTree<E>, p: Position) -> Result<(), TreeError> {
        splay(tree, p)
    }

    fn on_delete<E>(
        &mut self,
        tree: &mut LinkedBinaryTree<E>,
        parent: Option<Position>,
    ) -> Result<(), TreeError> {
        match parent {
            Some(p) => splay(tree, p),
            None => Ok(()),
        }
    }

    fn on_access<E>(&mut self, tree: &mut LinkedBinaryTree<E>, p: Position) -> Result<(), TreeError> {
        splay(tree, p)
    }
}

/// Moves `p` to the root with zig, zig-zig and zig-zag steps.
pub fn splay<E, M>(tree: &mut LinkedBinaryTree<E, M>, p: Position) -> Result<(), TreeError> {
    while let Some(parent) = tree.parent(p)? {
        match tree.parent(parent)? {
            None => {
                trace!("splay: zig {}", p.index);
                tree.rotate(p)?;
            }
            Some(grand) => {
                let p_left = tree.left(parent)? == Some(p);
                let parent_left = tree.left(grand)? == Some(parent);
                if p_left == parent_left {
                    trace!("splay: zig-zig {}", p.index);
                    tree.rotate(parent)?;
                    tree.rotate(p)?;
                } else {
                    trace!("splay: zig-zag {}", p.index);
                    tree.rotate(p)?;
                    tree.rotate(p)?;
                }
            }
        }
    }
    Ok(())
}

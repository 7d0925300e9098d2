//! AVL balancing.
//!
//! Each node stores its height (`1 + max(left, right)`, an absent child
//! counting as 0). After an insertion or deletion the ancestors are walked
//! bottom-up; the first unbalanced one is fixed with a trinode
//! restructuring of its tallest grandchild.

use log::debug;

use crate::error::TreeError;
use crate::linked::LinkedBinaryTree;
use crate::tree::{BinaryTree, Tree};
use crate::types::Position;

use super::Balance;

/// Height-balanced policy: `|height(left) - height(right)| <= 1` everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Avl;

impl Balance for Avl {
    type Meta = u32;

    fn on_insert<E>(
        &mut self,
        tree: &mut LinkedBinaryTree<E, u32>,
        p: Position,
    ) -> Result<(), TreeError> {
        rebalance(tree, p)
    }

    fn on_delete<E>(
        &mut self,
        tree: &mut LinkedBinaryTree<E, u32>,
        parent: Option<Position>,
    ) -> Result<(), TreeError> {
        match parent {
            Some(p) => rebalance(tree, p),
            None => Ok(()),
        }
    }

    fn check<E>(&self, tree: &LinkedBinaryTree<E, u32>) -> Result<(), String> {
        for p in tree.postorder() {
            let (lh, rh) = child_heights(tree, p).map_err(|e| e.to_string())?;
            let stored = *tree.meta(p).map_err(|e| e.to_string())?;
            if stored != 1 + lh.max(rh) {
                return Err(format!(
                    "node {} stores height {stored}, children are {lh} and {rh}",
                    p.index
                ));
            }
            if lh.abs_diff(rh) > 1 {
                return Err(format!("node {} unbalanced: {lh} vs {rh}", p.index));
            }
        }
        Ok(())
    }
}

fn height<E>(tree: &LinkedBinaryTree<E, u32>, p: Option<Position>) -> Result<u32, TreeError> {
    match p {
        Some(p) => tree.meta(p).copied(),
        None => Ok(0),
    }
}

fn child_heights<E>(tree: &LinkedBinaryTree<E, u32>, p: Position) -> Result<(u32, u32), TreeError> {
    Ok((height(tree, tree.left(p)?)?, height(tree, tree.right(p)?)?))
}

fn recompute_height<E>(tree: &mut LinkedBinaryTree<E, u32>, p: Position) -> Result<u32, TreeError> {
    let (lh, rh) = child_heights(tree, p)?;
    let h = 1 + lh.max(rh);
    *tree.meta_mut(p)? = h;
    Ok(h)
}

fn is_balanced<E>(tree: &LinkedBinaryTree<E, u32>, p: Position) -> Result<bool, TreeError> {
    let (lh, rh) = child_heights(tree, p)?;
    Ok(lh.abs_diff(rh) <= 1)
}

/// Taller child of `p`; `favor_left` breaks ties toward the left.
fn tall_child<E>(
    tree: &LinkedBinaryTree<E, u32>,
    p: Position,
    favor_left: bool,
) -> Result<Option<Position>, TreeError> {
    let (lh, rh) = child_heights(tree, p)?;
    if lh + u32::from(favor_left) > rh {
        tree.left(p)
    } else {
        tree.right(p)
    }
}

/// Taller grandchild of `p` through its taller child, ties resolved toward
/// the side that keeps the three nodes aligned.
fn tall_grandchild<E>(
    tree: &LinkedBinaryTree<E, u32>,
    p: Position,
) -> Result<Option<Position>, TreeError> {
    let Some(child) = tall_child(tree, p, false)? else {
        return Ok(None);
    };
    let aligned_left = tree.left(p)? == Some(child);
    tall_child(tree, child, aligned_left)
}

/// Restores the AVL invariant on the path from `p` to the root.
///
/// Stops as soon as a node's recomputed height matches its height before
/// the step: nothing above it can have changed.
pub fn rebalance<E>(tree: &mut LinkedBinaryTree<E, u32>, p: Position) -> Result<(), TreeError> {
    let mut ancestor = Some(p);
    while let Some(mut node) = ancestor {
        let old_height = *tree.meta(node)?;
        if !is_balanced(tree, node)? {
            let Some(x) = tall_grandchild(tree, node)? else {
                break;
            };
            debug!("avl: restructure at node {}", node.index);
            node = tree.restructure(x)?;
            if let Some(l) = tree.left(node)? {
                recompute_height(tree, l)?;
            }
            if let Some(r) = tree.right(node)? {
                recompute_height(tree, r)?;
            }
        }
        if recompute_height(tree, node)? == old_height {
            break;
        }
        ancestor = tree.parent(node)?;
    }
    Ok(())
}

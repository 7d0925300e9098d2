//! Positional tree abstractions.
//!
//! [`Tree`] is general tree navigation expressed purely through
//! [`Position`]s. [`BinaryTree`] narrows it to at most a left and a right
//! child. Derived operations (depth, height, traversals) are provided
//! methods, implemented iteratively so that degenerate trees never exhaust
//! the call stack.

use crate::error::TreeError;
use crate::traversal::{Inorder, Postorder, Preorder};
use crate::types::Position;

pub trait Tree {
    fn root(&self) -> Option<Position>;

    fn parent(&self, p: Position) -> Result<Option<Position>, TreeError>;

    /// Children of `p` in traversal order.
    fn children(&self, p: Position) -> Result<Vec<Position>, TreeError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_root(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.parent(p)?.is_none())
    }

    fn num_children(&self, p: Position) -> Result<usize, TreeError> {
        Ok(self.children(p)?.len())
    }

    fn is_leaf(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.num_children(p)? == 0)
    }

    /// Number of edges between `p` and the root.
    fn depth(&self, p: Position) -> Result<usize, TreeError> {
        let mut depth = 0;
        let mut curr = self.parent(p)?;
        while let Some(ancestor) = curr {
            depth += 1;
            curr = self.parent(ancestor)?;
        }
        Ok(depth)
    }

    /// Number of edges on the longest downward path from `p` to a leaf.
    fn height(&self, p: Position) -> Result<usize, TreeError> {
        let mut height = 0;
        let mut stack = vec![(p, 0usize)];
        while let Some((curr, dist)) = stack.pop() {
            height = height.max(dist);
            for child in self.children(curr)? {
                stack.push((child, dist + 1));
            }
        }
        Ok(height)
    }

    /// Parents before their subtrees, children in [`Tree::children`] order.
    fn preorder(&self) -> Preorder<'_, Self>
    where
        Self: Sized,
    {
        Preorder::new(self)
    }

    /// Subtrees before their parent, the root last.
    fn postorder(&self) -> Postorder<'_, Self>
    where
        Self: Sized,
    {
        Postorder::new(self)
    }

    /// Every position of the tree, in preorder.
    fn positions(&self) -> Preorder<'_, Self>
    where
        Self: Sized,
    {
        self.preorder()
    }
}

pub trait BinaryTree: Tree {
    fn left(&self, p: Position) -> Result<Option<Position>, TreeError>;

    fn right(&self, p: Position) -> Result<Option<Position>, TreeError>;

    /// The other child of `p`'s parent, if any.
    fn sibling(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let Some(parent) = self.parent(p)? else {
            return Ok(None);
        };
        if self.left(parent)? == Some(p) {
            self.right(parent)
        } else {
            self.left(parent)
        }
    }

    /// Left subtree, node, right subtree.
    fn inorder(&self) -> Inorder<'_, Self>
    where
        Self: Sized,
    {
        Inorder::new(self)
    }
}

//! Lazy position traversals.
//!
//! Each iterator keeps its own explicit stack and snapshots nothing: it
//! reads the tree as it goes, so it must not outlive a structural change
//! (the shared borrow of the tree enforces this).

use crate::tree::{BinaryTree, Tree};
use crate::types::Position;

pub struct Preorder<'a, T: Tree + ?Sized> {
    tree: &'a T,
    stack: Vec<Position>,
}

impl<'a, T: Tree + ?Sized> Preorder<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<T: Tree + ?Sized> Iterator for Preorder<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let p = self.stack.pop()?;
        let children = self.tree.children(p).ok()?;
        self.stack.extend(children.into_iter().rev());
        Some(p)
    }
}

pub struct Postorder<'a, T: Tree + ?Sized> {
    tree: &'a T,
    // `true` once the node's children have been pushed.
    stack: Vec<(Position, bool)>,
}

impl<'a, T: Tree + ?Sized> Postorder<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        Self {
            tree,
            stack: tree.root().map(|p| (p, false)).into_iter().collect(),
        }
    }
}

impl<T: Tree + ?Sized> Iterator for Postorder<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            let (p, expanded) = self.stack.pop()?;
            if expanded {
                return Some(p);
            }
            self.stack.push((p, true));
            let children = self.tree.children(p).ok()?;
            self.stack
                .extend(children.into_iter().rev().map(|c| (c, false)));
        }
    }
}

pub struct Inorder<'a, T: BinaryTree + ?Sized> {
    tree: &'a T,
    stack: Vec<Position>,
    curr: Option<Position>,
}

impl<'a, T: BinaryTree + ?Sized> Inorder<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            curr: tree.root(),
        }
    }
}

impl<T: BinaryTree + ?Sized> Iterator for Inorder<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(c) = self.curr {
            self.stack.push(c);
            self.curr = self.tree.left(c).ok()?;
        }
        let p = self.stack.pop()?;
        self.curr = self.tree.right(p).ok()?;
        Some(p)
    }
}

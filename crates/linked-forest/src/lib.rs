//! Arena-backed positional binary trees and the sorted maps built on them.
//!
//! A [`LinkedBinaryTree`] keeps its nodes in a `Vec` and addresses them by
//! `u32` index; callers only ever hold [`Position`] handles, which the tree
//! checks for ownership and staleness on every use. [`SortedMap`] interprets
//! such a tree as a binary search tree and delegates balancing to a
//! [`Balance`] policy:
//!
//! - [`Unbalanced`]: plain BST ([`TreeMap`]).
//! - [`Avl`]: height-balanced via trinode restructuring ([`AvlMap`]).
//! - [`Splay`]: every touched node is splayed to the root ([`SplayMap`]).
//!
//! Both balancing policies are built on the same two primitives,
//! [`LinkedBinaryTree::rotate`] and [`LinkedBinaryTree::restructure`].
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait, [`Position`], [`TreeId`] |
//! | [`tree`] | [`Tree`] and [`BinaryTree`] traits |
//! | [`traversal`] | preorder / postorder / inorder iterators |
//! | [`linked`] | [`LinkedBinaryTree`] |
//! | [`util`] | arena-level `first`, `next`, `prev`, `rotate`, printing |
//! | [`balance`] | [`Balance`] hooks, [`Avl`], [`Splay`] |
//! | [`map`] | [`SortedMap`] and its iterators |
//!
//! ```
//! use linked_forest::AvlMap;
//!
//! let mut map = AvlMap::new();
//! for k in [5, 3, 8, 1, 4, 7, 9] {
//!     map.put(k, k * 10).unwrap();
//! }
//! map.remove(&5).unwrap();
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 3, 4, 7, 8, 9]);
//! assert_eq!(map.get(&7), Ok(&70));
//! ```

pub mod balance;
pub mod error;
pub mod linked;
pub mod map;
pub mod traversal;
pub mod tree;
pub mod types;
pub mod util;

pub use balance::{Avl, Balance, Splay, Unbalanced};
pub use error::TreeError;
pub use linked::LinkedBinaryTree;
pub use map::{AvlMap, Entry, SortedMap, SplayMap, TreeMap};
pub use tree::{BinaryTree, Tree};
pub use types::{Node, Position, TreeId};

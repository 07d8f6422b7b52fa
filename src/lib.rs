//! This crate exposes a plain, unbalanced Binary Search Tree mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). This
//! tree never rebalances, so inserting sorted values produces a tree whose
//! height equals its length. [`OrderedTree::is_balanced`] reports when that
//! has happened but doesn't fix it. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! tree.insert(10).insert(5).insert(15).insert(2).insert(7);
//!
//! assert_eq!(tree.bfs(), [&10, &5, &15, &2, &7]);
//! assert_eq!(tree.dfs_in_order(), [&2, &5, &7, &10, &15]);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.find_second_highest(), Some(&10));
//! ```
//!
//! ## Logging
//!
//! Mutations and structural queries emit [`tracing`] spans and events at
//! `trace`/`debug` level. Values are never recorded. Install a subscriber to
//! see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod subtree;
mod traverse;
mod tree;

pub use error::TreeError;
pub use node::{NodeId, NodeRef};
pub use subtree::Subtree;
pub use tree::OrderedTree;

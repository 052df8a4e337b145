//! This crate exposes an ordered key container built on a plain (unbalanced)
//! Binary Search Tree, plus a locked handle for sharing one between threads.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores the key that was inserted
//! and will sometimes have child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//! 3. No two `Node`s hold equal keys. Inserting a key that is already
//!    present leaves the tree untouched.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys takes `O(height)`, where `height` is the number of
//! edges on the longest path from the root `Node` to a leaf `Node`. Nothing
//! here rebalances, so inserting keys in sorted order produces a tree whose
//! height is one less than its size. Every walk over the tree (insertion,
//! search, traversal, height, and even `Drop`) is therefore iterative so
//! that such skewed trees never exhaust the call stack.
//!
//! # Examples
//!
//! ```
//! use keytree::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for name in ["Jose", "Ana", "Pedro", "Ana"] {
//!     tree.insert(name);
//! }
//!
//! assert_eq!(tree.in_order_traversal(), [&"Ana", &"Jose", &"Pedro"]);
//! assert_eq!(tree.height(), 1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod sync;
pub mod tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}

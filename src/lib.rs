//! This crate exposes an unbalanced Binary Search Tree (BST) along with a small harness for timing
//! it against randomized workloads.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The tree in [`unbalanced`] makes no attempt to
//! keep that height near `O(lg N)`: insert values in sorted order and every operation degrades
//! to walking a list. BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Workloads
//!
//! [`workload`] drives a tree through insert, search, and remove phases using values drawn from
//! any [`rand::Rng`] and reports how long each phase took. The `searchtree` binary wires it up to
//! a command line.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod error;
pub mod unbalanced;
pub mod workload;

pub use error::WorkloadError;
pub use unbalanced::Tree as OrderedTree;

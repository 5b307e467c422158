//! avltree: a height-balanced binary search tree over an index arena
//!
//! Layered like a small application:
//! - `domain`: the tree itself (insert, rebalance, traversal, validation)
//! - `application`: services building and exercising trees
//! - `config`: layered settings
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{AvlTree, Subtree, SubtreeMut, TreeShape};

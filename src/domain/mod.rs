//! Domain layer: the in-memory AVL tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod render;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use node::{AvlNode, EMPTY_HEIGHT};
pub use render::TreeShape;
pub use tree::{AvlTree, Iter, Recompute, Subtree, SubtreeMut};

//! Node record stored in the tree arena.

use generational_arena::Index;

/// Height of an empty subtree.
pub const EMPTY_HEIGHT: i32 = -1;

/// A single key together with its two child slots.
///
/// Children are arena indices; `None` is an empty subtree. `height` and
/// `balance` describe the subtree rooted here and are refreshed by the
/// engine after every structural change.
#[derive(Debug, Clone)]
pub struct AvlNode<K> {
    pub key: K,
    pub left: Option<Index>,
    pub right: Option<Index>,
    pub height: i32,
    pub balance: i32,
}

impl<K> AvlNode<K> {
    /// A fresh leaf: two empty children, height 0, balance 0.
    pub fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
            balance: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

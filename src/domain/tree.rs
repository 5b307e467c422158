//! Arena-backed AVL tree.
//!
//! Nodes live in a generational arena and refer to their children by index.
//! An absent child index is an empty subtree with height `-1` and balance `0`.
//! Rotations only move child indices between node records; they never
//! allocate and never compare keys.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{AvlNode, EMPTY_HEIGHT};

/// How far a height/balance recompute reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    /// Only the given node; its children are assumed to be current.
    Local,
    /// The whole subtree, bottom-up.
    Recursive,
}

/// Self-balancing binary search tree over totally ordered keys.
///
/// Duplicate keys are ignored on insert, so every key appears at most once.
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    arena: Arena<AvlNode<K>>,
    root: Option<Index>,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Read-only view of the whole tree.
    pub fn root(&self) -> Subtree<'_, K> {
        Subtree {
            tree: self,
            slot: self.root,
        }
    }

    /// Mutable view of the whole tree.
    ///
    /// Writing keys through it bypasses rebalancing and can break search
    /// order; re-verify with [`validate`](Self::validate) or
    /// [`check_balanced`](Self::check_balanced) afterwards.
    pub fn root_mut(&mut self) -> SubtreeMut<'_, K> {
        let slot = self.root;
        SubtreeMut { tree: self, slot }
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|idx| &self.arena[idx].key)
    }

    /// Height of the root subtree.
    ///
    /// An empty tree reports `0` here even though an empty subtree counts as
    /// `-1` everywhere inside the balancing logic, so a single-node tree and
    /// an empty tree both report `0`.
    pub fn get_height(&self) -> i32 {
        self.root.map_or(0, |idx| self.arena[idx].height)
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        let mut idx = self.root?;
        while let Some(left) = self.arena[idx].left {
            idx = left;
        }
        Some(&self.arena[idx].key)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        let mut idx = self.root?;
        while let Some(right) = self.arena[idx].right {
            idx = right;
        }
        Some(&self.arena[idx].key)
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    pub(crate) fn node(&self, idx: Index) -> &AvlNode<K> {
        &self.arena[idx]
    }

    fn height_of(&self, slot: Option<Index>) -> i32 {
        slot.map_or(EMPTY_HEIGHT, |idx| self.arena[idx].height)
    }

    fn balance_of(&self, slot: Option<Index>) -> i32 {
        slot.map_or(0, |idx| self.arena[idx].balance)
    }

    /// Recompute `height` starting at the root.
    ///
    /// With [`Recompute::Local`] only the root is touched and its children
    /// must already be correct.
    pub fn update_heights(&mut self, mode: Recompute) {
        self.update_heights_at(self.root, mode);
    }

    /// Recompute `balance` starting at the root. Heights must be current.
    pub fn update_balances(&mut self, mode: Recompute) {
        self.update_balances_at(self.root, mode);
    }

    fn update_heights_at(&mut self, slot: Option<Index>, mode: Recompute) {
        let Some(idx) = slot else { return };
        let (left, right) = (self.arena[idx].left, self.arena[idx].right);
        if mode == Recompute::Recursive {
            self.update_heights_at(left, mode);
            self.update_heights_at(right, mode);
        }
        self.arena[idx].height = 1 + self.height_of(left).max(self.height_of(right));
    }

    fn update_balances_at(&mut self, slot: Option<Index>, mode: Recompute) {
        let Some(idx) = slot else { return };
        let (left, right) = (self.arena[idx].left, self.arena[idx].right);
        if mode == Recompute::Recursive {
            self.update_balances_at(left, mode);
            self.update_balances_at(right, mode);
        }
        self.arena[idx].balance = self.height_of(left) - self.height_of(right);
    }

    /// Local recompute of one node: heights first, then balances.
    fn refresh(&mut self, idx: Index) {
        self.update_heights_at(Some(idx), Recompute::Local);
        self.update_balances_at(Some(idx), Recompute::Local);
    }

    /// After a rotation the demoted node is now a child of the promoted one,
    /// so it has to be recomputed first.
    fn refresh_rotated(&mut self, demoted: Index, promoted: Index) {
        self.refresh(demoted);
        self.refresh(promoted);
    }

    /// Right rotation around `root`; returns the new subtree root.
    ///
    /// The left child is promoted, `root` becomes its right child and the
    /// left child's former right subtree becomes `root`'s left subtree.
    /// Heights and balances are left untouched.
    pub(crate) fn rotate_right(&mut self, root: Index) -> Index {
        let Some(pivot) = self.arena[root].left.take() else {
            return root;
        };
        let inner = std::mem::replace(&mut self.arena[pivot].right, Some(root));
        self.arena[root].left = inner;
        trace!(?root, ?pivot, "rotate right");
        pivot
    }

    /// Mirror of [`rotate_right`](Self::rotate_right).
    pub(crate) fn rotate_left(&mut self, root: Index) -> Index {
        let Some(pivot) = self.arena[root].right.take() else {
            return root;
        };
        let inner = std::mem::replace(&mut self.arena[pivot].left, Some(root));
        self.arena[root].right = inner;
        trace!(?root, ?pivot, "rotate left");
        pivot
    }

    /// Restore the AVL invariant at `idx` after one of its subtrees changed.
    ///
    /// Returns the index now rooting this subtree.
    fn rebalance(&mut self, idx: Index) -> Index {
        let mut top = idx;
        self.refresh(top);
        loop {
            let balance = self.arena[top].balance;
            if balance > 1 {
                let Some(left) = self.arena[top].left else { break };
                if self.arena[left].balance < 0 {
                    let promoted = self.rotate_left(left);
                    self.refresh_rotated(left, promoted);
                    self.arena[top].left = Some(promoted);
                    self.refresh(top);
                }
                let promoted = self.rotate_right(top);
                self.refresh_rotated(top, promoted);
                top = promoted;
            } else if balance < -1 {
                let Some(right) = self.arena[top].right else { break };
                if self.arena[right].balance > 0 {
                    let promoted = self.rotate_right(right);
                    self.refresh_rotated(right, promoted);
                    self.arena[top].right = Some(promoted);
                    self.refresh(top);
                }
                let promoted = self.rotate_left(top);
                self.refresh_rotated(top, promoted);
                top = promoted;
            } else {
                break;
            }
        }
        top
    }

    /// Recompute every height and balance, then report whether each subtree
    /// satisfies `|balance| < 2`. An empty tree is balanced.
    #[instrument(level = "debug", skip(self))]
    pub fn check_balanced(&mut self) -> bool {
        self.update_heights(Recompute::Recursive);
        self.update_balances(Recompute::Recursive);
        let balanced = self.is_balanced_at(self.root);
        debug!(balanced, nodes = self.len(), "check_balanced");
        balanced
    }

    fn is_balanced_at(&self, slot: Option<Index>) -> bool {
        match slot {
            None => true,
            Some(idx) => {
                let node = &self.arena[idx];
                node.balance.abs() < 2
                    && self.is_balanced_at(node.left)
                    && self.is_balanced_at(node.right)
            }
        }
    }
}

impl<K: Ord> AvlTree<K> {
    /// Insert `key`, rebalancing every subtree on the way back up.
    ///
    /// Returns `false` and leaves the tree unchanged if the key is already
    /// present.
    #[instrument(level = "trace", skip(self, key))]
    pub fn insert(&mut self, key: K) -> bool {
        let (root, inserted) = self.insert_at(self.root, key);
        self.root = Some(root);
        inserted
    }

    fn insert_at(&mut self, slot: Option<Index>, key: K) -> (Index, bool) {
        let Some(idx) = slot else {
            let idx = self.arena.insert(AvlNode::leaf(key));
            return (self.rebalance(idx), true);
        };
        let inserted = match key.cmp(&self.arena[idx].key) {
            Ordering::Less => {
                let (child, inserted) = self.insert_at(self.arena[idx].left, key);
                self.arena[idx].left = Some(child);
                inserted
            }
            Ordering::Greater => {
                let (child, inserted) = self.insert_at(self.arena[idx].right, key);
                self.arena[idx].right = Some(child);
                inserted
            }
            Ordering::Equal => {
                trace!("duplicate key ignored");
                false
            }
        };
        (self.rebalance(idx), inserted)
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut slot = self.root;
        while let Some(idx) = slot {
            let node = &self.arena[idx];
            slot = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<K: Ord + fmt::Debug> AvlTree<K> {
    /// Audit the tree without modifying it.
    ///
    /// Checks search order, that cached heights and balances match the
    /// current shape, and the AVL bound. Reports the first violation found.
    pub fn validate(&self) -> DomainResult<()> {
        self.audit(self.root, None, None).map(|_| ())
    }

    /// Returns the actual height of the subtree at `slot`.
    fn audit(&self, slot: Option<Index>, lower: Option<&K>, upper: Option<&K>) -> DomainResult<i32> {
        let Some(idx) = slot else {
            return Ok(EMPTY_HEIGHT);
        };
        let node = &self.arena[idx];
        let out_of_order = lower
            .filter(|b| node.key <= **b)
            .or_else(|| upper.filter(|b| node.key >= **b));
        if let Some(bound) = out_of_order {
            return Err(DomainError::OrderViolation {
                key: format!("{:?}", node.key),
                bound: format!("{:?}", bound),
            });
        }

        let left = self.audit(node.left, lower, Some(&node.key))?;
        let right = self.audit(node.right, Some(&node.key), upper)?;
        let height = 1 + left.max(right);
        let balance = left - right;
        if node.height != height {
            return Err(DomainError::StaleHeight {
                key: format!("{:?}", node.key),
                cached: node.height,
                actual: height,
            });
        }
        if node.balance != balance {
            return Err(DomainError::StaleBalance {
                key: format!("{:?}", node.key),
                cached: node.balance,
                actual: balance,
            });
        }
        if balance.abs() > 1 {
            return Err(DomainError::Unbalanced {
                key: format!("{:?}", node.key),
                balance,
            });
        }
        Ok(height)
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read-only view of a (possibly empty) subtree.
pub struct Subtree<'a, K> {
    tree: &'a AvlTree<K>,
    slot: Option<Index>,
}

impl<K> Clone for Subtree<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Subtree<'_, K> {}

impl<'a, K> Subtree<'a, K> {
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// `-1` when empty.
    pub fn height(&self) -> i32 {
        self.tree.height_of(self.slot)
    }

    /// `0` when empty.
    pub fn balance(&self) -> i32 {
        self.tree.balance_of(self.slot)
    }

    pub fn key(&self) -> Option<&'a K> {
        self.slot.map(|idx| &self.tree.node(idx).key)
    }

    /// Non-empty with two empty children.
    pub fn is_leaf(&self) -> bool {
        self.slot.is_some_and(|idx| self.tree.node(idx).is_leaf())
    }

    pub fn left(&self) -> Subtree<'a, K> {
        self.child(|node| node.left)
    }

    pub fn right(&self) -> Subtree<'a, K> {
        self.child(|node| node.right)
    }

    fn child(&self, pick: impl Fn(&AvlNode<K>) -> Option<Index>) -> Subtree<'a, K> {
        Subtree {
            tree: self.tree,
            slot: self.slot.and_then(|idx| pick(self.tree.node(idx))),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Subtree<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subtree")
            .field("key", &self.key())
            .field("height", &self.height())
            .field("balance", &self.balance())
            .finish()
    }
}

/// Mutable view of a (possibly empty) subtree.
///
/// Keys can be rewritten in place; nothing is rebalanced or re-sorted.
pub struct SubtreeMut<'a, K> {
    tree: &'a mut AvlTree<K>,
    slot: Option<Index>,
}

impl<'a, K> SubtreeMut<'a, K> {
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn height(&self) -> i32 {
        self.tree.height_of(self.slot)
    }

    pub fn balance(&self) -> i32 {
        self.tree.balance_of(self.slot)
    }

    pub fn key(&self) -> Option<&K> {
        self.slot.map(|idx| &self.tree.arena[idx].key)
    }

    pub fn key_mut(&mut self) -> Option<&mut K> {
        let idx = self.slot?;
        Some(&mut self.tree.arena[idx].key)
    }

    pub fn left_mut(&mut self) -> SubtreeMut<'_, K> {
        let slot = self.slot.and_then(|idx| self.tree.arena[idx].left);
        SubtreeMut {
            tree: &mut *self.tree,
            slot,
        }
    }

    pub fn right_mut(&mut self) -> SubtreeMut<'_, K> {
        let slot = self.slot.and_then(|idx| self.tree.arena[idx].right);
        SubtreeMut {
            tree: &mut *self.tree,
            slot,
        }
    }

    /// Consume the view and descend left, keeping the original borrow.
    pub fn into_left(self) -> SubtreeMut<'a, K> {
        let slot = self.slot.and_then(|idx| self.tree.arena[idx].left);
        SubtreeMut {
            tree: self.tree,
            slot,
        }
    }

    pub fn into_right(self) -> SubtreeMut<'a, K> {
        let slot = self.slot.and_then(|idx| self.tree.arena[idx].right);
        SubtreeMut {
            tree: self.tree,
            slot,
        }
    }
}

/// In-order iterator over the keys of an [`AvlTree`].
///
/// Holds the left spine of the unvisited part of the tree, so memory stays
/// proportional to the tree height.
pub struct Iter<'a, K> {
    tree: &'a AvlTree<K>,
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a AvlTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut slot: Option<Index>) {
        while let Some(idx) = slot {
            self.stack.push(idx);
            slot = self.tree.node(idx).left;
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let idx = self.stack.pop()?;
        let node = tree.node(idx);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tree_of(keys: &[i32]) -> AvlTree<i32> {
        keys.iter().copied().collect()
    }

    #[rstest]
    #[case::single_right(&[8, 5, 4], 5)]
    #[case::single_left(&[4, 6, 8], 6)]
    #[case::left_right(&[10, 5, 7], 7)]
    #[case::right_left(&[6, 12, 9], 9)]
    fn given_three_keys_when_inserted_then_root_is_median(#[case] keys: &[i32], #[case] root: i32) {
        let tree = tree_of(keys);

        assert_eq!(tree.root_key(), Some(&root));
        assert_eq!(tree.get_height(), 1);
        assert_eq!(tree.root().balance(), 0);
        let mut sorted = keys.to_vec();
        sorted.sort();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), sorted);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn given_empty_tree_then_height_is_zero_and_traversal_is_empty() {
        let mut tree: AvlTree<i32> = AvlTree::new();

        assert_eq!(tree.get_height(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
        assert!(tree.root().is_empty());
        assert_eq!(tree.root().height(), EMPTY_HEIGHT);
        assert_eq!(tree.root().balance(), 0);
        assert!(tree.check_balanced());
    }

    #[test]
    fn given_subtrees_then_is_leaf_is_true_only_for_childless_nodes() {
        let tree = tree_of(&[2, 1]);

        assert!(!tree.root().is_leaf());
        assert!(tree.root().left().is_leaf());
        assert!(!tree.root().right().is_leaf());
    }

    #[test]
    fn given_single_key_then_height_is_zero_with_empty_children() {
        let tree = tree_of(&[42]);

        assert_eq!(tree.get_height(), 0);
        assert_eq!(tree.root().height(), 0);
        assert!(tree.root().left().is_empty());
        assert!(tree.root().right().is_empty());
    }

    #[test]
    fn given_duplicate_key_when_inserted_then_tree_is_unchanged() {
        let mut tree = tree_of(&[3, 1, 2]);
        let before: Vec<_> = tree.iter().copied().collect();

        assert!(!tree.insert(2));
        assert!(!tree.insert(3));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), before);
    }

    #[test]
    fn given_right_rotation_then_only_child_slots_move() {
        // 8 <- 5 <- 4 without rebalancing, built by hand.
        let mut tree = AvlTree::new();
        let a = tree.arena.insert(AvlNode::leaf(8));
        let b = tree.arena.insert(AvlNode::leaf(5));
        let c = tree.arena.insert(AvlNode::leaf(6));
        tree.arena[a].left = Some(b);
        tree.arena[b].right = Some(c);
        tree.root = Some(a);

        let promoted = tree.rotate_right(a);

        assert_eq!(promoted, b);
        assert_eq!(tree.arena[b].right, Some(a));
        assert_eq!(tree.arena[a].left, Some(c));
        assert_eq!(tree.arena[a].right, None);
        assert_eq!(tree.arena[b].left, None);
        assert_eq!(tree.arena.len(), 3);
    }

    #[test]
    fn given_left_rotation_then_inner_subtree_changes_parent() {
        let mut tree = AvlTree::new();
        let a = tree.arena.insert(AvlNode::leaf(4));
        let b = tree.arena.insert(AvlNode::leaf(8));
        let c = tree.arena.insert(AvlNode::leaf(6));
        tree.arena[a].right = Some(b);
        tree.arena[b].left = Some(c);

        let promoted = tree.rotate_left(a);

        assert_eq!(promoted, b);
        assert_eq!(tree.arena[b].left, Some(a));
        assert_eq!(tree.arena[a].right, Some(c));
    }

    #[test]
    fn given_rotation_without_pivot_then_root_is_kept() {
        let mut tree = AvlTree::new();
        let a = tree.arena.insert(AvlNode::leaf(1));

        assert_eq!(tree.rotate_right(a), a);
        assert_eq!(tree.rotate_left(a), a);
    }

    #[test]
    fn given_stale_heights_when_recursive_update_then_heights_are_restored() {
        let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
        for (_, node) in tree.arena.iter_mut() {
            node.height = 99;
            node.balance = 99;
        }
        assert!(tree.validate().is_err());

        tree.update_heights(Recompute::Recursive);
        tree.update_balances(Recompute::Recursive);

        assert_eq!(tree.get_height(), 2);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn given_local_update_then_only_that_node_changes() {
        let mut tree = tree_of(&[2, 1, 3]);
        let left = tree.arena[tree.root.unwrap()].left.unwrap();
        tree.arena[left].height = 5;

        tree.update_heights(Recompute::Local);

        assert_eq!(tree.get_height(), 6);
        assert_eq!(tree.arena[left].height, 5);
    }

    #[test]
    fn given_stale_state_when_check_balanced_then_recomputes_first() {
        let mut tree = tree_of(&[5, 3, 8, 1]);
        for (_, node) in tree.arena.iter_mut() {
            node.balance = 7;
        }

        assert!(tree.check_balanced());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn given_hand_built_chain_when_check_balanced_then_false() {
        let mut tree = AvlTree::new();
        let a = tree.arena.insert(AvlNode::leaf(1));
        let b = tree.arena.insert(AvlNode::leaf(2));
        let c = tree.arena.insert(AvlNode::leaf(3));
        tree.arena[a].right = Some(b);
        tree.arena[b].right = Some(c);
        tree.root = Some(a);

        assert!(!tree.check_balanced());
        assert!(matches!(
            tree.validate(),
            Err(DomainError::Unbalanced { balance: -2, .. })
        ));
    }

    #[test]
    fn given_misplaced_key_when_validate_then_reports_order_violation() {
        let mut tree = tree_of(&[2, 1, 3]);
        let left = tree.arena[tree.root.unwrap()].left.unwrap();
        tree.arena[left].key = 9;

        assert!(matches!(
            tree.validate(),
            Err(DomainError::OrderViolation { .. })
        ));
    }

    #[test]
    fn given_mutable_view_when_key_rewritten_in_place_then_validate_reports_order() {
        let mut tree = tree_of(&[2, 1, 3]);

        {
            let mut root = tree.root_mut();
            assert_eq!(root.key(), Some(&2));
            assert_eq!(root.height(), 1);
            if let Some(key) = root.left_mut().key_mut() {
                *key = 9;
            }
        }

        assert_eq!(tree.root().left().key(), Some(&9));
        assert!(matches!(
            tree.validate(),
            Err(DomainError::OrderViolation { .. })
        ));
        // Shape is untouched, so the balance check still passes.
        assert!(tree.check_balanced());
    }

    #[test]
    fn given_mutable_view_when_descending_then_reaches_grandchildren() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);

        let mut leaf = tree.root_mut().into_right().into_left();
        assert_eq!(leaf.key(), Some(&5));
        assert!(leaf.left_mut().is_empty());
        if let Some(key) = leaf.key_mut() {
            *key = 5;
        }

        assert!(tree.root_mut().into_left().into_left().right_mut().is_empty());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn given_ascending_run_then_tree_stays_logarithmic() {
        let tree: AvlTree<i32> = (0..1023).collect();

        assert_eq!(tree.len(), 1023);
        assert_eq!(tree.get_height(), 9);
        assert_eq!(tree.first(), Some(&0));
        assert_eq!(tree.last(), Some(&1022));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn given_iterator_then_can_restart_and_clone() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let mut iter = tree.iter();
        iter.next();
        let rest: Vec<_> = iter.clone().copied().collect();

        assert_eq!(rest, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(iter.len(), 6);
        assert_eq!((&tree).into_iter().count(), 7);
        assert_eq!(tree.iter().count(), 7);
    }

    #[test]
    fn given_tree_then_contains_reports_membership() {
        let tree = tree_of(&[10, 20, 30]);

        assert!(tree.contains(&20));
        assert!(!tree.contains(&25));
    }
}

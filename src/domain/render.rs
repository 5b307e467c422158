//! Human-readable tree shapes for diagnostics.

use std::fmt::Display;

use termtree::Tree;

use crate::domain::tree::{AvlTree, Subtree};

/// Placeholder for an empty child slot next to a non-empty sibling.
const EMPTY_SLOT: &str = "·";

pub trait TreeShape {
    /// Sideways drawing: right subtree on top, one tab per level.
    fn to_shape_string(&self) -> String;

    /// Box-drawing tree, children listed left then right.
    fn to_tree_string(&self) -> Tree<String>;
}

impl<K: Display> TreeShape for AvlTree<K> {
    fn to_shape_string(&self) -> String {
        let mut lines = Vec::new();
        if !self.is_empty() {
            shape_lines(self.root(), 0, &mut lines);
        }
        lines.join("\n")
    }

    fn to_tree_string(&self) -> Tree<String> {
        match self.root().key() {
            Some(_) => build_tree(self.root()),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

fn shape_lines<K: Display>(subtree: Subtree<'_, K>, level: usize, lines: &mut Vec<String>) {
    let Some(key) = subtree.key() else { return };
    let indent = "\t".repeat(level);
    let (left, right) = (subtree.left(), subtree.right());
    if !right.is_empty() {
        shape_lines(right, level + 1, lines);
        lines.push(format!("{indent} / "));
    }
    lines.push(format!("{indent}{key}"));
    if !left.is_empty() {
        lines.push(format!("{indent} \\ "));
        shape_lines(left, level + 1, lines);
    }
}

fn build_tree<K: Display>(subtree: Subtree<'_, K>) -> Tree<String> {
    let label = subtree
        .key()
        .map_or_else(|| EMPTY_SLOT.to_string(), |key| key.to_string());
    let mut tree = Tree::new(label);
    if !subtree.is_empty() && !subtree.is_leaf() {
        tree.push(build_tree(subtree.left()));
        tree.push(build_tree(subtree.right()));
    }
    tree
}

//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Invariant violations found by auditing a tree.
///
/// `insert` never fails; these only come out of [`AvlTree::validate`] and
/// always indicate a defect in rebalancing or a corrupted tree.
///
/// [`AvlTree::validate`]: crate::domain::AvlTree::validate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("subtree at {key} is unbalanced: balance {balance}")]
    Unbalanced { key: String, balance: i32 },

    #[error("key {key} is on the wrong side of {bound}")]
    OrderViolation { key: String, bound: String },

    #[error("stale height at {key}: cached {cached}, actual {actual}")]
    StaleHeight { key: String, cached: i32, actual: i32 },

    #[error("stale balance at {key}: cached {cached}, actual {actual}")]
    StaleBalance { key: String, cached: i32, actual: i32 },
}

/// Result type for tree audits.
pub type DomainResult<T> = Result<T, DomainError>;

use thiserror::Error;

/// Failures reported by tree and map operations.
///
/// Apart from [`TreeError::CapacityExceeded`], every variant is a caller
/// precondition violation. Operations that fail leave the tree untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The position was produced by a different tree instance.
    #[error("INVALID_POSITION")]
    InvalidPosition,
    /// The position's node has been removed from the tree.
    #[error("STALE_POSITION")]
    StalePosition,
    #[error("KEY_NOT_FOUND")]
    KeyNotFound,
    #[error("TREE_NOT_EMPTY")]
    TreeNotEmpty,
    #[error("CHILD_EXISTS")]
    ChildExists,
    /// Structural delete of a node with two children.
    #[error("TWO_CHILDREN")]
    TwoChildren,
    /// Rotation requested for the root.
    #[error("NO_PARENT")]
    NoParent,
    /// Trinode restructuring requested for a child of the root.
    #[error("NO_GRANDPARENT")]
    NoGrandparent,
    /// The arena already holds `u32::MAX + 1` slots.
    #[error("CAPACITY_EXCEEDED")]
    CapacityExceeded,
}

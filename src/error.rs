//! Error types for the dual-tree core.

use thiserror::Error;

/// Main error type for dual-tree operations.
///
/// The taxonomy is deliberately narrow: this core has no I/O. Empty-stack
/// undo/redo and spurious timer fires are defined no-ops, not errors. The
/// only fallible seam is realizing a lazily-produced children sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("lazy children could not be produced: {0}")]
    LazyChildren(String),
}

impl TreeError {
    /// Convenience constructor for lazy producer failures.
    pub fn lazy_children(msg: impl Into<String>) -> Self {
        TreeError::LazyChildren(msg.into())
    }
}

/// Result type for dual-tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

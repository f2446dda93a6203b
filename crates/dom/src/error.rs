//! Error types for document tree surgery.

use thiserror::Error;

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DomError>;

/// Errors that can occur when restructuring the element tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    /// A node cannot become its own child.
    #[error("cannot append a node to itself")]
    AppendToSelf,

    /// Appending would create a cycle.
    #[error("cannot append an ancestor beneath its own descendant")]
    AppendAncestor,

    /// The document body is the tree root and cannot be re-parented.
    #[error("the document body cannot be appended to another node")]
    AppendRoot,
}

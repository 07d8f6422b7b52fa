use thiserror::Error;

/// Errors from building an [`OrderedTree`][crate::OrderedTree] out of a
/// caller-supplied shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A value sits on the wrong side of one of its ancestors, or equals one.
    /// `depth` is how far below the root the offending node is (the root is 0).
    #[error("value at depth {depth} breaks the ordering of its ancestors")]
    OutOfOrder {
        /// Distance from the root to the offending node.
        depth: usize,
    },
}

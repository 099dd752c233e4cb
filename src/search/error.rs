//! Error types for the search engine.

use thiserror::Error;

/// Search failures.
///
/// Finding nothing is not an error; only a tree that is not made of
/// mappings, sequences and scalars is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A node that is neither a mapping, a sequence, nor a scalar.
    #[error("Unsupported {kind} node at '{path}': expected a mapping, sequence or scalar")]
    UnsupportedNodeKind { path: String, kind: &'static str },
}

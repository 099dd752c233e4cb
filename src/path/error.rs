//! Error types for match path resolution.

use thiserror::Error;

/// Errors for path text that is not well formed.
///
/// A well-formed path that simply leads nowhere is not an error; the
/// resolver reports it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Unexpected character at a specific position.
    #[error("Unexpected '{found}' at position {position}, expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: String,
        expected: String,
    },
    /// Unexpected end of input.
    #[error("Unexpected end of path, expected {expected}")]
    UnexpectedEnd { expected: String },
    /// Bracket contents that are not a non-negative integer.
    #[error("Invalid sequence index '{text}' at position {position}")]
    InvalidIndex { position: usize, text: String },
}

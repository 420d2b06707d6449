//! Lexer error type

use super::core::Position;

/// The single failure kind of the lexer.
///
/// Raised when no classification rule applies to the current character, and
/// by the token predicates when a parser-side expectation does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({line}:{column})")]
pub struct LexError {
    /// Human readable message, without location
    pub message: String,
    /// Line of the failure, 1-based
    pub line: usize,
    /// Column of the failure, 0-based
    pub column: usize,
}

impl LexError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an error located at `position`
    pub fn at(message: impl Into<String>, position: Position) -> Self {
        Self::new(message, position.line, position.column)
    }
}

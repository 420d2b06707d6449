//! Character source trait
//!
//! The token reader only talks to its input through this trait, so any type
//! that can answer "what is next" and "where are we" can drive it.

use super::core::Position;
use super::error::LexError;

/// A forward-only character source with bounded lookahead
pub trait CharSource {
    /// Character `offset` positions ahead, `None` past the end of input
    fn peek(&self, offset: usize) -> Option<char>;

    /// Consume the current character.
    ///
    /// Advances even at end of input, so callers check [`CharSource::eof`]
    /// first whenever consumption matters.
    fn next(&mut self) -> Option<char>;

    /// Snapshot of the current position
    fn position(&self) -> Position;

    /// No characters left
    fn eof(&self) -> bool {
        self.peek(0).is_none()
    }

    /// Always fails with `message` located at the current position
    fn err<T>(&self, message: impl Into<String>) -> Result<T, LexError> {
        Err(LexError::at(message, self.position()))
    }
}

//! Character cursor
//!
//! Owns the source text and the read position. Lookahead never mutates;
//! consumption only moves forward.

use super::position::Position;
use crate::lexer::error::LexError;
use crate::lexer::source::CharSource;

/// In-memory character cursor
#[derive(Debug, Clone)]
pub struct CharCursor {
    /// Source text, one entry per character
    chars: Vec<char>,
    /// Current position
    position: Position,
}

impl CharCursor {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: Position::start(),
        }
    }

    /// Character at `cursor + offset` without consuming it
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.position
            .cursor
            .checked_add(offset)
            .and_then(|index| self.chars.get(index))
            .copied()
    }

    /// Consume and return the current character
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek(0);
        self.position.advance(c);
        c
    }

    pub fn eof(&self) -> bool {
        self.peek(0).is_none()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Fail with `message` at the current position
    pub fn err<T>(&self, message: impl Into<String>) -> Result<T, LexError> {
        Err(LexError::at(message, self.position))
    }
}

impl From<&str> for CharCursor {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl CharSource for CharCursor {
    fn peek(&self, offset: usize) -> Option<char> {
        CharCursor::peek(self, offset)
    }

    fn next(&mut self) -> Option<char> {
        CharCursor::next(self)
    }

    fn position(&self) -> Position {
        self.position
    }
}

//! Source position tracking
//!
//! - cursor: 0-based character offset into the source
//! - line: 1-based
//! - column: 0-based, resets after every consumed newline

use serde::{Deserialize, Serialize};

/// Immutable snapshot of a read position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Character offset, 0-based
    pub cursor: usize,
    /// Line number, 1-based
    pub line: usize,
    /// Column, 0-based
    pub column: usize,
}

impl Position {
    pub fn new(cursor: usize, line: usize, column: usize) -> Self {
        Self {
            cursor,
            line,
            column,
        }
    }

    /// Position of the first character of a source
    pub fn start() -> Self {
        Self {
            cursor: 0,
            line: 1,
            column: 0,
        }
    }

    /// Step past one character.
    ///
    /// `None` is the end-of-input sentinel; stepping past it still moves the
    /// cursor and column forward.
    pub fn advance(&mut self, c: Option<char>) {
        self.cursor += 1;
        if c == Some('\n') {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

//! Stylesheet lexer
//!
//! - `core`: character cursor and positions
//! - `chars`: character classes and lookahead predicates
//! - `reader`: token classification and lookahead buffering

pub mod chars;
pub mod core;
pub mod error;
pub mod reader;
pub mod source;
pub mod token;

pub use self::core::{CharCursor, Position};
pub use error::LexError;
pub use reader::TokenReader;
pub use source::CharSource;
pub use token::{Token, TokenBuilder, TokenKind};

/// Token reader over `source`
pub fn tokenize(source: &str) -> TokenReader<CharCursor> {
    TokenReader::from_source(source)
}

/// Tokenize `source` completely, failing on the first unrecognized character
pub fn tokenize_all(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source).all()
}

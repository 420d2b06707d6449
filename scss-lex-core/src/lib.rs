//! scss-lex Core - stylesheet lexer (pure logic, no IO)
//!
//! Turns stylesheet source text into position-annotated tokens for a
//! downstream parser, plus the predicates that parser uses to check them.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod lexer;
pub mod predicate;

// Re-export common types
pub use lexer::{
    tokenize, tokenize_all, CharCursor, CharSource, LexError, Position, Token, TokenKind,
    TokenReader,
};

pub use scss_lex_config::LexerConfig;

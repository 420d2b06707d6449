//! scss-lex - stylesheet tokenizer
//!
//! Unified entry point over the workspace crates:
//! - `scss-lex-config`: configuration data
//! - `scss-lex-core`: cursor, token reader and token predicates
//!
//! ```
//! use scss_lex_workspace::{tokenize_all, TokenKind};
//!
//! let tokens = tokenize_all("$gap: 4px;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Variable);
//! assert_eq!(tokens[0].value, "gap");
//! ```

pub use scss_lex_config::LexerConfig;
pub use scss_lex_core::lexer::{chars, TokenBuilder};
pub use scss_lex_core::predicate;
pub use scss_lex_core::{
    tokenize, tokenize_all, CharCursor, CharSource, LexError, Position, Token, TokenKind,
    TokenReader,
};

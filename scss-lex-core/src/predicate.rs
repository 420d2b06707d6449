//! Token predicates for the parser layer
//!
//! Stateless checks over tokens that were already produced. The assertion
//! variants fail with a `LexError` located at the token's start.

use crate::lexer::{LexError, Token, TokenKind};

/// Token is present and has type `kind`
pub fn is_type(token: Option<&Token>, kind: TokenKind) -> bool {
    token.is_some_and(|t| t.kind == kind)
}

/// Token is present and has value `value`
pub fn is_value(token: Option<&Token>, value: &str) -> bool {
    token.is_some_and(|t| t.value == value)
}

pub fn assert_type(token: &Token, kind: TokenKind) -> Result<(), LexError> {
    if token.kind == kind {
        return Ok(());
    }
    Err(LexError::at(
        format!("Expected a {}, got a {}", kind, token.kind),
        token.start,
    ))
}

pub fn assert_value(token: &Token, value: &str) -> Result<(), LexError> {
    if token.value == value {
        return Ok(());
    }
    Err(LexError::at(
        format!("Expected '{}', got '{}'", value, token.value),
        token.start,
    ))
}

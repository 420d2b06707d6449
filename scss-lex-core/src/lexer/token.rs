//! Token model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::core::Position;

/// Token type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Space,
    Comment,
    Number,
    ColorHex,
    Punctuation,
    Operator,
    Identifier,
    StringDouble,
    StringSingle,
    Atrule,
    Variable,
}

impl TokenKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Space => "space",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::ColorHex => "color_hex",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Operator => "operator",
            TokenKind::Identifier => "identifier",
            TokenKind::StringDouble => "string_double",
            TokenKind::StringSingle => "string_single",
            TokenKind::Atrule => "atrule",
            TokenKind::Variable => "variable",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, positioned span of source text.
///
/// `value` is the raw text with delimiters stripped (comment markers, quotes,
/// the `#`, `@` and `$` sigils); escapes are kept verbatim. `end` is the
/// position just after the last consumed character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            start,
            end,
        }
    }

    /// Number of source characters the token spans, delimiters included
    pub fn len(&self) -> usize {
        self.end.cursor - self.start.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Token under construction: kind and start are fixed before the sub-reader
/// consumes anything
pub struct TokenBuilder {
    kind: TokenKind,
    start: Position,
}

impl TokenBuilder {
    pub fn new(kind: TokenKind, start: Position) -> Self {
        Self { kind, start }
    }

    pub fn finish(self, end: Position, value: impl Into<String>) -> Token {
        Token::new(self.kind, value, self.start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::ColorHex.as_str(), "color_hex");
        assert_eq!(TokenKind::StringDouble.to_string(), "string_double");
        assert_eq!(TokenKind::Atrule.to_string(), "atrule");
    }

    #[test]
    fn test_builder_and_len() {
        let start = Position::new(3, 1, 3);
        let token = TokenBuilder::new(TokenKind::Variable, start)
            .finish(Position::new(8, 1, 8), "size");
        assert_eq!(token.kind, TokenKind::Variable);
        assert_eq!(token.value, "size");
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_json_shape() {
        let token = Token::new(
            TokenKind::ColorHex,
            "ff0099",
            Position::start(),
            Position::new(7, 1, 7),
        );
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["type"], "color_hex");
        assert_eq!(json["value"], "ff0099");
        assert_eq!(json["start"]["line"], 1);
        assert_eq!(json["end"]["cursor"], 7);

        let back: Token = serde_json::from_value(json).unwrap();
        assert_eq!(back, token);
    }
}

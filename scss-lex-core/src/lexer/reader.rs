//! Token reader
//!
//! Classifies the character at the cursor, hands off to one sub-reader and
//! buffers produced tokens so callers can look several tokens ahead.

use std::collections::VecDeque;

use scss_lex_config::LexerConfig;
use tracing::{debug, trace, warn};

use super::chars::{
    hex_length, is_comment_start, is_digit, is_hex_digit, is_ident, is_ident_start,
    is_line_break, is_number_start, is_operator, is_operator_repeatable, is_punctuation,
    is_quote, is_whitespace,
};
use super::core::CharCursor;
use super::error::LexError;
use super::source::CharSource;
use super::token::{Token, TokenBuilder, TokenKind};

/// Lazy token stream over a [`CharSource`]
pub struct TokenReader<S: CharSource = CharCursor> {
    source: S,
    /// Classified tokens not yet handed out by `next`
    tokens: VecDeque<Token>,
    source_name: Option<String>,
    /// Set once the iterator has yielded an error
    failed: bool,
}

impl TokenReader<CharCursor> {
    /// Reader over an in-memory source string
    pub fn from_source(source: &str) -> Self {
        Self::new(CharCursor::new(source))
    }
}

impl<S: CharSource> TokenReader<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    pub fn with_config(source: S, config: &LexerConfig) -> Self {
        debug!(
            target: "scss::lexer::reader",
            source = config.source_name.as_deref().unwrap_or("<input>"),
            lookahead = config.lookahead_capacity,
            "Created token reader"
        );
        Self {
            source,
            tokens: VecDeque::with_capacity(config.lookahead_capacity),
            source_name: config.source_name.clone(),
            failed: false,
        }
    }

    /// Token `offset` positions ahead, without consuming it.
    ///
    /// Pulls from the classifier until the buffer holds `offset + 1` tokens
    /// or input runs out. Repeated calls return the same token.
    pub fn peek(&mut self, offset: usize) -> Result<Option<&Token>, LexError> {
        while self.tokens.len() <= offset {
            match self.read_next()? {
                Some(token) => self.tokens.push_back(token),
                None => break,
            }
        }
        Ok(self.tokens.get(offset))
    }

    /// Consume the next token
    pub fn next(&mut self) -> Result<Option<Token>, LexError> {
        self.advance()
    }

    /// No tokens left
    pub fn eof(&mut self) -> Result<bool, LexError> {
        Ok(self.peek(0)?.is_none())
    }

    /// Drain the remaining tokens
    pub fn all(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.advance()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Fail at the source's current position
    pub fn err<T>(&self, message: impl Into<String>) -> Result<T, LexError> {
        self.source.err(message)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    fn advance(&mut self) -> Result<Option<Token>, LexError> {
        match self.tokens.pop_front() {
            Some(token) => Ok(Some(token)),
            None => self.read_next(),
        }
    }

    /// Classify the current character and run the matching sub-reader
    fn read_next(&mut self) -> Result<Option<Token>, LexError> {
        let Some(c) = self.source.peek(0) else {
            return Ok(None);
        };

        let token = if is_whitespace(c) {
            self.read_whitespace()
        } else if is_comment_start(&self.source) {
            self.read_comment()
        } else if is_number_start(&self.source) {
            self.read_number()
        } else if let Some(length) = hex_length(&self.source) {
            self.read_hex(length)
        } else if is_punctuation(c) {
            self.read_punctuation()
        } else if is_ident_start(c) {
            self.read_ident()
        } else if is_operator(c) {
            self.read_operator(c)
        } else if is_quote(c) {
            self.read_string(c)
        } else if c == '@' {
            self.read_sigiled(TokenKind::Atrule)
        } else if c == '$' {
            self.read_sigiled(TokenKind::Variable)
        } else {
            return self.unhandled(c);
        };

        trace!(
            target: "scss::lexer::reader",
            kind = %token.kind,
            value = %token.value,
            line = token.start.line,
            column = token.start.column,
            "Produced token"
        );
        Ok(Some(token))
    }

    fn unhandled<T>(&self, c: char) -> Result<T, LexError> {
        let result = self.source.err(format!("Can't handle character: \"{c}\""));
        if let Err(error) = &result {
            warn!(
                target: "scss::lexer::reader",
                source = self.source_name.as_deref().unwrap_or("<input>"),
                %error,
                "Lex error encountered"
            );
        }
        result
    }

    /// Consume while `predicate` holds, collecting the consumed characters
    fn read_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> String {
        let mut value = String::new();
        while let Some(c) = self.source.peek(0) {
            if !predicate(c) {
                break;
            }
            value.push(c);
            self.source.next();
        }
        value
    }

    fn read_whitespace(&mut self) -> Token {
        let token = TokenBuilder::new(TokenKind::Space, self.source.position());
        let value = self.read_while(is_whitespace);
        token.finish(self.source.position(), value)
    }

    fn read_comment(&mut self) -> Token {
        let token = TokenBuilder::new(TokenKind::Comment, self.source.position());
        self.source.next(); // '/'
        let value = match self.source.next() {
            Some('*') => self.read_block_comment(),
            _ => self.read_while(|c| !is_line_break(c)),
        };
        token.finish(self.source.position(), value)
    }

    /// Body of a `/* */` comment; the closing pair is consumed but not kept
    fn read_block_comment(&mut self) -> String {
        let mut value = String::new();
        let mut prev: Option<char> = None;
        while let Some(c) = self.source.peek(0) {
            self.source.next();
            if c == '/' && prev == Some('*') {
                return value;
            }
            if let Some(p) = prev {
                value.push(p);
            }
            prev = Some(c);
        }
        // Unterminated: everything up to end of input
        if let Some(p) = prev {
            value.push(p);
        }
        value
    }

    fn read_number(&mut self) -> Token {
        let token = TokenBuilder::new(TokenKind::Number, self.source.position());
        let mut seen_dot = false;
        let value = self.read_while(|c| {
            if c == '.' {
                !std::mem::replace(&mut seen_dot, true)
            } else {
                is_digit(c)
            }
        });
        token.finish(self.source.position(), value)
    }

    fn read_hex(&mut self, length: usize) -> Token {
        let token = TokenBuilder::new(TokenKind::ColorHex, self.source.position());
        self.source.next(); // '#'
        let mut value = String::with_capacity(length);
        for _ in 0..length {
            match self.source.peek(0) {
                Some(c) if is_hex_digit(c) => {
                    value.push(c);
                    self.source.next();
                }
                _ => break,
            }
        }
        token.finish(self.source.position(), value)
    }

    fn read_punctuation(&mut self) -> Token {
        let token = TokenBuilder::new(TokenKind::Punctuation, self.source.position());
        let value = self.read_one();
        token.finish(self.source.position(), value)
    }

    fn read_operator(&mut self, c: char) -> Token {
        let token = TokenBuilder::new(TokenKind::Operator, self.source.position());
        let value = if is_operator_repeatable(c) {
            self.read_while(|next| next == c)
        } else {
            self.read_one()
        };
        token.finish(self.source.position(), value)
    }

    fn read_ident(&mut self) -> Token {
        let token = TokenBuilder::new(TokenKind::Identifier, self.source.position());
        let value = self.read_while(is_ident);
        token.finish(self.source.position(), value)
    }

    /// Quoted string; escapes are kept verbatim, the quotes are dropped
    fn read_string(&mut self, quote: char) -> Token {
        let kind = if quote == '"' {
            TokenKind::StringDouble
        } else {
            TokenKind::StringSingle
        };
        let token = TokenBuilder::new(kind, self.source.position());
        self.source.next(); // opening quote

        let mut value = String::new();
        let mut escaped = false;
        while let Some(c) = self.source.peek(0) {
            self.source.next();
            if escaped {
                value.push(c);
                escaped = false;
            } else if c == '\\' {
                value.push(c);
                escaped = true;
            } else if c == quote {
                break;
            } else {
                value.push(c);
            }
        }
        token.finish(self.source.position(), value)
    }

    /// `@name` and `$name`: the sigil is consumed but not kept
    fn read_sigiled(&mut self, kind: TokenKind) -> Token {
        let token = TokenBuilder::new(kind, self.source.position());
        self.source.next();
        let value = self.read_while(is_ident);
        token.finish(self.source.position(), value)
    }

    fn read_one(&mut self) -> String {
        self.source.next().map(String::from).unwrap_or_default()
    }
}

impl<S: CharSource> Iterator for TokenReader<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.advance() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

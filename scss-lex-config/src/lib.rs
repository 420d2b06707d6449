//! scss-lex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! Configuration is handed to the lexer explicitly; nothing is read from the
//! environment.

use serde::{Deserialize, Serialize};

/// Configuration for a token reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Number of tokens the lookahead buffer reserves up front
    pub lookahead_capacity: usize,
    /// Label attached to log events (usually a file name)
    pub source_name: Option<String>,
}

impl LexerConfig {
    /// Config with a source label and default limits
    pub fn named(source_name: impl Into<String>) -> Self {
        Self {
            source_name: Some(source_name.into()),
            ..Self::default()
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            lookahead_capacity: 4,
            source_name: None,
        }
    }
}

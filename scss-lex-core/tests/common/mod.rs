//! Test helpers shared by the integration tests

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use scss_lex_core::{tokenize_all, Token, TokenKind};

/// Tokenize and keep only (type, value) pairs
pub fn kinds_and_values(input: &str) -> Vec<(TokenKind, String)> {
    tokenize_all(input)
        .unwrap_or_else(|e| panic!("Lex error: {e}"))
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect()
}

pub fn tok(kind: TokenKind, value: &str) -> (TokenKind, String) {
    (kind, value.to_string())
}

/// Source characters covered by `token`, delimiters included
pub fn covered(source: &str, token: &Token) -> String {
    source
        .chars()
        .skip(token.start.cursor)
        .take(token.len())
        .collect()
}

/// In-memory log sink for `tracing_subscriber::fmt`
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a trace-level subscriber writing into the returned buffer
pub fn with_captured_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

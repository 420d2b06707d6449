//! Character classes
//!
//! Single-character predicates are plain set membership tests. The lookahead
//! predicates only `peek` and never consume.

use super::source::CharSource;

/// Longest hex color run
const HEX_MAX: usize = 6;

pub fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | ' ')
}

pub fn is_line_break(c: char) -> bool {
    c == '\n'
}

pub fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '=' | '&' | '|' | '!' | '~' | '>' | '<' | '^'
    )
}

/// Operators that lex as a run of the same character (`&&`, `||`, `==`)
pub fn is_operator_repeatable(c: char) -> bool {
    matches!(c, '&' | '|' | '=')
}

pub fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        ',' | ';' | '(' | ')' | '{' | '}' | '[' | ']' | ':' | '#' | '.'
    )
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// `//` or `/*` at the current position
pub fn is_comment_start<S: CharSource + ?Sized>(source: &S) -> bool {
    source.peek(0) == Some('/') && matches!(source.peek(1), Some('/' | '*'))
}

/// A digit, or a `.` directly followed by a digit
pub fn is_number_start<S: CharSource + ?Sized>(source: &S) -> bool {
    match source.peek(0) {
        Some(c) if is_digit(c) => true,
        Some('.') => source.peek(1).is_some_and(is_digit),
        _ => false,
    }
}

/// Digit count of a hex color at the current position.
///
/// Only a run of exactly six or exactly three digits after the `#` is a
/// color. Longer runs are rejected, so the scan looks one digit past six.
pub fn hex_length<S: CharSource + ?Sized>(source: &S) -> Option<usize> {
    if source.peek(0) != Some('#') {
        return None;
    }
    let run = (1..=HEX_MAX + 1)
        .take_while(|&offset| source.peek(offset).is_some_and(is_hex_digit))
        .count();
    match run {
        6 => Some(6),
        3 => Some(3),
        _ => None,
    }
}

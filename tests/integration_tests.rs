//! End-to-end tests: a small declaration parser driven by the token reader

use scss_lex_workspace::predicate::{assert_type, assert_value, is_type, is_value};
use scss_lex_workspace::{tokenize, tokenize_all, LexError, Position, TokenKind, TokenReader};

/// Skip space and comment tokens
fn skip_trivia(reader: &mut TokenReader) -> Result<(), LexError> {
    while let Some(token) = reader.peek(0)? {
        if !matches!(token.kind, TokenKind::Space | TokenKind::Comment) {
            break;
        }
        reader.next()?;
    }
    Ok(())
}

/// Parse `name: value-tokens;` into `(name, [values])`
fn parse_declaration(source: &str) -> Result<(String, Vec<String>), LexError> {
    let mut reader = tokenize(source);
    skip_trivia(&mut reader)?;

    let name = match reader.next()? {
        Some(token) => {
            assert_type(&token, TokenKind::Identifier)?;
            token.value
        }
        None => return reader.err("Expected a declaration"),
    };
    match reader.next()? {
        Some(token) => assert_value(&token, ":")?,
        None => return reader.err("Expected ':'"),
    }

    let mut values = Vec::new();
    loop {
        skip_trivia(&mut reader)?;
        if is_value(reader.peek(0)?, ";") {
            reader.next()?;
            break;
        }
        match reader.next()? {
            Some(token) => values.push(token.value),
            None => return reader.err("Expected ';'"),
        }
    }
    Ok((name, values))
}

#[test]
fn test_parse_declaration() {
    let (name, values) = parse_declaration("  border: 1px solid #ccc;").unwrap();
    assert_eq!(name, "border");
    assert_eq!(values, vec!["1", "px", "solid", "ccc"]);
}

#[test]
fn test_parse_declaration_with_comment() {
    let (name, values) = parse_declaration("/* note */ margin: $gap // trailing\n;").unwrap();
    assert_eq!(name, "margin");
    assert_eq!(values, vec!["gap"]);
}

#[test]
fn test_parse_declaration_type_mismatch() {
    let err = parse_declaration("\n  $gap: 4px;").unwrap_err();
    assert_eq!(err.to_string(), "Expected a identifier, got a variable (2:2)");
}

#[test]
fn test_parse_declaration_value_mismatch() {
    let err = parse_declaration("color = red;").unwrap_err();
    assert_eq!(err.to_string(), "Expected ':', got ' ' (1:5)");
}

#[test]
fn test_parse_declaration_missing_semicolon() {
    let err = parse_declaration("color: red").unwrap_err();
    assert_eq!(err.to_string(), "Expected ';' (1:10)");
}

#[test]
fn test_parse_declaration_lex_error() {
    let err = parse_declaration("color: red\r;").unwrap_err();
    assert_eq!(err.to_string(), "Can't handle character: \"\r\" (1:10)");
}

#[test]
fn test_lookahead_for_rule_detection() {
    // `a:hover {` is a selector, `a: 1;` a declaration; both start `ident :`
    let mut reader = tokenize("a:hover { }");
    assert!(is_type(reader.peek(0).unwrap(), TokenKind::Identifier));
    assert!(is_value(reader.peek(1).unwrap(), ":"));
    assert!(is_type(reader.peek(2).unwrap(), TokenKind::Identifier));
    assert!(is_value(reader.peek(4).unwrap(), "{"));
    assert_eq!(reader.next().unwrap().unwrap().value, "a");
}

#[test]
fn test_hex_and_punctuation_disambiguation() {
    let tokens = tokenize_all("#FF0;#id").unwrap();
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.value.as_str())).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::ColorHex, "FF0"),
            (TokenKind::Punctuation, ";"),
            (TokenKind::Punctuation, "#"),
            (TokenKind::Identifier, "id"),
        ]
    );
}

#[test]
fn test_token_stream_as_json() {
    let tokens = tokenize_all("@include m;").unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["type"], "atrule");
    assert_eq!(json[0]["value"], "include");
    assert_eq!(json[3]["type"], "punctuation");
    assert_eq!(tokens[3].end, Position::new(11, 1, 11));
}

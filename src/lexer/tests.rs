//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Single and two-character operators
//! - Token spans
//! - Illegal bytes and end of input

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_ident, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, None).iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return", None);

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens[6].literal, "return");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_baz _underscore CamelCase lets", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].literal, "bar_baz");
    assert_eq!(tokens[2].literal, "_underscore");
    assert_eq!(tokens[3].literal, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].literal, "lets");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("abc123", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "123");
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 0 99999999999999999999", None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "5");
    assert_eq!(tokens[1].literal, "10");
    assert_eq!(tokens[2].literal, "0");
    // Range checking happens in the parser
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].literal, "99999999999999999999");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_single_char_operators() {
    assert_eq!(
        kinds("=+-!*/<>;(),{}"),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Comma,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_char_operators() {
    let tokens = tokenize("10 == 10; 10 != 9; a = !b", None);

    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[1].literal, "==");
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[5].literal, "!=");
    assert_eq!(tokens[9].kind, TokenKind::Assign);
    assert_eq!(tokens[10].kind, TokenKind::Bang);
}

#[test]
fn test_no_compound_comparisons() {
    assert_eq!(
        kinds("<= >="),
        vec![
            TokenKind::Less,
            TokenKind::Assign,
            TokenKind::Greater,
            TokenKind::Assign,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;\nlet add = fn(x, y) {\n\tx + y;\n};\r\nif (5 < 10) { return true; } else { return false; }";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Function,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::If,
            TokenKind::OpenParen,
            TokenKind::Int,
            TokenKind::Less,
            TokenKind::Int,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Else,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::False,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_illegal_bytes_do_not_stop_scanning() {
    let tokens = tokenize("a @ b # 1", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "#");
    assert_eq!(tokens[4].kind, TokenKind::Int);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_nul_byte_is_illegal() {
    assert_eq!(
        kinds("a\0b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Illegal,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_non_ascii_bytes_are_illegal() {
    let tokens = tokenize("é", None);

    // Two UTF-8 bytes, two illegal tokens
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_permanent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_and_blank_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  x == 42;", Some("test.lang".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[2].span.start.0, 7);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[3].span.end.0, 12);
    assert_eq!(tokens[5].span.start.0, 13);
    assert_eq!(tokens[5].span.end.0, 13);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.lang");
}

#[test]
fn test_default_file_name() {
    let lexer = Lexer::new("x");
    assert_eq!(lexer.file().as_str(), "shell");
}

#[test]
fn test_iterator_stops_before_eof() {
    let literals: Vec<String> = Lexer::new("a + 1").map(|t| t.literal).collect();
    assert_eq!(literals, vec!["a", "+", "1"]);
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("return"), TokenKind::Return);
    assert_eq!(lookup_ident("function"), TokenKind::Identifier);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Assign.to_string(), "ASSIGN");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::NotEquals.to_string(), "NOT_EQ");
    assert_eq!(TokenKind::Less.to_string(), "LT");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}

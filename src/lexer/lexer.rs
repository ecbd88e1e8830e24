use std::rc::Rc;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex =
        Regex::new("^[a-zA-Z_]+").expect("identifier pattern is valid");
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").expect("number pattern is valid");
}

/// Pull-based tokenizer over a single source string.
///
/// The cursor only moves forward; once `EOF` is produced every further call
/// to [`Lexer::next_token`] returns `EOF` again.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    /// Offset of `ch`
    position: usize,
    /// Offset of the byte after `ch`
    read_position: usize,
    /// Byte under examination, 0 once past the end
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer::with_file(source, None)
    }

    pub fn with_file(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn read_char(&mut self) {
        self.ch = self
            .source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0);

        if self.position < self.source.len() {
            self.position = self.read_position;
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Consumes the longest run matching `pattern` at the cursor.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let start = self.position;
        let len = pattern
            .find(&self.source.as_bytes()[start..])
            .map_or(0, |m| m.end());

        for _ in 0..len {
            self.read_char();
        }

        String::from_utf8_lossy(&self.source.as_bytes()[start..start + len]).into_owned()
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        let literal = (self.ch as char).to_string();
        self.read_char();
        MK_TOKEN!(kind, literal, start, start + 1, self.file)
    }

    fn double(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        let mut literal = (self.ch as char).to_string();
        self.read_char();
        literal.push(self.ch as char);
        self.read_char();
        MK_TOKEN!(kind, literal, start, start + 2, self.file)
    }

    /// Produces the next token and advances past it.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            let end = self.source.len();
            return MK_TOKEN!(TokenKind::EOF, String::new(), end, end, self.file);
        }

        let token = match self.ch {
            b'=' if self.peek_char() == b'=' => self.double(TokenKind::Equals),
            b'=' => self.single(TokenKind::Assign),
            b'!' if self.peek_char() == b'=' => self.double(TokenKind::NotEquals),
            b'!' => self.single(TokenKind::Bang),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::OpenParen),
            b')' => self.single(TokenKind::CloseParen),
            b',' => self.single(TokenKind::Comma),
            b'+' => self.single(TokenKind::Plus),
            b'{' => self.single(TokenKind::OpenCurly),
            b'}' => self.single(TokenKind::CloseCurly),
            b'-' => self.single(TokenKind::Minus),
            b'/' => self.single(TokenKind::Slash),
            b'*' => self.single(TokenKind::Asterisk),
            b'<' => self.single(TokenKind::Less),
            b'>' => self.single(TokenKind::Greater),
            ch if ch.is_ascii_alphabetic() || ch == b'_' => {
                let start = self.position;
                let literal = self.read_run(&IDENTIFIER_PATTERN);
                let end = start + literal.len();
                MK_TOKEN!(lookup_ident(&literal), literal, start, end, self.file)
            }
            ch if ch.is_ascii_digit() => {
                let start = self.position;
                let literal = self.read_run(&NUMBER_PATTERN);
                let end = start + literal.len();
                MK_TOKEN!(TokenKind::Int, literal, start, end, self.file)
            }
            ch => {
                tracing::trace!(byte = ch, offset = self.position, "illegal byte");
                self.single(TokenKind::Illegal)
            }
        };

        tracing::trace!(kind = %token.kind, literal = %token.literal, "token");
        token
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

/// Drains a fresh lexer over `source`, ending with a single `EOF` token.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::with_file(source, file);
    let mut tokens: Vec<Token> = lex.by_ref().collect();

    tokens.push(lex.next_token());
    tokens
}

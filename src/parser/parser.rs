//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its token cursor. The
//! parser pulls tokens from a [`Lexer`] one at a time, keeping the current
//! token and a single token of lookahead.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
    stmt::parse_stmt,
};

/// Deepest allowed expression nesting (prefix operands and groups).
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Errors never abort parsing: each one is appended to the error list and
/// the parser carries on from the next statement.
pub struct Parser {
    /// The lexer tokens are pulled from
    lexer: Lexer,
    /// Token under examination
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Errors in the order they were recorded
    errors: Vec<Error>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Expressions currently being parsed, innermost included
    nesting_depth: usize,
}

impl Parser {
    /// Creates a new Parser over `lexer` with its lookup tables registered.
    ///
    /// Reads two tokens so that both the current and the peek token are set.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            nesting_depth: 0,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Shifts the peek token into the current slot and pulls a new peek token.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peek token is `kind`, otherwise records a peek error.
    ///
    /// # Returns
    ///
    /// Returns true if the parser advanced.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                received: self.peek_token.kind,
            },
            self.peek_token.span.start.clone(),
        );
        self.push_error(error);
    }

    /// Records an error and keeps going.
    pub fn push_error(&mut self, error: Error) {
        tracing::debug!(
            offset = error.get_position().0,
            file = %error.get_position().1,
            "{}",
            error
        );
        self.errors.push(error);
    }

    /// Error messages in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Structured errors, with positions, in the order they were recorded.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Binding power of the peek token, `Lowest` if it is not an infix operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Binding power of the current token, `Lowest` if it is not an infix operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current_token.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix form
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Increments the nesting depth, recording an error if it exceeds
    /// [`MAX_NESTING_DEPTH`]. Call [`Parser::leave_nesting`] after every
    /// successful enter.
    ///
    /// # Returns
    ///
    /// Returns false, leaving the depth unchanged, if the limit was exceeded.
    pub fn enter_nesting(&mut self) -> bool {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            let error = Error::new(
                ErrorImpl::NestingTooDeep {
                    max: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            );
            self.push_error(error);
            return false;
        }

        self.nesting_depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }

    /// Advances until the peek token ends the statement, leaving the current
    /// token on the statement's last token.
    pub fn skip_to_statement_end(&mut self) {
        while !self
            .peek_token()
            .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
        {
            self.next_token();
        }
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Parses statements until `EOF`.
    ///
    /// Statements that fail to parse are left out of the program; their
    /// errors are available from [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                tracing::trace!(stmt = %stmt, "parsed statement");
                program.statements.push(stmt);
            }

            self.next_token();
        }

        tracing::debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }
}

/// Parses a source string into a Program.
///
/// This is the main entry point for parsing. It creates the lexer and the
/// parser, then parses every statement until EOF.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Optional name of the source, used in error positions
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its recorded errors)
/// - The parsed Program, possibly incomplete if errors were recorded
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::with_file(source, file));
    let program = parser.parse_program();

    (parser, program)
}

use crate::{
    ast::{
        ast::Statement,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses the statement starting at the current token.
///
/// Leaves the current token on the last token of the statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => Some(parse_expression_stmt(parser)),
    }
}

/// Skips to the statement terminator. `EOF` also ends the statement so an
/// unterminated `let` or `return` cannot stall the parser.
fn skip_to_semicolon(parser: &mut Parser) {
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
    {
        parser.next_token();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name = IdentifierExpr {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // The value expression is not parsed, only skipped
    skip_to_semicolon(parser);

    Some(Statement::Let(LetStmt {
        token,
        name,
        value: None,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    parser.next_token();
    skip_to_semicolon(parser);

    Some(Statement::Return(ReturnStmt {
        token,
        return_value: None,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Statement {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest);

    // Semicolons are optional after expressions
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Statement::Expression(ExpressionStmt { token, expression })
}

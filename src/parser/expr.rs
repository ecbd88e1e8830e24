use crate::{
    ast::{
        ast::Expression,
        expressions::{BooleanExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt expression loop.
///
/// Starts on the first token of the expression and leaves the current token
/// on its last token. An absent result means an error was recorded.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // 32 KiB red zone, 256 KiB new segment
    stacker::maybe_grow(32 * 1024, 256 * 1024, || {
        // Past the limit the rest of the statement is abandoned
        if !parser.enter_nesting() {
            parser.skip_to_statement_end();
            return None;
        }

        let result = parse_nested_expr(parser, bp);
        parser.leave_nesting();
        result
    })
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let error = Error::new(
            ErrorImpl::MissingPrefixHandler { kind: token_kind },
            parser.get_position(),
        );
        parser.push_error(error);
        return None;
    };

    let mut left = nud(parser);

    // While the next operator binds tighter than bp, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return left;
        };

        parser.next_token();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp);
    }

    left
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::Identifier(IdentifierExpr {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match parse_integer_literal(&token.literal) {
        Ok(value) => Some(Expression::Integer(IntegerExpr { token, value })),
        Err(_) => {
            let error = Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.literal.clone(),
                },
                token.span.start.clone(),
            );
            parser.push_error(error);
            None
        }
    }
}

/// Decimal, or octal when the literal has a leading zero (`010` is 8).
pub fn parse_integer_literal(literal: &str) -> Result<i64, std::num::ParseIntError> {
    match literal.strip_prefix('0') {
        Some(octal) if !octal.is_empty() => i64::from_str_radix(octal, 8),
        _ => literal.parse::<i64>(),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();

    parser.next_token();
    let right = parse_expr(parser, BindingPower::Prefix);

    Some(Expression::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right?),
    }))
}

/// Shared by every binary operator. `bp` is the operator's own binding power,
/// so operators of equal precedence associate to the left.
pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Option<Expression>,
    bp: BindingPower,
) -> Option<Expression> {
    let operator_token = parser.current_token().clone();

    parser.next_token();
    // The right operand is consumed even when the left one is absent
    let right = parse_expr(parser, bp);

    Some(Expression::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left?),
        right: Box::new(right?),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.next_token();
    let expr = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    expr
}

use std::fmt::{Debug, Display};

use crate::Span;

use super::{
    expressions::{BooleanExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Implemented by every AST node. `Display` is the canonical textual
/// reconstruction, which fully parenthesises prefix and infix expressions.
pub trait Node: Debug + Display {
    /// Literal text of the token that introduced the node.
    fn token_literal(&self) -> &str;
    /// Canonical reconstruction of the node.
    fn string(&self) -> String {
        self.to_string()
    }
}

/// Root of a parsed source. Not itself a statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Statement {
    /// Returns the span of the token that introduced the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Statement::Let(stmt) => &stmt.token.span,
            Statement::Return(stmt) => &stmt.token.span,
            Statement::Expression(stmt) => &stmt.token.span,
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression Types
///
/// Children are held by `Box`, so a tree owns all of its nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Expression {
    /// Returns the span of the token that introduced the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expression::Identifier(expr) => &expr.token.span,
            Expression::Integer(expr) => &expr.token.span,
            Expression::Boolean(expr) => &expr.token.span,
            Expression::Prefix(expr) => &expr.token.span,
            Expression::Infix(expr) => &expr.token.span,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::Integer(expr) => expr.token_literal(),
            Expression::Boolean(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
            Expression::Infix(expr) => expr.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Integer(expr) => write!(f, "{}", expr),
            Expression::Boolean(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
        }
    }
}

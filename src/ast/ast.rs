use std::{
    fmt::{self, Display},
    slice::Iter,
};

use crate::Span;

use super::{
    expressions::{BooleanExpr, CallExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt},
};

/// Statement
///
/// Downstream stages match on the variant rather than inspecting node types
/// at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    /// Literal text of the token the statement starts with.
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.expression.token_literal(),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Call(CallExpr),
}

impl Expr {
    /// Literal text of the token the expression starts with. For operator
    /// nodes this is the operator itself.
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => &expr.value,
            Expr::Integer(expr) => &expr.value,
            Expr::Boolean(expr) => {
                if expr.value {
                    "true"
                } else {
                    "false"
                }
            }
            Expr::Prefix(expr) => &expr.operator.value,
            Expr::Infix(expr) => &expr.operator.value,
            Expr::Call(expr) => expr.callee.token_literal(),
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.span,
            Expr::Integer(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Infix(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr.value),
            Expr::Integer(expr) => write!(f, "{}", expr.value),
            Expr::Boolean(expr) => write!(f, "{}", expr.value),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
            Expr::Call(expr) => write!(f, "{}", expr),
        }
    }
}

/// The root of the tree: every top-level statement in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

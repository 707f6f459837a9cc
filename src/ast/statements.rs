use std::fmt::{self, Display};

use crate::Span;

use super::{ast::Expr, expressions::IdentifierExpr};

/// `let <name> = <value>;`
///
/// `value` is `None` when the name and `=` were present but the value could
/// not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: IdentifierExpr,
    pub value: Option<Expr>,
    pub span: Span,
}

impl LetStmt {
    pub fn token_literal(&self) -> &str {
        "let"
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "let {} = {};", self.name.value, value),
            None => write!(f, "let {} = ;", self.name.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

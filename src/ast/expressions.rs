use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, Span};

use super::ast::Expr;

// LITERALS

/// Identifier Expression
/// Represents a name in the AST, including the name bound by `let`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub value: String,
    pub span: Span,
}

/// Integer Expression
/// Holds the literal digits; converting them to a number is left to later stages.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

// COMPLEX

/// Prefix Expression
/// Represents a prefix operation (`-x`, `+x`, `!x`) on an expression in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator.value, self.right_expr)
    }
}

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.value, self.right)
    }
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.callee, arguments.join(", "))
    }
}

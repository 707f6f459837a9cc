use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A diagnostic recorded while parsing, with the position it was detected at.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseFunction { .. } => "NoPrefixParseFunction",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedAssignment { .. } => "ExpectedAssignment",
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseFunction { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::UnexpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, received
            )),
            ErrorImpl::ExpectedIdentifier { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, a variable name must follow `let`",
                token
            )),
            ErrorImpl::ExpectedAssignment { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss an `=`?",
                token
            )),
            ErrorImpl::IllegalToken { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("no prefix parse function for token kind {kind}")]
    NoPrefixParseFunction { kind: TokenKind },
    #[error("expected next token to be {expected}, got {received} instead")]
    UnexpectedToken { expected: TokenKind, received: TokenKind },
    #[error("expected identifier after let, got {token}")]
    ExpectedIdentifier { token: TokenKind },
    #[error("expected '=' after identifier, got {token}")]
    ExpectedAssignment { token: TokenKind },
    #[error("illegal token: {token:?}")]
    IllegalToken { token: String },
}

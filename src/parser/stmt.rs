use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{ExpressionStmt, LetStmt},
    },
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Parses one statement, leaving the cursor on its last token.
///
/// Returns `None` when nothing could be built; the reason has been recorded
/// in the parser's error list.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    if let Some(handler) = parser.get_stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let expression = parse_expr(parser, BindingPower::Default)?;

    // The terminator is optional so the last expression in a program may omit it
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().clone(),
        expression,
    }))
}

pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let start = parser.get_position();

    let error = ErrorImpl::ExpectedIdentifier {
        token: parser.peek_token_kind(),
    };
    if !parser.expect_peek_error(TokenKind::Identifier, Some(error)) {
        return None;
    }

    let name_token = parser.current_token();
    let name = IdentifierExpr {
        value: name_token.value.clone(),
        span: name_token.span.clone(),
    };

    let error = ErrorImpl::ExpectedAssignment {
        token: parser.peek_token_kind(),
    };
    if !parser.expect_peek_error(TokenKind::Assignment, Some(error)) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default);

    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Let(LetStmt {
        name,
        value,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

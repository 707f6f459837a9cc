use crate::{
    ast::{
        ast::Expr,
        expressions::{BooleanExpr, CallExpr, IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::{source::TokenSource, tokens::TokenKind},
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression starting at the current token.
///
/// Operators are absorbed while the next token binds tighter than `bp`, so an
/// operator of equal binding power is left for the caller. That is what makes
/// every binary operator left associative. On return the cursor sits on the
/// last token of the expression.
pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_handler(token_kind) else {
        let error = if token_kind == TokenKind::Illegal {
            ErrorImpl::IllegalToken {
                token: parser.current_token().value.clone(),
            }
        } else {
            ErrorImpl::NoPrefixParseFunction { kind: token_kind }
        };
        let position = parser.get_position();
        parser.record_error(error, position);
        return None;
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than the current level, keep extending lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
        let Some(led) = parser.get_led_handler(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_primary_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let token = parser.current_token();
    let span = token.span.clone();

    match token.kind {
        TokenKind::Integer => Some(Expr::Integer(IntegerExpr {
            value: token.value.clone(),
            span,
        })),
        TokenKind::Identifier => Some(Expr::Identifier(IdentifierExpr {
            value: token.value.clone(),
            span,
        })),
        TokenKind::True | TokenKind::False => Some(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            span,
        })),
        kind => {
            let position = parser.get_position();
            parser.record_error(ErrorImpl::NoPrefixParseFunction { kind }, position);
            None
        }
    }
}

pub fn parse_prefix_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right_expr: Box::new(rhs),
    }))
}

/// Parses the right operand at the operator's own binding power.
pub fn parse_infix_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expr,
    bp: BindingPower,
) -> Option<Expr> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}

pub fn parse_call_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    left: Expr,
    _bp: BindingPower,
) -> Option<Expr> {
    let mut args = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        args.push(parse_expr(parser, BindingPower::Default)?);

        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            args.push(parse_expr(parser, BindingPower::Default)?);
        }

        if !parser.expect_peek(TokenKind::CloseParen) {
            return None;
        }
    }

    Some(Expr::Call(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        callee: Box::new(left),
        arguments: args,
    }))
}

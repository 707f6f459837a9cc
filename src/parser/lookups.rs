use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first. Tokens without an entry in the binding
/// power table bind at `Default`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Prefix,
    Call,
}

pub type StmtHandler<S> = fn(&mut Parser<S>) -> Option<Stmt>;
pub type NUDHandler<S> = fn(&mut Parser<S>) -> Option<Expr>;
pub type LEDHandler<S> = fn(&mut Parser<S>, Expr, BindingPower) -> Option<Expr>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Equality and relational
    parser.led(TokenKind::Equals, BindingPower::Equality, parse_infix_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equality, parse_infix_expr);
    parser.led(TokenKind::Less, BindingPower::Relational, parse_infix_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_infix_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_infix_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_infix_expr);

    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<S> = HashMap<TokenKind, StmtHandler<S>>;
pub type NUDLookup<S> = HashMap<TokenKind, NUDHandler<S>>;
pub type LEDLookup<S> = HashMap<TokenKind, LEDHandler<S>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

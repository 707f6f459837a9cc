//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, its token cursor and the
//! program-level parse loop. The parser keeps two tokens in view (`current`
//! and `peek`) over a pull-based [`TokenSource`] and maintains lookup tables
//! for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Parsing never aborts. Every failure is recorded as an [`Error`] and the
//! parser resynchronises at the next statement boundary.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser<S: TokenSource> {
    /// Where tokens are pulled from
    source: S,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Number of times the cursor has moved
    pos: usize,
    /// Diagnostics in the order they were detected
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<S>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<S>,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser bound to `source`.
    ///
    /// Two tokens are pulled immediately so that both `current` and `peek`
    /// are populated before any handler runs.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Parser {
            source,
            current,
            peek,
            pos: 0,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Moves `peek` into `current`, pulls a new `peek` and returns the token
    /// that was current before the call.
    pub fn advance(&mut self) -> Token {
        let next = self.source.next_token();
        self.pos += 1;
        let peek = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, peek)
    }

    /// Advances onto the peek token if it has the expected kind.
    ///
    /// Otherwise records `error` (or a generic unexpected-token error when
    /// none is given) at the peek token and leaves the cursor where it is.
    pub fn expect_peek_error(&mut self, expected_kind: TokenKind, error: Option<ErrorImpl>) -> bool {
        if self.peek.kind == expected_kind {
            self.advance();
            return true;
        }

        let error = error.unwrap_or(ErrorImpl::UnexpectedToken {
            expected: expected_kind,
            received: self.peek.kind,
        });
        let position = self.peek.span.start.clone();
        self.record_error(error, position);

        false
    }

    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        self.expect_peek_error(expected_kind, None)
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    pub fn record_error(&mut self, error: ErrorImpl, position: Position) {
        log::debug!("parse error at {} in {}: {}", position.0, position.1, error);
        self.errors.push(Error::new(error, position));
    }

    /// Diagnostics collected so far, in detection order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler<S>> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler<S>> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler<S>> {
        self.led_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<S>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Skips ahead to the end of a malformed statement: a `;`, the end of
    /// input, or the next `let`.
    ///
    /// Returns true when the cursor was left on a `let` other than the one
    /// the failed statement began at. That token has not been consumed and
    /// must be parsed as the next statement.
    fn synchronize(&mut self, stmt_start: usize) -> bool {
        loop {
            if self.current.kind == TokenKind::Let && self.pos != stmt_start {
                return true;
            }

            if self.current.is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
                || self.peek.kind == TokenKind::Let
            {
                return false;
            }

            log::trace!("skipping {:?} while recovering", self.current.kind);
            self.advance();
        }
    }

    /// Parses statements until the token source is exhausted.
    ///
    /// Always returns a program; check [`Parser::errors`] afterwards to find
    /// out whether the input was well formed.
    pub fn parse_program(&mut self) -> Program {
        let start = self.get_position();
        let mut statements = vec![];

        while self.current.kind != TokenKind::EOF {
            let errors_before = self.errors.len();
            let stmt_start = self.pos;

            if let Some(stmt) = parse_stmt(self) {
                log::debug!("parsed statement: {}", stmt);
                statements.push(stmt);
            }

            if self.errors.len() > errors_before && self.synchronize(stmt_start) {
                continue;
            }

            self.advance();
        }

        Program {
            statements,
            span: Span {
                start,
                end: self.get_position(),
            },
        }
    }
}

/// Parses everything `source` produces.
///
/// This is the main entry point for parsing. The returned program may be
/// partial when the error list is non-empty.
pub fn parse<S: TokenSource>(source: S) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (program, parser.into_errors())
}

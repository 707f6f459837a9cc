//! The pull interface the parser reads tokens through.

use std::collections::VecDeque;

use crate::{Position, Span};

use super::tokens::{Token, TokenKind};

/// A stream of tokens consumed one at a time.
///
/// Once `EOF` has been produced every further call must produce `EOF` again.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Adapts an already lexed token list, such as the output of an external
/// lexer, to [`TokenSource`].
///
/// A list that does not end in `EOF` is terminated with a synthetic one placed
/// at the end of its last token.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: VecDeque<Token>,
    end: Position,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(Position::null);

        TokenBuffer {
            tokens: tokens.into(),
            end,
        }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) if token.kind == TokenKind::EOF => {
                // Leave it in place so it keeps being returned
                self.tokens.push_front(token.clone());
                token
            }
            Some(token) => token,
            None => Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: self.end.clone(),
                    end: self.end.clone(),
                },
            },
        }
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        TokenBuffer::new(tokens)
    }
}

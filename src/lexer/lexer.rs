use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Receives the matched text and produces a token, or `None` for skipped input.
pub type RegexHandler = fn(&mut Lexer, String) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

macro_rules! pattern {
    ($regex:literal, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^", $regex)).unwrap(),
            handler: $handler,
        }
    };
}

lazy_static! {
    // Order matters: longer operators must come before their prefixes
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern!("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern!("[0-9]+", integer_handler),
        pattern!("\\s+", skip_handler),
        pattern!("//.*", skip_handler),
        pattern!("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern!("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern!("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern!("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern!("!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern!("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern!("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern!(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern!(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern!(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern!("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern!("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern!("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern!("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

/// Pull-based lexer. Each call to [`TokenSource::next_token`] scans just far
/// enough to produce one token.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            source,
            file: file_name,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    /// Builds a token starting at the current position and moves past it.
    pub fn emit(&mut self, kind: TokenKind, value: String) -> Token {
        let start = self.pos;
        self.pos += value.len();

        MK_TOKEN!(
            kind,
            value,
            Span {
                start: self.position(start),
                end: self.position(self.pos),
            }
        )
    }

    fn illegal(&mut self) -> Token {
        let ch = self.remainder().chars().next().unwrap_or('\0');
        log::debug!("illegal character {:?} at {} in {}", ch, self.pos, self.file);
        self.emit(TokenKind::Illegal, ch.to_string())
    }
}

fn integer_handler(lexer: &mut Lexer, matched: String) -> Option<Token> {
    Some(lexer.emit(TokenKind::Integer, matched))
}

fn skip_handler(lexer: &mut Lexer, matched: String) -> Option<Token> {
    lexer.pos += matched.len();
    None
}

fn symbol_handler(lexer: &mut Lexer, matched: String) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(lexer.emit(kind, matched))
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    if let Some(token) = handler(self, text) {
                        return token;
                    }
                }
                None => return self.illegal(),
            }
        }

        MK_TOKEN!(
            TokenKind::EOF,
            String::from("EOF"),
            Span {
                start: self.position(self.pos),
                end: self.position(self.pos),
            }
        )
    }
}

/// Lexes the whole source up front. The returned vector always ends with
/// exactly one `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

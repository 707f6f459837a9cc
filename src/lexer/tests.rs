//! Unit tests for the lexer module.
//!
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Illegal input
//! - The token buffer adapter

use super::{
    lexer::{tokenize, Lexer},
    source::{TokenBuffer, TokenSource},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("let true false"),
        vec![TokenKind::Let, TokenKind::True, TokenKind::False, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase letter".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    let values = ["foo", "bar", "baz_123", "_underscore", "CamelCase", "letter"];
    for (token, value) in tokens.iter().zip(values) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, value);
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 500000".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].value, "500000");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / == != < > = !"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    assert_eq!(
        kinds("a==!b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "let x = 5 // this is a comment\nlet y = 10".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens[3].value, "5");
    assert_eq!(tokens[4].kind, TokenKind::Let);
    assert_eq!(tokens[5].value, "y");
    assert_eq!(tokens[7].value, "10");
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let x = 42;".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string()));

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("1 + 20".to_string(), Some("test.lang".to_string()));

    assert_eq!((tokens[0].span.start.0, tokens[0].span.end.0), (0, 1));
    assert_eq!((tokens[1].span.start.0, tokens[1].span.end.0), (2, 3));
    assert_eq!((tokens[2].span.start.0, tokens[2].span.end.0), (4, 6));
    assert_eq!((tokens[3].span.start.0, tokens[3].span.end.0), (6, 6));
    assert_eq!(*tokens[0].span.start.1, "test.lang");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);
    assert_eq!(*tokens[0].span.start.1, "shell");

    assert_eq!(*Lexer::new("x".to_string(), None).file(), "shell");
    assert_eq!(
        *Lexer::new("x".to_string(), Some("main.lang".to_string())).file(),
        "main.lang"
    );
}

#[test]
fn test_unrecognized_character_is_illegal() {
    let tokens = tokenize("let x = @;".to_string(), Some("test.lang".to_string()));

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_multibyte_illegal_character() {
    let tokens = tokenize("é1".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "é");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].span.start.0, 2);
}

#[test]
fn test_whitespace_only() {
    assert_eq!(kinds("  \n\t  "), vec![TokenKind::EOF]);
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_lexer_repeats_eof() {
    let mut lexer = Lexer::new("1".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Integer);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_buffer_repeats_eof() {
    let tokens = tokenize("a;".to_string(), None);
    let mut buffer = TokenBuffer::new(tokens);

    assert_eq!(buffer.next_token().kind, TokenKind::Identifier);
    assert_eq!(buffer.next_token().kind, TokenKind::Semicolon);
    assert_eq!(buffer.next_token().kind, TokenKind::EOF);
    assert_eq!(buffer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_buffer_without_eof() {
    let mut tokens = tokenize("abc".to_string(), None);
    tokens.pop();
    let mut buffer = TokenBuffer::from(tokens);

    assert_eq!(buffer.next_token().kind, TokenKind::Identifier);
    let eof = buffer.next_token();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start.0, 3);
}

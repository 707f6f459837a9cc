//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser reads tokens through the [`source::TokenSource`] trait, which
//! both the [`lexer::Lexer`] and the pre-lexed [`source::TokenBuffer`] implement.

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;

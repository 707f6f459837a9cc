//! Integration tests for the public parsing pipeline.
//!
//! These tests drive source text through the lexer and parser and check the
//! resulting tree and diagnostics the way a later stage would consume them.

use minion::{
    ast::ast::{Expr, Stmt},
    format_error,
    lexer::lexer::{tokenize, Lexer},
    lexer::source::TokenBuffer,
    parser::parser::{parse, Parser},
};

fn lexer(source: &str) -> Lexer {
    Lexer::new(source.to_string(), Some("test.lang".to_string()))
}

#[test]
fn test_parse_simple_program() {
    let source = "let foobar = 10;\nlet result = foobar * 2 + 1;\nresult == 21";
    let (program, errors) = parse(lexer(source));

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.statements.len(), 3);
    assert_eq!(
        program.to_string(),
        "let foobar = 10;let result = ((foobar * 2) + 1);(result == 21)"
    );
}

#[test]
fn test_downstream_match_on_tree() {
    let (program, errors) = parse(lexer("let x = -1 * (2 + 3);"));
    assert!(errors.is_empty());

    let Stmt::Let(stmt) = &program.statements[0] else {
        panic!("expected let statement");
    };
    let Some(Expr::Infix(product)) = &stmt.value else {
        panic!("expected infix value");
    };

    assert!(matches!(product.left.as_ref(), Expr::Prefix(_)));
    assert!(matches!(product.right.as_ref(), Expr::Infix(_)));
}

#[test]
fn test_malformed_declarations_do_not_abort() {
    for source in ["let = 10;", "let 10;", "let x 10;", "let"] {
        let mut parser = Parser::new(lexer(source));
        let program = parser.parse_program();

        assert!(!parser.errors().is_empty(), "{:?} should report an error", source);
        assert!(program.statements.is_empty());
    }
}

#[test]
fn test_errors_render_with_source_context() {
    let source = "let a = 1;\n  let = 10;";
    let (_, errors) = parse(lexer(source));

    assert_eq!(errors.len(), 1);

    let rendered = format_error(&errors[0], source);
    let lines = rendered.lines().collect::<Vec<_>>();

    assert!(lines[0].starts_with("Error: ExpectedIdentifier"));
    assert_eq!(lines[1], "-> test.lang");
    assert_eq!(lines[3], "2 | let = 10;");
    assert_eq!(lines[4], "  | ----^");
}

#[test]
fn test_external_token_stream() {
    let mut tokens = tokenize("1 + 2 * 3".to_string(), None);
    // An external lexer might not terminate its output
    tokens.pop();

    let (program, errors) = parse(TokenBuffer::new(tokens));

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "(1 + (2 * 3))");
}

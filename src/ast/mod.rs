/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Program` root and the `Stmt`/`Expr` sum types
/// - expressions: Definitions for each expression node
/// - statements: Definitions for each statement node
pub mod ast;
pub mod expressions;
pub mod statements;

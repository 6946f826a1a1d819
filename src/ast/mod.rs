/// AST (Abstract Syntax Tree) module
/// Contains the tree the parser builds and the code generator consumes
///
/// Submodules:
/// - ast: The node type, its constructors, and variable slot layout
/// - statements: The program, an ordered list of statement trees
pub mod ast;
pub mod statements;

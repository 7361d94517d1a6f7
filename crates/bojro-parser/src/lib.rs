//! Bojro parser: converts a token stream into an AST.

mod parse_expr;
mod parse_stmt;
mod parser;

pub use parser::{Parser, MAX_NESTING_DEPTH, MAX_OPERATOR_DEPTH};

use bojro_types::ast::Program;
use bojro_types::SourceFile;

/// Tokenize and parse `source` in one step.
pub fn parse(source_file: &SourceFile) -> bojro_types::Result<Program> {
    let tokens = bojro_lexer::Lexer::new(source_file).lex();
    Parser::new(tokens, source_file).parse()
}

//! Bojro lexer: converts source text into a token stream.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Keyword, Token, TokenKind, ALL_KEYWORDS};

/// Tokenize a source string.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::from_source(source).lex()
}

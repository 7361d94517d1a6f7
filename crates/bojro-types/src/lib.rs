//! Shared types for the Bojro front end.
//!
//! This crate defines the AST node types, source spans, the syntax error
//! type, and the generic AST view used by tree visualizers.

mod error;
mod number;
mod span;
pub mod ast;
pub mod ast_view;

pub use error::{ErrorCode, SyntaxError};
pub use number::format_number;
pub use span::{SourceFile, Span};

/// Result type used by the lexing and parsing stages.
pub type Result<T> = std::result::Result<T, SyntaxError>;

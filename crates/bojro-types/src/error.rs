use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric syntax error code (E100–E199).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    pub const UNEXPECTED_TOKEN: Self = Self(100);
    pub const UNEXPECTED_END_OF_INPUT: Self = Self(101);
    pub const RESERVED_KEYWORD: Self = Self(102);
    pub const UNKNOWN_OPERATOR: Self = Self(103);
    pub const NESTING_LIMIT_EXCEEDED: Self = Self(104);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// A syntax error raised by the parser.
///
/// Parsing stops at the first error, so a failed parse carries exactly one
/// of these and no partial tree. `Display` renders `message`, which always
/// has the form `Unexpected token at line N: TEXT`.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct SyntaxError {
    /// Source file name.
    pub file: String,
    /// Error code (e.g., E100).
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Literal text of the offending token (empty at end of input).
    pub token: String,
    /// Source location of the offending token.
    #[serde(flatten)]
    pub span: Span,
    /// The exact source line for context.
    pub source_line: String,
    /// What the parser was looking for, when it knows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl SyntaxError {
    /// Create a new error for `token` found at `span`.
    pub fn new(
        file: impl Into<String>,
        code: ErrorCode,
        token: impl Into<String>,
        span: Span,
        source_line: impl Into<String>,
    ) -> Self {
        let token = token.into();
        let shown = if token.is_empty() {
            "end of input"
        } else {
            token.as_str()
        };
        let message = format!("Unexpected token at line {}: {}", span.start_line, shown);
        Self {
            file: file.into(),
            code,
            message,
            token,
            span,
            source_line: source_line.into(),
            expected: None,
            suggestion: None,
        }
    }

    /// Record what the parser expected at this point.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Attach a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// 1-based line of the offending token.
    pub fn line(&self) -> u32 {
        self.span.start_line
    }

    /// Multi-line report: message, expectation, source line with a caret.
    pub fn report(&self) -> String {
        let mut out = format!("{}:{}: {} [{}]", self.file, self.span, self.message, self.code);
        if let Some(expected) = &self.expected {
            out.push_str(&format!("\n  expected {expected}"));
        }
        if !self.source_line.is_empty() {
            let gutter = self.span.start_line.to_string();
            let pad = " ".repeat(gutter.len());
            let caret_pad = " ".repeat(self.span.start_col.saturating_sub(1) as usize);
            out.push_str(&format!("\n{pad} |\n{gutter} | {}\n{pad} | {caret_pad}^", self.source_line));
        }
        if let Some(suggestion) = &self.suggestion {
            out.push_str(&format!("\n  help: {suggestion}"));
        }
        out
    }
}

//! Core parser infrastructure: token cursor, error reporting, helpers.

use bojro_lexer::token::{Keyword, Token, TokenKind};
use bojro_types::ast::{Ident, Program};
use bojro_types::{ErrorCode, Result, SourceFile, Span, SyntaxError};
use tracing::debug;

/// Deepest parenthesis or block nesting the parser accepts.
pub const MAX_NESTING_DEPTH: u32 = 256;

/// Most binary operators an expression may hold open at once, counting the
/// chains of every enclosing parenthesis.
pub const MAX_OPERATOR_DEPTH: u32 = 1024;

/// The Bojro parser.
///
/// Consumes a token stream produced by the lexer and builds an AST. The
/// first unexpected token aborts the parse; there is no recovery.
pub struct Parser<'src> {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Source file for error context.
    source_file: &'src SourceFile,
    /// Current parenthesis/block nesting depth.
    pub(crate) depth: u32,
    /// Binary operators in the chains currently being built.
    pub(crate) operators: u32,
}

impl<'src> Parser<'src> {
    /// Create a new parser from a token stream and source file.
    ///
    /// A stream missing its trailing `EndOfInput` gets one appended.
    pub fn new(mut tokens: Vec<Token>, source_file: &'src SourceFile) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let span = tokens
                .last()
                .map(|t| Span::point(t.span.end_line, t.span.end_col + 1))
                .unwrap_or_else(|| Span::point(1, 1));
            tokens.push(Token::new(TokenKind::EndOfInput, "", span));
        }
        Self {
            tokens,
            pos: 0,
            source_file,
            depth: 0,
            operators: 0,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Returns the previously consumed token's span.
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::point(1, 1)
        }
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Returns `true` if the current token is `EndOfInput`.
    pub(crate) fn at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub(crate) fn check_punct(&self, p: &str) -> bool {
        self.peek().is_punct(p)
    }

    pub(crate) fn check_operator(&self, op: &str) -> bool {
        self.peek().is_operator(op)
    }

    pub(crate) fn check_keyword(&self, kw: Keyword) -> bool {
        self.peek().keyword() == Some(kw)
    }

    /// If the current token is the punctuation `p`, advance and return `true`.
    pub(crate) fn eat_punct(&mut self, p: &str) -> bool {
        if self.check_punct(p) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ── Expect Helpers ────────────────────────────────────────────────────────

    /// Expect a punctuation token, failing with a syntax error otherwise.
    pub(crate) fn expect_punct(&mut self, p: &str) -> Result<Token> {
        if self.check_punct(p) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(format!("'{p}'")))
        }
    }

    pub(crate) fn expect_operator(&mut self, op: &str) -> Result<Token> {
        if self.check_operator(op) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(format!("'{op}'")))
        }
    }

    /// Expect an identifier token. Returns the name and span.
    pub(crate) fn expect_identifier(&mut self) -> Result<Ident> {
        if self.peek().kind == TokenKind::Identifier {
            let token = self.advance();
            Ok(Ident::new(token.lexeme, token.span))
        } else {
            Err(self.error_at_current("identifier"))
        }
    }

    // ── Nesting ───────────────────────────────────────────────────────────────

    pub(crate) fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            let token = self.peek().clone();
            return Err(self
                .error_for(&token, ErrorCode::NESTING_LIMIT_EXCEEDED)
                .with_suggestion(format!(
                    "nesting is limited to {MAX_NESTING_DEPTH} levels; split the expression"
                )));
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Count one more operator in the chain under construction.
    pub(crate) fn open_operator(&mut self) -> Result<()> {
        self.operators += 1;
        if self.operators > MAX_OPERATOR_DEPTH {
            let token = self.peek().clone();
            return Err(self
                .error_for(&token, ErrorCode::NESTING_LIMIT_EXCEEDED)
                .with_suggestion(format!(
                    "an expression holds at most {MAX_OPERATOR_DEPTH} operators; \
                     store part of it in a variable"
                )));
        }
        Ok(())
    }

    pub(crate) fn close_operators(&mut self, count: u32) {
        self.operators = self.operators.saturating_sub(count);
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Build a syntax error for `token`.
    pub(crate) fn error_for(&self, token: &Token, code: ErrorCode) -> SyntaxError {
        let source_line = self
            .source_file
            .line(token.span.start_line)
            .unwrap_or("")
            .to_string();
        let error = SyntaxError::new(
            &self.source_file.name,
            code,
            token.lexeme.clone(),
            token.span,
            source_line,
        );
        debug!(code = %error.code, span = %error.span, token = %error.token, "syntax error");
        error
    }

    /// Build a syntax error at the current token, recording what was expected.
    pub(crate) fn error_at_current(&self, expected: impl Into<String>) -> SyntaxError {
        let token = self.peek();
        let error = self.error_for(token, classify(token)).with_expected(expected);
        match token.kind {
            TokenKind::Keyword(kw) if kw.is_reserved() => error.with_suggestion(format!(
                "'{}' is reserved for a future version and cannot be used yet",
                token.lexeme
            )),
            _ if error.code == ErrorCode::UNKNOWN_OPERATOR => error.with_suggestion(format!(
                "'{}' is not an operator; use one of {}",
                token.lexeme,
                KNOWN_OPERATORS.join(" ")
            )),
            _ => error,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the token stream into a `Program` AST.
    pub fn parse(mut self) -> Result<Program> {
        let start = self.current_span();
        let mut body = Vec::new();
        while !self.at_end() {
            body.push(self.parse_statement()?);
        }
        let span = if body.is_empty() {
            start
        } else {
            start.merge(self.previous_span())
        };
        Ok(Program { body, span })
    }
}

const KNOWN_OPERATORS: &[&str] = &[
    "=", "==", "!=", ">", "<", ">=", "<=", "+", "-", "*", "/", "%",
];

/// Error code for an unexpected `token`.
fn classify(token: &Token) -> ErrorCode {
    match &token.kind {
        TokenKind::EndOfInput => ErrorCode::UNEXPECTED_END_OF_INPUT,
        TokenKind::Keyword(kw) if kw.is_reserved() => ErrorCode::RESERVED_KEYWORD,
        TokenKind::Operator if !KNOWN_OPERATORS.contains(&token.lexeme.as_str()) => {
            ErrorCode::UNKNOWN_OPERATOR
        }
        _ => ErrorCode::UNEXPECTED_TOKEN,
    }
}

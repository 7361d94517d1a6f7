//! Core Bojro lexer: converts source text to a token stream.
//!
//! The lexer has no error channel and is permissive:
//! - characters it does not recognise are dropped
//! - an unterminated string literal absorbs the rest of the input
//! - `//` comments run to the end of the line
//!
//! Scanning works on Unicode scalar values so Bengali keywords and
//! identifiers get correct columns.

use bojro_types::{SourceFile, Span};
use tracing::trace;

use crate::token::{Keyword, Token, TokenKind};

/// Single-character operators; each may take a trailing `=`.
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '=', '>', '<', '!'];

const PUNCTUATION_CHARS: &[char] = &['(', ')', '{', '}', ';', ','];

/// Bengali block: letters, vowel signs, digits.
const BENGALI: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || BENGALI.contains(&ch)
}

fn is_ident_continue(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}

/// The Bojro lexer.
pub struct Lexer {
    /// The full source as scalar values.
    chars: Vec<char>,
    /// Current index into `chars`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    col: u32,
    /// Characters dropped so far.
    dropped: usize,
}

impl Lexer {
    /// Create a new lexer for the given source file.
    pub fn new(source_file: &SourceFile) -> Self {
        Self::from_source(&source_file.source)
    }

    /// Create a lexer directly over a string.
    pub fn from_source(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            dropped: 0,
        }
    }

    /// Lex the entire source into a token stream ending with `EndOfInput`.
    pub fn lex(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.scan_token() {
            tokens.push(token);
        }
        tokens.push(Token::new(TokenKind::EndOfInput, "", self.current_span()));
        if self.dropped > 0 {
            trace!(dropped = self.dropped, "lexer discarded unrecognised characters");
        }
        tokens
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn current_span(&self) -> Span {
        Span::point(self.line, self.col)
    }

    fn span_from(&self, start_line: u32, start_col: u32) -> Span {
        Span::new(
            start_line,
            start_col,
            self.line,
            self.col.saturating_sub(1).max(1),
        )
    }

    /// Consume characters while `pred` holds, returning them.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
            text.push(ch);
        }
        text
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan the next token, or `None` once the input is exhausted.
    fn scan_token(&mut self) -> Option<Token> {
        loop {
            let ch = self.peek()?;

            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if ch == '/' && self.peek_at(1) == Some('/') {
                self.take_while(|c| c != '\n');
                continue;
            }

            let start_line = self.line;
            let start_col = self.col;

            if ch.is_ascii_digit() {
                return Some(self.scan_number(start_line, start_col));
            }

            if ch == '"' {
                return Some(self.scan_string(start_line, start_col));
            }

            if is_ident_start(ch) {
                return Some(self.scan_identifier(start_line, start_col));
            }

            if OPERATOR_CHARS.contains(&ch) {
                self.advance();
                let mut text = ch.to_string();
                if self.peek() == Some('=') {
                    self.advance();
                    text.push('=');
                }
                return Some(Token::new(
                    TokenKind::Operator,
                    text,
                    self.span_from(start_line, start_col),
                ));
            }

            if PUNCTUATION_CHARS.contains(&ch) {
                self.advance();
                return Some(Token::new(
                    TokenKind::Punctuation,
                    ch.to_string(),
                    self.span_from(start_line, start_col),
                ));
            }

            trace!(line = start_line, column = start_col, ch = %ch, "dropping unrecognised character");
            self.advance();
            self.dropped += 1;
        }
    }

    /// Digits with at most one `.`; `5.` keeps its trailing dot.
    fn scan_number(&mut self, start_line: u32, start_col: u32) -> Token {
        let mut text = self.take_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') {
            self.advance();
            text.push('.');
            text.push_str(&self.take_while(|c| c.is_ascii_digit()));
        }
        let value: f64 = text.parse().unwrap_or(0.0);
        Token::new(
            TokenKind::Number(value),
            text,
            self.span_from(start_line, start_col),
        )
    }

    /// Copy characters up to the closing quote, or to end of input.
    fn scan_string(&mut self, start_line: u32, start_col: u32) -> Token {
        self.advance(); // opening quote
        let text = self.take_while(|c| c != '"');
        self.advance(); // closing quote, absent when unterminated
        Token::new(TokenKind::String, text, self.span_from(start_line, start_col))
    }

    fn scan_identifier(&mut self, start_line: u32, start_col: u32) -> Token {
        let text = self.take_while(is_ident_continue);
        let kind = Keyword::lookup(&text)
            .map(TokenKind::Keyword)
            .unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, self.span_from(start_line, start_col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<String> {
        Lexer::from_source(source)
            .lex()
            .into_iter()
            .map(|t| t.lexeme)
            .collect()
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let tokens = Lexer::from_source("").lex();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].span, Span::point(1, 1));
    }

    #[test]
    fn test_number_stops_at_second_dot() {
        assert_eq!(lexemes("1.2.3"), vec!["1.2", "3", ""]);
    }

    #[test]
    fn test_bengali_digits_continue_identifiers() {
        assert_eq!(lexemes("ক১ = 2;"), vec!["ক১", "=", "2", ";", ""]);
    }

    #[test]
    fn test_identifier_column_counts_chars_not_bytes() {
        let tokens = Lexer::from_source("যদি x").lex();
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].column(), 5);
    }
}

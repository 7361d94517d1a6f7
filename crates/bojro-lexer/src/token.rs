//! Token types for the Bojro lexer.
//!
//! Defines [`TokenKind`], the [`Keyword`] table (Bengali spellings with
//! English aliases) and [`Token`], which pairs a kind and its literal text
//! with a source [`Span`].

use bojro_types::Span;
use serde::Serialize;
use std::fmt;

/// Every reserved word, Bengali spelling first, then its English alias.
pub const ALL_KEYWORDS: &[(&str, Keyword)] = &[
    ("লিখো", Keyword::Print),
    ("পূর্ণসংখ্যা", Keyword::Integer),
    ("ভগ্নাংশ", Keyword::Float),
    ("বাক্য", Keyword::String),
    ("যদি", Keyword::If),
    ("নতুবা", Keyword::Else),
    ("যতক্ষণ", Keyword::While),
    ("কাজ", Keyword::Function),
    ("ফেরত", Keyword::Return),
    ("চলক", Keyword::Var),
    ("print", Keyword::Print),
    ("int", Keyword::Integer),
    ("float", Keyword::Float),
    ("string", Keyword::String),
    ("if", Keyword::If),
    ("else", Keyword::Else),
    ("while", Keyword::While),
    ("function", Keyword::Function),
    ("return", Keyword::Return),
    ("var", Keyword::Var),
];

// ─────────────────────────────────────────────────────────────────────
// Keyword
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Print,
    Integer,
    Float,
    String,
    If,
    Else,
    While,
    /// Reserved, no statement uses it.
    Function,
    /// Reserved, no statement uses it.
    Return,
    /// Reserved, no statement uses it.
    Var,
}

impl Keyword {
    /// Look up a reserved word in either spelling.
    pub fn lookup(word: &str) -> Option<Keyword> {
        ALL_KEYWORDS
            .iter()
            .find(|(text, _)| *text == word)
            .map(|(_, kw)| *kw)
    }

    /// The Bengali spelling.
    pub fn bengali(self) -> &'static str {
        ALL_KEYWORDS
            .iter()
            .find(|(_, kw)| *kw == self)
            .map(|(text, _)| *text)
            .unwrap_or_default()
    }

    /// The English alias.
    pub fn english(self) -> &'static str {
        ALL_KEYWORDS
            .iter()
            .rev()
            .find(|(_, kw)| *kw == self)
            .map(|(text, _)| *text)
            .unwrap_or_default()
    }

    /// `true` for keywords that start no statement.
    pub fn is_reserved(self) -> bool {
        matches!(self, Keyword::Function | Keyword::Return | Keyword::Var)
    }

    /// `true` for the three declaration type keywords.
    pub fn is_type(self) -> bool {
        matches!(self, Keyword::Integer | Keyword::Float | Keyword::String)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    /// Numeric literal with its parsed value: `42`, `2.5`, `5.`
    Number(f64),
    /// String literal; the lexeme is the text between the quotes.
    String,
    /// `+ - * / % = > < !` and their `=`-suffixed forms.
    Operator,
    /// `( ) { } ; ,`
    Punctuation,
    EndOfInput,
}

impl TokenKind {
    /// Category name, without payload.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number(_) => "Number",
            TokenKind::String => "String",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal source text (string tokens: without the quotes).
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// 1-based line where the token starts.
    pub fn line(&self) -> u32 {
        self.span.start_line
    }

    /// 1-based column where the token starts.
    pub fn column(&self) -> u32 {
        self.span.start_col
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// `true` if this is the punctuation token `p`.
    pub fn is_punct(&self, p: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.lexeme == p
    }

    /// `true` if this is the operator token `op`.
    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == op
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::EndOfInput => write!(f, "{} {}", self.span, self.kind),
            TokenKind::String => write!(f, "{} {} \"{}\"", self.span, self.kind, self.lexeme),
            _ => write!(f, "{} {} {}", self.span, self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_has_both_spellings() {
        for kw in [
            Keyword::Print,
            Keyword::Integer,
            Keyword::Float,
            Keyword::String,
            Keyword::If,
            Keyword::Else,
            Keyword::While,
            Keyword::Function,
            Keyword::Return,
            Keyword::Var,
        ] {
            assert_eq!(Keyword::lookup(kw.bengali()), Some(kw));
            assert_eq!(Keyword::lookup(kw.english()), Some(kw));
            assert_ne!(kw.bengali(), kw.english());
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Keyword::lookup("Print"), None);
        assert_eq!(Keyword::lookup("WHILE"), None);
    }

    #[test]
    fn test_reserved_and_type_classes() {
        assert!(Keyword::Var.is_reserved());
        assert!(!Keyword::Print.is_reserved());
        assert!(Keyword::Float.is_type());
        assert!(!Keyword::If.is_type());
    }

    #[test]
    fn test_token_display() {
        let tok = Token::new(TokenKind::String, "hi", Span::new(2, 3, 2, 6));
        assert_eq!(tok.to_string(), "2:3 String \"hi\"");
        let eof = Token::new(TokenKind::EndOfInput, "", Span::point(4, 1));
        assert_eq!(eof.to_string(), "4:1 EndOfInput");
    }
}

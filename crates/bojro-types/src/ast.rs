//! AST node types for the Bojro language.
//!
//! Every node carries a [`Span`] for error reporting and tooling. The tree is
//! built once by the parser and only read afterwards.
//!
//! Blocks do not open a scope: every declaration, however deeply nested,
//! binds in the single program-wide namespace.

use crate::Span;
use serde::Serialize;
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A complete program: statements in execution order (possibly none).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Every node kind, with the name tools display for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Program,
    VariableDeclaration,
    Assignment,
    PrintStatement,
    IfStatement,
    WhileStatement,
    BlockStatement,
    BinaryExpression,
    Literal,
    Identifier,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::Assignment => "Assignment",
            Self::PrintStatement => "PrintStatement",
            Self::IfStatement => "IfStatement",
            Self::WhileStatement => "WhileStatement",
            Self::BlockStatement => "BlockStatement",
            Self::BinaryExpression => "BinaryExpression",
            Self::Literal => "Literal",
            Self::Identifier => "Identifier",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Identifiers
// ══════════════════════════════════════════════════════════════════════════════

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    VariableDeclaration(VarDecl),
    Assignment(Assignment),
    Print(PrintStmt),
    If(IfStmt),
    While(WhileStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::VariableDeclaration(s) => s.span,
            Stmt::Assignment(s) => s.span,
            Stmt::Print(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Stmt::Assignment(_) => NodeKind::Assignment,
            Stmt::Print(_) => NodeKind::PrintStatement,
            Stmt::If(_) => NodeKind::IfStatement,
            Stmt::While(_) => NodeKind::WhileStatement,
        }
    }
}

/// Declared type of a variable. Recorded, never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeclType {
    Integer,
    Float,
    String,
}

impl DeclType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

/// `int name = value;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    pub var_type: DeclType,
    pub name: Ident,
    pub value: Expr,
    pub span: Span,
}

/// `name = value;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub name: Ident,
    pub value: Expr,
    pub span: Span,
}

/// `print(expression);`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `if (condition) { ... } [else { ... }]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequent: Block,
    pub alternate: Option<Block>,
    pub span: Span,
}

/// `while (condition) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
    pub span: Span,
}

/// `{ statements... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub body: Vec<Stmt>,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An expression with its source span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn node_kind(&self) -> NodeKind {
        match &self.kind {
            ExprKind::Binary { .. } => NodeKind::BinaryExpression,
            ExprKind::Literal(_) => NodeKind::Literal,
            ExprKind::Identifier(_) => NodeKind::Identifier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExprKind {
    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    Literal(Literal),
    Identifier(String),
}

/// A literal value plus the text it was written as.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralValue {
    Number(f64),
    String(String),
}

/// Binary operators, lowest precedence group first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinOp {
    Eq,
    NotEq,
    Greater,
    Less,
    GreaterEq,
    LessEq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    /// Map operator source text to an operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            ">" => Self::Greater,
            "<" => Self::Less,
            ">=" => Self::GreaterEq,
            "<=" => Self::LessEq,
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            _ => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEq => ">=",
            Self::LessEq => "<=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Binding strength: equality 1, comparison 2, term 3, factor 4.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Eq | Self::NotEq => 1,
            Self::Greater | Self::Less | Self::GreaterEq | Self::LessEq => 2,
            Self::Add | Self::Sub => 3,
            Self::Mul | Self::Div | Self::Mod => 4,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binop_symbol_round_trip() {
        for symbol in ["==", "!=", ">", "<", ">=", "<=", "+", "-", "*", "/", "%"] {
            let op = BinOp::from_symbol(symbol).unwrap();
            assert_eq!(op.symbol(), symbol);
        }
        assert_eq!(BinOp::from_symbol("="), None);
        assert_eq!(BinOp::from_symbol("+="), None);
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(BinOp::Mul.precedence() > BinOp::Add.precedence());
        assert!(BinOp::Add.precedence() > BinOp::Less.precedence());
        assert!(BinOp::LessEq.precedence() > BinOp::NotEq.precedence());
        assert_eq!(BinOp::Div.precedence(), BinOp::Mod.precedence());
    }

    #[test]
    fn test_node_kind_names() {
        assert_eq!(NodeKind::BlockStatement.to_string(), "BlockStatement");
        let expr = Expr::new(ExprKind::Identifier("x".into()), Span::point(1, 1));
        assert_eq!(expr.node_kind(), NodeKind::Identifier);
    }
}

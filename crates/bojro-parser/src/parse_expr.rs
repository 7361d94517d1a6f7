//! Expression parsing with operator precedence.
//!
//! Precedence (lowest → highest), every level left-associative:
//! 1. `==`, `!=`
//! 2. `>`, `<`, `>=`, `<=`
//! 3. `+`, `-`
//! 4. `*`, `/`, `%`
//!
//! Primaries are number and string literals, identifiers and parenthesized
//! expressions. Parentheses leave no node behind.

use bojro_lexer::token::TokenKind;
use bojro_types::ast::*;
use bojro_types::Result;

use crate::parser::Parser;

impl<'src> Parser<'src> {
    // ══════════════════════════════════════════════════════════════════════════
    // Entry Point
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr> {
        self.parse_binary(1)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Precedence Chain
    // ══════════════════════════════════════════════════════════════════════════

    /// `Binary(p) = Primary { op Binary(prec(op) + 1) }` for every `op` with
    /// `prec(op) >= p`.
    ///
    /// Chains build iteratively; only the operator budget bounds their length.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr> {
        let mut left = self.parse_primary()?;
        let mut nodes = 0;
        while let Some(op) = self.match_binary_op().filter(|op| op.precedence() >= min_prec) {
            self.open_operator()?;
            nodes += 1;
            self.advance(); // consume operator
            let right = self.parse_binary(op.precedence() + 1)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        self.close_operators(nodes);
        Ok(left)
    }

    /// If the current token is a binary operator, return it.
    fn match_binary_op(&self) -> Option<BinOp> {
        let token = self.peek();
        if token.kind != TokenKind::Operator {
            return None;
        }
        BinOp::from_symbol(&token.lexeme)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Primary
    // ══════════════════════════════════════════════════════════════════════════

    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal(Literal {
                        value: LiteralValue::Number(n),
                        raw: token.lexeme,
                    }),
                    token.span,
                ))
            }
            TokenKind::String => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::Literal(Literal {
                        raw: format!("\"{}\"", token.lexeme),
                        value: LiteralValue::String(token.lexeme),
                    }),
                    token.span,
                ))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::new(ExprKind::Identifier(token.lexeme), token.span))
            }
            TokenKind::Punctuation if token.lexeme == "(" => {
                self.advance();
                self.enter()?;
                let inner = self.parse_expression()?;
                self.leave();
                self.expect_punct(")")?;
                Ok(inner)
            }
            _ => Err(self.error_at_current("expression")),
        }
    }
}

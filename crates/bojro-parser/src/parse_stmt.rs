//! Statement parsing.

use crate::parser::Parser;
use bojro_lexer::token::{Keyword, TokenKind};
use bojro_types::ast::*;
use bojro_types::Result;

impl<'src> Parser<'src> {
    /// Parse a single statement, dispatching on the current token.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt> {
        match self.peek().kind {
            TokenKind::Keyword(Keyword::Print) => self.parse_print(),
            TokenKind::Keyword(Keyword::Integer) => self.parse_declaration(DeclType::Integer),
            TokenKind::Keyword(Keyword::Float) => self.parse_declaration(DeclType::Float),
            TokenKind::Keyword(Keyword::String) => self.parse_declaration(DeclType::String),
            TokenKind::Keyword(Keyword::If) => self.parse_if(),
            TokenKind::Keyword(Keyword::While) => self.parse_while(),
            TokenKind::Identifier => self.parse_assignment(),
            _ => Err(self.error_at_current("statement")),
        }
    }

    /// `{ stmts... }`
    ///
    /// A block left open at end of input ends there without complaint.
    pub(crate) fn parse_block(&mut self) -> Result<Block> {
        let start = self.current_span();
        self.expect_punct("{")?;
        self.enter()?;
        let mut body = Vec::new();
        while !self.check_punct("}") && !self.at_end() {
            body.push(self.parse_statement()?);
        }
        self.eat_punct("}");
        self.leave();
        let span = start.merge(self.previous_span());
        Ok(Block { body, span })
    }

    /// `print ( expr ) ;`
    fn parse_print(&mut self) -> Result<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `print`
        self.expect_punct("(")?;
        let expression = self.parse_expression()?;
        self.expect_punct(")")?;
        self.expect_punct(";")?;
        let span = start.merge(self.previous_span());
        Ok(Stmt::Print(PrintStmt { expression, span }))
    }

    /// `int|float|string name = expr ;`
    fn parse_declaration(&mut self, var_type: DeclType) -> Result<Stmt> {
        let start = self.current_span();
        self.advance(); // eat the type keyword
        let name = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;
        self.expect_punct(";")?;
        let span = start.merge(self.previous_span());
        Ok(Stmt::VariableDeclaration(VarDecl {
            var_type,
            name,
            value,
            span,
        }))
    }

    /// `name = expr ;`
    fn parse_assignment(&mut self) -> Result<Stmt> {
        let start = self.current_span();
        let name = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;
        self.expect_punct(";")?;
        let span = start.merge(self.previous_span());
        Ok(Stmt::Assignment(Assignment { name, value, span }))
    }

    /// `if ( expr ) block [else block]`
    fn parse_if(&mut self) -> Result<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `if`
        let condition = self.parse_condition()?;
        let consequent = self.parse_block()?;
        let alternate = if self.check_keyword(Keyword::Else) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };
        let span = start.merge(self.previous_span());
        Ok(Stmt::If(IfStmt {
            condition,
            consequent,
            alternate,
            span,
        }))
    }

    /// `while ( expr ) block`
    fn parse_while(&mut self) -> Result<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `while`
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;
        let span = start.merge(self.previous_span());
        Ok(Stmt::While(WhileStmt {
            condition,
            body,
            span,
        }))
    }

    /// `( expr )` heading an `if` or `while`.
    fn parse_condition(&mut self) -> Result<Expr> {
        self.expect_punct("(")?;
        let condition = self.parse_expression()?;
        self.expect_punct(")")?;
        Ok(condition)
    }
}

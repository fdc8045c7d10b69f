//! Statement dispatch and each statement form (§4.2).

use evmc_lex::TokenKind;
use evmc_util::Span;

use super::core::Parser;
use crate::ast::{Assign, Expr, IfStmt, Stmt, TypeName, VarDecl, WhileStmt};
use crate::error::{ParseError, Result};

const MIN_BP: u8 = 0;

impl Parser {
    pub(super) fn parse_statement(&mut self) -> Result<Stmt> {
        if self.is_keyword("if") {
            return self.parse_if().map(Stmt::If);
        }
        if self.is_keyword("while") {
            return self.parse_while().map(Stmt::While);
        }
        if self.is_keyword("let") {
            return self.parse_var_decl().map(Stmt::VarDecl);
        }
        if self.looks_like_assignment() {
            return self.parse_assign().map(Stmt::Assign);
        }
        let expr = self.parse_expr(MIN_BP)?;
        self.expect_punct(";")?;
        Ok(Stmt::Expr(expr))
    }

    /// An identifier immediately followed by `=` starts an assignment
    /// rather than an expression statement; anything else (including
    /// `x[0] = ...`, which this minimal grammar does not support as an
    /// lvalue) falls through to expression parsing.
    fn looks_like_assignment(&self) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::Identifier)
            && matches!(self.peek_at(1), Some(t) if t.kind == TokenKind::Operator && t.lexeme == "=")
    }

    fn parse_var_decl(&mut self) -> Result<VarDecl> {
        let start = self.expect_keyword("let")?;
        let (name, _) = self.expect_identifier()?;

        let annotation = if self.match_punct(":") {
            Some(self.expect_type_name()?)
        } else {
            None
        };

        self.expect_operator("=")?;
        let mut init = self.parse_expr(MIN_BP)?;

        let declared_type = match annotation {
            Some(t) => t,
            None => match &init {
                Expr::Bool(_) => TypeName::Bool,
                _ => TypeName::U256,
            },
        };

        if let Expr::Number(n) = &mut init {
            n.bit_width = declared_type.bit_width();
        }

        let end = self.expect_punct(";")?;
        Ok(VarDecl {
            name,
            declared_type,
            init,
            span: start.merge(end),
        })
    }

    fn parse_assign(&mut self) -> Result<Assign> {
        let (name, name_span) = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expr(MIN_BP)?;
        let end = self.expect_punct(";")?;
        Ok(Assign {
            name,
            value,
            span: name_span.merge(end),
        })
    }

    fn parse_if(&mut self) -> Result<IfStmt> {
        let start = self.expect_keyword("if")?;
        self.expect_punct("(")?;
        let cond = self.parse_expr(MIN_BP)?;
        self.expect_punct(")")?;
        let (then_body, then_end) = self.parse_block()?;
        let (else_body, end) = if self.is_keyword("else") {
            self.bump();
            let (body, else_end) = self.parse_block()?;
            (Some(body), else_end)
        } else {
            (None, then_end)
        };
        Ok(IfStmt {
            cond,
            then_body,
            else_body,
            span: start.merge(end),
        })
    }

    fn parse_while(&mut self) -> Result<WhileStmt> {
        let start = self.expect_keyword("while")?;
        self.expect_punct("(")?;
        let cond = self.parse_expr(MIN_BP)?;
        self.expect_punct(")")?;
        let (body, end) = self.parse_block()?;
        Ok(WhileStmt {
            cond,
            body,
            span: start.merge(end),
        })
    }

    /// Returns the parsed statements along with the span of the closing
    /// brace, so callers can merge it into their own construct's span.
    fn parse_block(&mut self) -> Result<(Vec<Stmt>, Span)> {
        self.expect_punct("{")?;
        let mut statements = Vec::new();
        while !self.is_punct("}") {
            if self.peek().is_none() {
                return Err(ParseError::Expected {
                    expected: "'}'".to_string(),
                    actual: "end of input".to_string(),
                    position: self.current_position(),
                });
            }
            statements.push(self.parse_statement()?);
        }
        let end = self.expect_punct("}")?;
        Ok((statements, end))
    }
}

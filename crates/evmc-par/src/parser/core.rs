//! `Parser` struct: a cursor over the token sequence with small lookahead,
//! plus the `expect_*` family that turns a token mismatch into a
//! `ParseError::Expected`/`UnexpectedToken`.

use evmc_lex::{Token, TokenKind};
use evmc_util::Span;

use crate::ast::{Program, TypeName};
use crate::error::{ParseError, Result};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses the full token stream into a `Program`. Entry point.
    pub fn parse_program(mut self) -> Result<Program> {
        let mut statements = Vec::new();
        while self.peek().is_some() {
            statements.push(self.parse_statement()?);
        }
        Ok(Program { statements })
    }

    pub(super) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(super) fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Byte position to report in an error raised at the current cursor
    /// position: the next token's span start, or just past the last token
    /// (or the start of source) once input is exhausted.
    pub(super) fn current_position(&self) -> usize {
        match self.peek() {
            Some(t) => t.span.start,
            None => self.tokens.last().map(|t| t.span.end).unwrap_or(0),
        }
    }

    pub(super) fn describe_current(&self) -> String {
        match self.peek() {
            Some(t) => format!("{:?} '{}'", t.kind, t.lexeme),
            None => "end of input".to_string(),
        }
    }

    /// Consumes and returns the current token, panicking if the cursor is
    /// already exhausted. Callers must have confirmed a token exists
    /// (e.g. via a prior `peek` check).
    pub(super) fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    pub(super) fn is_keyword(&self, word: &str) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::Keyword && t.lexeme == word)
    }

    pub(super) fn is_operator(&self, symbol: &str) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::Operator && t.lexeme == symbol)
    }

    pub(super) fn is_punct(&self, symbol: &str) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::Punctuation && t.lexeme == symbol)
    }

    pub(super) fn expect_keyword(&mut self, word: &str) -> Result<Span> {
        if self.is_keyword(word) {
            Ok(self.bump().span)
        } else {
            Err(ParseError::Expected {
                expected: format!("keyword '{word}'"),
                actual: self.describe_current(),
                position: self.current_position(),
            })
        }
    }

    pub(super) fn expect_operator(&mut self, symbol: &str) -> Result<Span> {
        if self.is_operator(symbol) {
            Ok(self.bump().span)
        } else {
            Err(ParseError::Expected {
                expected: format!("operator '{symbol}'"),
                actual: self.describe_current(),
                position: self.current_position(),
            })
        }
    }

    pub(super) fn expect_punct(&mut self, symbol: &str) -> Result<Span> {
        if self.is_punct(symbol) {
            Ok(self.bump().span)
        } else {
            Err(ParseError::Expected {
                expected: format!("'{symbol}'"),
                actual: self.describe_current(),
                position: self.current_position(),
            })
        }
    }

    pub(super) fn match_punct(&mut self, symbol: &str) -> bool {
        if self.is_punct(symbol) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn expect_identifier(&mut self) -> Result<(String, Span)> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Identifier => {
                let t = self.bump();
                Ok((t.lexeme, t.span))
            }
            _ => Err(ParseError::Expected {
                expected: "identifier".to_string(),
                actual: self.describe_current(),
                position: self.current_position(),
            }),
        }
    }

    pub(super) fn expect_type_name(&mut self) -> Result<TypeName> {
        let (name, span) = self.expect_identifier()?;
        TypeName::from_annotation(&name).ok_or_else(|| ParseError::UnknownType {
            name,
            position: span.start,
        })
    }
}

//! Number literal scanning: a maximal run of decimal digits.

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self) -> Token {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start).to_string();
        self.make_token(TokenKind::NumberLiteral, lexeme)
    }
}

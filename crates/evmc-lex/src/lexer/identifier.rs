//! Identifier, keyword, and boolean-literal scanning.

use super::core::Lexer;
use crate::token::{Token, TokenKind, KEYWORDS};

impl<'a> Lexer<'a> {
    /// Consumes a maximal run of letters-or-digits starting at the current
    /// (already-confirmed-alphabetic) character, then classifies the run
    /// as a boolean literal, a keyword, or a plain identifier.
    pub(super) fn scan_identifier_or_keyword(&mut self) -> Token {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char().is_alphanumeric() {
            self.cursor.advance();
        }
        let word = self.cursor.slice_from(start).to_string();

        let kind = if word == "true" || word == "false" {
            TokenKind::BooleanLiteral
        } else if KEYWORDS.contains(&word.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        self.make_token(kind, word)
    }
}

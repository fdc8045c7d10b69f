//! Operator run and punctuation scanning.

use super::core::Lexer;
use crate::token::{Token, TokenKind};

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '=', '>', '<', '!', '&', '|'];

impl<'a> Lexer<'a> {
    /// Consumes a maximal run of operator characters, so `<=`, `==`,
    /// `!=`, `>=`, `&&`, `||` form as a single multi-character token
    /// while `=` alone forms a single-character one.
    pub(super) fn scan_operator(&mut self) -> Token {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && OPERATOR_CHARS.contains(&self.cursor.current_char()) {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start).to_string();
        self.make_token(TokenKind::Operator, lexeme)
    }

    pub(super) fn scan_punctuation(&mut self) -> Token {
        let c = self.cursor.current_char();
        self.cursor.advance();
        self.make_token(TokenKind::Punctuation, c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(src: &str) -> Token {
        let mut lexer = Lexer::new(src);
        lexer.next_token().unwrap().unwrap()
    }

    #[test]
    fn single_char_operator() {
        let t = scan("=");
        assert_eq!(t.kind, TokenKind::Operator);
        assert_eq!(t.lexeme, "=");
    }

    #[test]
    fn two_char_operators_form_one_token() {
        for op in ["<=", "==", "!=", ">=", "&&", "||"] {
            let t = scan(op);
            assert_eq!(t.kind, TokenKind::Operator);
            assert_eq!(t.lexeme, op);
        }
    }

    #[test]
    fn punctuation_is_single_char() {
        for p in [';', ':', '(', ')', '{', '}', '[', ']', ','] {
            let t = scan(&p.to_string());
            assert_eq!(t.kind, TokenKind::Punctuation);
            assert_eq!(t.lexeme, p.to_string());
        }
    }
}

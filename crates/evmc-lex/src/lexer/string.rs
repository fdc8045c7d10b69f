//! String literal scanning.
//!
//! Quote char is `"` or `'`; either opens and must be closed by the same
//! character. `\X` decodes to the literal character `X` for any `X`
//! (so `\"`, `\\`, and e.g. `\n` all just yield `"`, `\`, `n`  -- there is
//! no dedicated escape table, only this one backslash-then-literal rule).

use super::core::Lexer;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(super) fn scan_string(&mut self, quote: char) -> Result<Token> {
        let start = self.token_start;
        self.cursor.advance(); // consume opening quote

        let mut decoded = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString { start });
            }
            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                break;
            }
            if c == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(LexError::UnterminatedString { start });
                }
                decoded.push(self.cursor.current_char());
                self.cursor.advance();
            } else {
                decoded.push(c);
                self.cursor.advance();
            }
        }

        Ok(self.make_token(TokenKind::StringLiteral, decoded))
    }
}

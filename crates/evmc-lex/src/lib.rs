//! Scanner: source text to token stream.
//!
//! A single pass over the input, dispatching on the current character to
//! one of five scanners (string, identifier/keyword/boolean, number,
//! operator run, punctuation). Whitespace is skipped, never tokenized.
//! The scanner never recovers from an error: the first unterminated
//! string or unrecognized character aborts tokenization.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind, KEYWORDS};

/// Tokenizes `source` in full, returning every token in order or the
/// first lexical error encountered.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

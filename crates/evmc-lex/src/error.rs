//! Lexical-analysis error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal starting at byte {start}")]
    UnterminatedString { start: usize },

    #[error("unexpected character '{ch}' at byte {position}")]
    UnknownChar { ch: char, position: usize },
}

pub type Result<T> = std::result::Result<T, LexError>;

//! Parser error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found {actual} at byte {position}")]
    Expected {
        expected: String,
        actual: String,
        position: usize,
    },

    #[error("unknown type name '{name}' at byte {position}")]
    UnknownType { name: String, position: usize },

    #[error("unexpected token {found} at byte {position}")]
    UnexpectedToken { found: String, position: usize },
}

pub type Result<T> = std::result::Result<T, ParseError>;

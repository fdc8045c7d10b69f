//! Semantic analysis error type.

use thiserror::Error;

use crate::types::PrimitiveType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemError {
    #[error("'{0}' is already declared")]
    Redeclared(String),

    #[error("'{0}' is not declared")]
    Undeclared(String),

    #[error("literal value {value} does not fit in {bit_width} bits")]
    LiteralOutOfRange { value: String, bit_width: u16 },

    #[error("string literal is {0} bytes, exceeding the 32-byte limit")]
    StringTooLong(usize),

    #[error("array literal must have at least one element")]
    EmptyArrayType,

    #[error("array literal elements must all share the same inferred type")]
    HeterogeneousArray,

    #[error("assigning to an array-typed variable is not supported")]
    ArrayAssignmentUnsupported,

    #[error("type mismatch: expected {expected:?}, found {actual:?}")]
    TypeMismatch {
        expected: PrimitiveType,
        actual: PrimitiveType,
    },

    #[error("'{0}' is indexed like an array but is not one")]
    ArrayIndexOnNonArray(String),
}

pub type Result<T> = std::result::Result<T, SemError>;

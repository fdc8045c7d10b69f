//! Code-generation error type.

use thiserror::Error;

use crate::label::LabelId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("operator '{0}' has no opcode lowering")]
    UnsupportedOperator(String),

    #[error("string literal is {0} bytes, exceeding the 32-byte limit")]
    StringTooLong(usize),

    #[error("label {0:?} was referenced but never resolved")]
    UnresolvedLabel(LabelId),
}

pub type Result<T> = std::result::Result<T, CodegenError>;

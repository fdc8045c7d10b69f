use thiserror::Error;

use evmc_gen::CodegenError;
use evmc_lex::LexError;
use evmc_par::ParseError;
use evmc_sem::SemError;

/// Workspace-level error wrapping each stage's own error type.
///
/// The driver is the only place these four ever meet: each stage stays
/// ignorant of the others' error types and simply returns its own via
/// `Result<T, E>`, and `?` widens it into this enum at the call site in
/// [`crate::compile`]. The `Io` variant never comes from `compile` itself
/// (it takes source text, not a path) — it's here so the CLI binary's
/// file-read step has the same error type to match on as every stage.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("semantic error: {0}")]
    Sem(#[from] SemError),

    #[error("codegen error: {0}")]
    Codegen(#[from] CodegenError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompileError>;

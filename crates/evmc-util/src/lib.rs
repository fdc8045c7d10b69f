//! Shared infrastructure for the evmc compiler crates.
//!
//! This crate holds the pieces every pipeline stage (lexer, parser, semantic
//! analyzer, code generator) needs but none of them own exclusively: source
//! spans and the typed-index vector used for small per-stage identifier
//! spaces (e.g. a code generator's label ids).

pub mod index_vec;
pub mod span;

pub use index_vec::{Idx, IndexVec};
pub use span::Span;

//! Semantic analysis: one pass over the parsed AST that rejects ill-typed
//! programs and produces the `SymbolTable` both emitters rely on (§4.3).

mod analyzer;
mod error;
mod symbol_table;
mod types;

pub use analyzer::Analyzer;
pub use error::{Result, SemError};
pub use symbol_table::{Symbol, SymbolTable};
pub use types::{PrimitiveType, TypeInfo};

use evmc_par::ast::Program;

/// Runs semantic analysis over `program`, returning the symbol table
/// assigning each declared name its byte offset and resolved type, or
/// the first error encountered (§7: analysis fails fast, never returning
/// a partially built table).
pub fn analyze(program: &Program) -> Result<SymbolTable> {
    Analyzer::analyze(program)
}

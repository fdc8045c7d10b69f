//! Lexer implementation, split by character class:
//! - `core` - the `Lexer` struct and its dispatch
//! - `identifier` - identifier/keyword/boolean scanning
//! - `number` - number literal scanning
//! - `string` - string literal scanning
//! - `operator` - operator run and punctuation scanning

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;

//! Token kinds produced by the scanner.

use evmc_util::Span;

/// The keyword set recognized by the scanner. Only `let` is actually
/// accepted by the parser as a declaration introducer; the rest are
/// reserved words that scan as `Keyword` but have no parser-level meaning.
pub const KEYWORDS: &[&str] = &[
    "let", "const", "var", "if", "else", "while", "for", "return", "break", "continue",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    NumberLiteral,
    StringLiteral,
    BooleanLiteral,
    Punctuation,
    /// Part of the token taxonomy but never actually emitted by the
    /// scanner: whitespace is skipped during scanning, not tokenized.
    Whitespace,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded lexeme text. For string literals this excludes the
    /// surrounding quotes and has escapes already resolved.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

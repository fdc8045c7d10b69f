use evmc_par::ast::Program;
use evmc_sem::SymbolTable;

/// What a [`crate::compile`] invocation should produce.
///
/// The core pipeline has no other configurable behavior — no optimization
/// levels, no target triples — so `Config` carries only this selector
/// today; it's the single place a future CLI flag would land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitKind {
    Tokens,
    Ast,
    Symbols,
    Assembly,
    Bytecode,
}

impl Default for EmitKind {
    fn default() -> Self {
        EmitKind::Bytecode
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub emit: EmitKind,
}

impl Config {
    pub fn new(emit: EmitKind) -> Self {
        Config { emit }
    }
}

/// The artifact produced by a successful `compile`, shaped by `config.emit`.
#[derive(Debug)]
pub enum CompileOutput {
    Tokens(Vec<evmc_lex::Token>),
    Ast(Program),
    Symbols(SymbolTable),
    Assembly(Vec<String>),
    Bytecode(Vec<u8>),
}

impl CompileOutput {
    /// Renders the artifact the way the CLI binary prints it: one line
    /// per token/assembly line, `{:#?}` for the AST and symbol table, and
    /// lowercase hex for bytecode.
    pub fn render(&self) -> String {
        match self {
            CompileOutput::Tokens(tokens) => tokens
                .iter()
                .map(|t| format!("{:?} {:?}", t.kind, t.lexeme))
                .collect::<Vec<_>>()
                .join("\n"),
            CompileOutput::Ast(program) => format!("{program:#?}"),
            CompileOutput::Symbols(symbols) => format!("{symbols:#?}"),
            CompileOutput::Assembly(lines) => lines.join("\n"),
            CompileOutput::Bytecode(bytes) => {
                bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
            }
        }
    }
}

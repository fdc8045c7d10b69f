//! Driver: wires the four pipeline crates into one `compile` entry point
//! plus a `[[bin]]` CLI front-end (§6, §10.3).
//!
//! Every stage below is a pure function — `tokenize`, `parse`, `analyze`,
//! `emit_assembly`, `emit_bytecode` — none of them log. Logging lives
//! here and only here: `compile` emits a `tracing::info!` span per stage
//! it enters and a `tracing::error!` on whichever stage first fails.

mod config;
mod error;
mod session;

pub use config::{CompileOutput, Config, EmitKind};
pub use error::{CompileError, Result};
pub use session::Session;

/// Runs the five-stage pipeline over `source`, stopping as soon as a
/// stage produces the output `config.emit` asks for.
pub fn compile(source: &str, config: &Config) -> Result<CompileOutput> {
    tracing::info!(stage = "lex", "tokenizing source");
    let tokens = evmc_lex::tokenize(source).map_err(|e| {
        tracing::error!(stage = "lex", error = %e, "lexing failed");
        e
    })?;
    if config.emit == EmitKind::Tokens {
        return Ok(CompileOutput::Tokens(tokens));
    }

    tracing::info!(stage = "parse", "parsing token stream");
    let program = evmc_par::parse(tokens).map_err(|e| {
        tracing::error!(stage = "parse", error = %e, "parsing failed");
        e
    })?;
    if config.emit == EmitKind::Ast {
        return Ok(CompileOutput::Ast(program));
    }

    tracing::info!(stage = "sem", "analyzing program");
    let symbols = evmc_sem::analyze(&program).map_err(|e| {
        tracing::error!(stage = "sem", error = %e, "semantic analysis failed");
        e
    })?;
    if config.emit == EmitKind::Symbols {
        return Ok(CompileOutput::Symbols(symbols));
    }

    match config.emit {
        EmitKind::Assembly => {
            tracing::info!(stage = "gen", form = "assembly", "emitting code");
            let lines = evmc_gen::emit_assembly(&program, &symbols).map_err(|e| {
                tracing::error!(stage = "gen", error = %e, "assembly emission failed");
                e
            })?;
            Ok(CompileOutput::Assembly(lines))
        }
        EmitKind::Bytecode => {
            tracing::info!(stage = "gen", form = "bytecode", "emitting code");
            let bytes = evmc_gen::emit_bytecode(&program, &symbols).map_err(|e| {
                tracing::error!(stage = "gen", error = %e, "bytecode emission failed");
                e
            })?;
            Ok(CompileOutput::Bytecode(bytes))
        }
        EmitKind::Tokens | EmitKind::Ast | EmitKind::Symbols => {
            unreachable!("handled by the early returns above")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_tokens_stops_before_parsing() {
        let config = Config::new(EmitKind::Tokens);
        let output = compile("let x = 5;", &config).unwrap();
        assert!(matches!(output, CompileOutput::Tokens(_)));
    }

    #[test]
    fn emit_ast_stops_before_analysis() {
        let config = Config::new(EmitKind::Ast);
        let output = compile("let x = 5;", &config).unwrap();
        assert!(matches!(output, CompileOutput::Ast(_)));
    }

    #[test]
    fn emit_symbols_stops_before_codegen() {
        let config = Config::new(EmitKind::Symbols);
        let output = compile("let x = 5;", &config).unwrap();
        assert!(matches!(output, CompileOutput::Symbols(_)));
    }

    #[test]
    fn emit_assembly_produces_listing_lines() {
        let config = Config::new(EmitKind::Assembly);
        let output = compile("let x = 5;", &config).unwrap();
        match output {
            CompileOutput::Assembly(lines) => assert!(!lines.is_empty()),
            other => panic!("expected Assembly, got {other:?}"),
        }
    }

    #[test]
    fn emit_bytecode_is_the_default() {
        assert_eq!(Config::default().emit, EmitKind::Bytecode);
        let config = Config::default();
        let output = compile("let x = 5;", &config).unwrap();
        match output {
            CompileOutput::Bytecode(bytes) => assert!(!bytes.is_empty()),
            other => panic!("expected Bytecode, got {other:?}"),
        }
    }

    #[test]
    fn first_stage_error_short_circuits_before_later_stages() {
        // Lex error: unterminated string. Must surface as CompileError::Lex,
        // not reach the parser.
        let config = Config::new(EmitKind::Bytecode);
        let err = compile("let x = \"unterminated;", &config).unwrap_err();
        assert!(matches!(err, CompileError::Lex(_)));
    }

    #[test]
    fn parse_error_surfaces_through_compile_error() {
        let config = Config::new(EmitKind::Bytecode);
        let err = compile("let x = ;", &config).unwrap_err();
        assert!(matches!(err, CompileError::Parse(_)));
    }

    #[test]
    fn sem_error_surfaces_through_compile_error() {
        let config = Config::new(EmitKind::Bytecode);
        let err = compile("let x = y;", &config).unwrap_err();
        assert!(matches!(err, CompileError::Sem(_)));
    }

    #[test]
    fn session_compile_matches_free_function() {
        let session = Session::new(Config::new(EmitKind::Tokens));
        let output = session.compile("let x = 5;").unwrap();
        assert!(matches!(output, CompileOutput::Tokens(_)));
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use evmc_drv::{Config, EmitKind, Session};

fn parse_emit(flag: &str) -> Option<EmitKind> {
    match flag {
        "tokens" => Some(EmitKind::Tokens),
        "ast" => Some(EmitKind::Ast),
        "symbols" => Some(EmitKind::Symbols),
        "asm" | "assembly" => Some(EmitKind::Assembly),
        "bytecode" => Some(EmitKind::Bytecode),
        _ => None,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut path: Option<PathBuf> = None;
    let mut emit = EmitKind::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if let Some(flag) = arg.strip_prefix("--emit=") {
            match parse_emit(flag) {
                Some(kind) => emit = kind,
                None => {
                    eprintln!("error: unrecognized --emit value {flag:?}");
                    return ExitCode::FAILURE;
                }
            }
        } else if arg == "--emit" {
            let Some(flag) = args.next() else {
                eprintln!("error: --emit requires a value");
                return ExitCode::FAILURE;
            };
            match parse_emit(&flag) {
                Some(kind) => emit = kind,
                None => {
                    eprintln!("error: unrecognized --emit value {flag:?}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            path = Some(PathBuf::from(arg));
        }
    }

    let Some(path) = path else {
        eprintln!("usage: evmc [--emit=tokens|ast|symbols|asm|bytecode] <source-file>");
        return ExitCode::FAILURE;
    };

    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", evmc_drv::CompileError::from(e));
            return ExitCode::FAILURE;
        }
    };

    let session = Session::new(Config::new(emit));
    match session.compile(&source) {
        Ok(output) => {
            println!("{}", output.render());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn source_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create scratch source file");
    write!(file, "{contents}").expect("write scratch source file");
    file
}

#[test]
fn default_emit_is_bytecode_hex() {
    let file = source_file("let x = 5;");
    Command::cargo_bin("evmc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[0-9a-f]+\n?$").unwrap());
}

#[test]
fn emit_tokens_lists_one_line_per_token() {
    let file = source_file("let x = 5;");
    Command::cargo_bin("evmc")
        .unwrap()
        .args(["--emit=tokens", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword"))
        .stdout(predicate::str::contains("Identifier"));
}

#[test]
fn emit_ast_pretty_prints_the_program() {
    let file = source_file("let x = 5;");
    Command::cargo_bin("evmc")
        .unwrap()
        .args(["--emit=ast", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("VarDecl"));
}

#[test]
fn emit_symbols_pretty_prints_the_table() {
    let file = source_file("let x: u8 = 5;");
    Command::cargo_bin("evmc")
        .unwrap()
        .args(["--emit=symbols", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("offset"));
}

#[test]
fn emit_assembly_lists_mnemonics() {
    let file = source_file("let x = 5;");
    Command::cargo_bin("evmc")
        .unwrap()
        .args(["--emit=asm", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("MSTORE"));
}

#[test]
fn lex_error_exits_nonzero_without_reaching_later_stages() {
    let file = source_file("let x = \"unterminated;");
    Command::cargo_bin("evmc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("lex error"));
}

#[test]
fn parse_error_exits_nonzero() {
    let file = source_file("let x = ;");
    Command::cargo_bin("evmc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn sem_error_exits_nonzero() {
    let file = source_file("let x = y;");
    Command::cargo_bin("evmc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("semantic error"));
}

#[test]
fn missing_file_reports_io_error() {
    Command::cargo_bin("evmc")
        .unwrap()
        .arg("/nonexistent/path/to/source.evm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn missing_source_argument_prints_usage() {
    Command::cargo_bin("evmc")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage"));
}

#[test]
fn unrecognized_emit_flag_is_rejected() {
    let file = source_file("let x = 5;");
    Command::cargo_bin("evmc")
        .unwrap()
        .args(["--emit=nonsense", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized"));
}

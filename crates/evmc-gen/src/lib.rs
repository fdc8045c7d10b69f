//! Code generation: two sibling emitters over the same AST and symbol
//! table, producing a human-oriented assembly listing and raw EVM
//! bytecode respectively (§4.4).

mod asm;
mod bytecode;
mod error;
mod label;
mod opcode;

pub use asm::{emit_assembly, AsmEmitter};
pub use bytecode::{emit_bytecode, BytecodeEmitter};
pub use error::{CodegenError, Result};
pub use label::{LabelId, PendingPush};

#[cfg(test)]
mod tests {
    use super::*;
    use evmc_par::parse;

    fn compile(source: &str) -> (evmc_par::ast::Program, evmc_sem::SymbolTable) {
        let tokens = evmc_lex::tokenize(source).unwrap();
        let program = parse(tokens).unwrap();
        let symbols = evmc_sem::analyze(&program).unwrap();
        (program, symbols)
    }

    #[test]
    fn assembly_and_bytecode_push_immediates_agree_on_value() {
        // Round-trip property from §8: assembly and bytecode PUSH
        // immediates must decode to the same integer (widths may differ
        // for jump targets, which are 1-byte placeholders in assembly).
        let (program, symbols) = compile("let x: u32 = 7;");
        let asm = emit_assembly(&program, &symbols).unwrap();
        let code = emit_bytecode(&program, &symbols).unwrap();

        let push_line = asm.iter().find(|l| l.starts_with("PUSH4")).unwrap();
        let hex = push_line.trim_start_matches("PUSH4 0x");
        let asm_value = u32::from_str_radix(hex, 16).unwrap();

        assert_eq!(code[0], 0x63); // PUSH4
        let bytecode_value = u32::from_be_bytes(code[1..5].try_into().unwrap());
        assert_eq!(asm_value, bytecode_value);
    }

    #[test]
    fn scenario_6_literal_out_of_range_never_reaches_codegen() {
        let tokens = evmc_lex::tokenize("let x: u8 = 300;").unwrap();
        let program = parse(tokens).unwrap();
        let err = evmc_sem::analyze(&program).unwrap_err();
        assert!(matches!(
            err,
            evmc_sem::SemError::LiteralOutOfRange { bit_width: 8, .. }
        ));
    }

    #[test]
    fn every_label_resolves_and_no_placeholder_bytes_remain() {
        let (program, symbols) = compile(
            r#"
            let x: u8 = 0;
            while (x < 10) {
                if (x < 5) {
                    x = 1;
                } else {
                    x = 2;
                }
            }
            "#,
        );
        let code = emit_bytecode(&program, &symbols).unwrap();
        // A resolved jump target of 0 is indistinguishable from an
        // unpatched placeholder byte-for-byte, but `emit_bytecode`
        // already returns `Err` on any `label_offsets` miss (§8
        // invariant 2), so reaching this point means every reference
        // resolved.
        assert!(!code.is_empty());
    }
}

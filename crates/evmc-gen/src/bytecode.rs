//! Raw EVM bytecode emitter (§4.4). Walks the AST once, emitting opcodes
//! and immediates into a byte buffer, then backpatches every forward
//! label reference in a second pass over `pending_pushes`.

use rustc_hash::FxHashMap;

use evmc_par::ast::{Assign, ArrayAccess, ArrayLit, Expr, IfStmt, Program, Stmt, VarDecl, WhileStmt};
use evmc_sem::{PrimitiveType, SymbolTable};

use crate::error::{CodegenError, Result};
use crate::label::{LabelId, PendingPush};
use crate::opcode::{self, bytes_for};

pub struct BytecodeEmitter<'a> {
    symbols: &'a SymbolTable,
    code: Vec<u8>,
    label_counter: u32,
    label_offsets: FxHashMap<LabelId, usize>,
    pending_pushes: Vec<PendingPush>,
}

/// Always one byte: label placeholders reserve a single immediate byte
/// regardless of how large the program eventually grows (§4.4, §9 open
/// question 2's bytecode-side counterpart).
const LABEL_PLACEHOLDER_SIZE: u8 = 1;

pub fn emit_bytecode(program: &Program, symbols: &SymbolTable) -> Result<Vec<u8>> {
    let mut emitter = BytecodeEmitter::new(symbols);
    for stmt in &program.statements {
        emitter.emit_stmt(stmt)?;
    }
    emitter.patch()?;
    Ok(emitter.code)
}

impl<'a> BytecodeEmitter<'a> {
    fn new(symbols: &'a SymbolTable) -> Self {
        BytecodeEmitter {
            symbols,
            code: Vec::new(),
            label_counter: 0,
            label_offsets: FxHashMap::default(),
            pending_pushes: Vec::new(),
        }
    }

    fn fresh_label(&mut self) -> LabelId {
        let id = LabelId(self.label_counter);
        self.label_counter += 1;
        id
    }

    fn record_label(&mut self, id: LabelId) {
        self.label_offsets.insert(id, self.code.len());
    }

    fn push_bytes(&mut self, n: u8, bytes: &[u8]) {
        self.code.push(opcode::push_opcode(n));
        self.code.extend_from_slice(bytes);
    }

    /// Pushes an already-resolved value (a memory offset or a constant
    /// like `0x40`), sized per the offset-size rule.
    fn push_offset(&mut self, offset: u64) {
        let n = bytes_for(offset as usize);
        let full = offset.to_be_bytes();
        self.push_bytes(n, &full[8 - n as usize..]);
    }

    /// Pushes a fixed-width immediate (used for `total_size` and
    /// per-element byte offsets in array-literal lowering, always 2
    /// bytes per §4.4's literal examples).
    fn push_fixed(&mut self, n: u8, value: u64) {
        let full = value.to_be_bytes();
        self.push_bytes(n, &full[8 - n as usize..]);
    }

    fn push_label_placeholder(&mut self, label_id: LabelId) {
        self.code.push(opcode::push_opcode(LABEL_PLACEHOLDER_SIZE));
        let position = self.code.len();
        self.code.push(0);
        self.pending_pushes.push(PendingPush {
            position,
            label_id,
            size: LABEL_PLACEHOLDER_SIZE,
        });
    }

    fn emit_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::VarDecl(decl) => self.emit_var_decl(decl),
            Stmt::Assign(assign) => self.emit_assign(assign),
            Stmt::If(stmt) => self.emit_if(stmt),
            Stmt::While(stmt) => self.emit_while(stmt),
            Stmt::Expr(expr) => self.emit_expr(expr),
        }
    }

    fn symbol_offset_and_primitive(&self, name: &str) -> (u64, Option<PrimitiveType>) {
        let symbol = self
            .symbols
            .get(name)
            .expect("analyzer already verified this identifier is declared");
        (symbol.offset, symbol.type_info.as_primitive())
    }

    fn emit_store(&mut self, name: &str, value: &Expr) -> Result<()> {
        self.emit_expr(value)?;
        let (offset, primitive) = self.symbol_offset_and_primitive(name);
        self.push_offset(offset);
        if primitive == Some(PrimitiveType::U8) {
            self.code.push(opcode::MSTORE8);
        } else {
            self.code.push(opcode::MSTORE);
        }
        Ok(())
    }

    fn emit_var_decl(&mut self, decl: &VarDecl) -> Result<()> {
        self.emit_store(&decl.name, &decl.init)
    }

    fn emit_assign(&mut self, assign: &Assign) -> Result<()> {
        self.emit_store(&assign.name, &assign.value)
    }

    fn emit_if(&mut self, stmt: &IfStmt) -> Result<()> {
        let else_id = self.fresh_label();
        let end_id = self.fresh_label();

        self.emit_expr(&stmt.cond)?;
        self.push_label_placeholder(else_id);
        self.code.push(opcode::JUMPI);

        for s in &stmt.then_body {
            self.emit_stmt(s)?;
        }
        self.push_label_placeholder(end_id);
        self.code.push(opcode::JUMP);

        self.record_label(else_id);
        self.code.push(opcode::JUMPDEST);

        if let Some(else_body) = &stmt.else_body {
            for s in else_body {
                self.emit_stmt(s)?;
            }
        }

        self.record_label(end_id);
        self.code.push(opcode::JUMPDEST);
        Ok(())
    }

    fn emit_while(&mut self, stmt: &WhileStmt) -> Result<()> {
        let start_id = self.fresh_label();
        let end_id = self.fresh_label();

        self.record_label(start_id);
        self.code.push(opcode::JUMPDEST);

        self.emit_expr(&stmt.cond)?;
        self.push_label_placeholder(end_id);
        self.code.push(opcode::JUMPI);

        for s in &stmt.body {
            self.emit_stmt(s)?;
        }
        self.push_label_placeholder(start_id);
        self.code.push(opcode::JUMP);

        self.record_label(end_id);
        self.code.push(opcode::JUMPDEST);
        Ok(())
    }

    fn emit_expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Number(n) => {
                let n_bytes = (n.bit_width / 8) as u8;
                let be = n.value.to_be_bytes::<32>();
                self.push_bytes(n_bytes, &be[32 - n_bytes as usize..]);
                Ok(())
            }
            Expr::Bool(b) => {
                self.push_bytes(1, &[if b.value { 1 } else { 0 }]);
                Ok(())
            }
            Expr::Str(s) => {
                let bytes = s.value.as_bytes();
                if bytes.len() > 32 {
                    return Err(CodegenError::StringTooLong(bytes.len()));
                }
                let mut buf = [0u8; 32];
                buf[32 - bytes.len()..].copy_from_slice(bytes);
                self.push_bytes(32, &buf);
                Ok(())
            }
            Expr::Ident(ident) => {
                let (offset, _) = self.symbol_offset_and_primitive(&ident.name);
                self.push_offset(offset);
                self.code.push(opcode::MLOAD);
                Ok(())
            }
            Expr::Binary(b) => {
                self.emit_expr(&b.left)?;
                self.emit_expr(&b.right)?;
                for &op in opcode::lower_operator(b.op) {
                    self.code.push(op);
                }
                Ok(())
            }
            Expr::Array(array) => self.emit_array_literal(array),
            Expr::Index(access) => self.emit_array_access(access),
        }
    }

    fn emit_array_literal(&mut self, array: &ArrayLit) -> Result<()> {
        let total_size = (array.elements.len() as u64) * 32;

        self.push_fixed(1, 0x40);
        self.code.push(opcode::MLOAD);
        self.code.push(opcode::DUP1);
        self.push_fixed(2, total_size);
        self.code.push(opcode::ADD);
        self.push_fixed(1, 0x40);
        self.code.push(opcode::SWAP1);
        self.code.push(opcode::MSTORE);

        for (i, element) in array.elements.iter().enumerate() {
            self.push_fixed(2, (i as u64) * 32);
            self.code.push(opcode::ADD);
            self.emit_expr(element)?;
            self.code.push(opcode::MSTORE);
        }
        Ok(())
    }

    fn emit_array_access(&mut self, access: &ArrayAccess) -> Result<()> {
        self.emit_expr(&access.array)?;
        self.emit_expr(&access.index)?;
        self.push_fixed(1, 0x20);
        self.code.push(opcode::MUL);
        self.code.push(opcode::ADD);
        self.code.push(opcode::MLOAD);
        Ok(())
    }

    fn patch(&mut self) -> Result<()> {
        for pending in &self.pending_pushes {
            let offset = *self
                .label_offsets
                .get(&pending.label_id)
                .ok_or(CodegenError::UnresolvedLabel(pending.label_id))?;
            let size = pending.size as usize;
            let full = (offset as u64).to_be_bytes();
            let bytes = &full[8 - size..];
            self.code[pending.position..pending.position + size].copy_from_slice(bytes);
        }
        Ok(())
    }
}


#[cfg(test)]
mod label_resolution_properties {
    //! Invariant 2 from §8: for arbitrary well-formed programs, every
    //! `label_id` referenced by a placeholder push resolves, and no
    //! placeholder bytes remain unpatched. `emit_bytecode` itself
    //! returns `Err(UnresolvedLabel)` rather than silently leaving a
    //! placeholder in place (see `patch`), so success of compilation is
    //! exactly the invariant being tested.
    use proptest::prelude::*;

    /// A generated program shape; rendered to source text by `render`,
    /// which assigns every declaration a globally unique name so
    /// `Redeclared` never fires regardless of how deeply nested the
    /// generator placed it.
    #[derive(Debug, Clone)]
    enum SynStmt {
        Decl,
        If(Vec<SynStmt>, Vec<SynStmt>),
        While(Vec<SynStmt>),
    }

    fn arb_stmt() -> impl Strategy<Value = SynStmt> {
        let leaf = Just(SynStmt::Decl);
        leaf.prop_recursive(3, 20, 3, |inner| {
            prop_oneof![
                Just(SynStmt::Decl),
                (
                    prop::collection::vec(inner.clone(), 0..3),
                    prop::collection::vec(inner.clone(), 0..3),
                )
                    .prop_map(|(then_body, else_body)| SynStmt::If(then_body, else_body)),
                prop::collection::vec(inner, 0..3).prop_map(SynStmt::While),
            ]
        })
    }

    fn render(stmts: &[SynStmt], counter: &mut usize, out: &mut String) {
        for stmt in stmts {
            match stmt {
                SynStmt::Decl => {
                    out.push_str(&format!("let v{counter} = 1;\n"));
                    *counter += 1;
                }
                SynStmt::If(then_body, else_body) => {
                    out.push_str("if (1 < 2) {\n");
                    render(then_body, counter, out);
                    out.push_str("} else {\n");
                    render(else_body, counter, out);
                    out.push_str("}\n");
                }
                SynStmt::While(body) => {
                    out.push_str("while (1 < 2) {\n");
                    render(body, counter, out);
                    out.push_str("}\n");
                }
            }
        }
    }

    proptest! {
        #[test]
        fn every_label_resolves_for_arbitrary_nested_control_flow(stmts in prop::collection::vec(arb_stmt(), 0..5)) {
            let mut counter = 0;
            let mut source = String::new();
            render(&stmts, &mut counter, &mut source);

            let tokens = evmc_lex::tokenize(&source).expect("generated source always lexes cleanly");
            let program = evmc_par::parse(tokens).expect("generated source always parses cleanly");
            let symbols = evmc_sem::analyze(&program).expect("generated source always analyzes cleanly");

            prop_assert!(emit_bytecode(&program, &symbols).is_ok());
        }
    }
}

//! Human-oriented assembly listing emitter (§4.4). Unlike the bytecode
//! emitter this never resolves jump targets: each `JUMPDEST` gets a
//! preceding `// label {id}` comment, and jump sites push the raw label
//! id as a one-byte literal (§9 open question 2 — intentional, not a
//! placeholder awaiting a patch pass).

use rustc_hash::FxHashMap;

use evmc_par::ast::{ArrayAccess, ArrayLit, Assign, Expr, IfStmt, Program, Stmt, VarDecl, WhileStmt};
use evmc_sem::{PrimitiveType, SymbolTable};

use crate::error::{CodegenError, Result};
use crate::label::LabelId;
use crate::opcode::{self, mnemonic};

pub struct AsmEmitter<'a> {
    symbols: &'a SymbolTable,
    lines: Vec<String>,
    label_counter: u32,
    label_offsets: FxHashMap<LabelId, usize>,
}

pub fn emit_assembly(program: &Program, symbols: &SymbolTable) -> Result<Vec<String>> {
    let mut emitter = AsmEmitter::new(symbols);
    for stmt in &program.statements {
        emitter.emit_stmt(stmt)?;
    }
    Ok(emitter.lines)
}

impl<'a> AsmEmitter<'a> {
    fn new(symbols: &'a SymbolTable) -> Self {
        AsmEmitter {
            symbols,
            lines: Vec::new(),
            label_counter: 0,
            label_offsets: FxHashMap::default(),
        }
    }

    fn fresh_label(&mut self) -> LabelId {
        let id = LabelId(self.label_counter);
        self.label_counter += 1;
        id
    }

    /// Records the listing line at which `id`'s `JUMPDEST` lands. Not
    /// consulted when emitting jump sites (§9 open question 2): kept for
    /// structural parity with the bytecode emitter and as a hook for
    /// tooling built on top of the listing.
    fn record_label(&mut self, id: LabelId) {
        self.label_offsets.insert(id, self.lines.len());
    }

    fn emit_jumpdest(&mut self, id: LabelId) {
        self.lines.push(format!("// label {}", id.0));
        self.lines.push(mnemonic(opcode::JUMPDEST).to_string());
    }

    fn push_line(&mut self, n: u8, bytes: &[u8]) {
        let hex: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
        self.lines.push(format!("PUSH{n} 0x{hex}"));
    }

    fn push_label_line(&mut self, label_id: LabelId) {
        self.lines.push(format!("PUSH1 0x{:02X}", label_id.0 as u8));
    }

    fn op_line(&mut self, opcode: u8) {
        self.lines.push(mnemonic(opcode).to_string());
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

    fn push_offset(&mut self, offset: u64) {
        let n = opcode::bytes_for(offset as usize);
        let full = offset.to_be_bytes();
        self.push_line(n, &full[8 - n as usize..]);
    }

    fn emit_store(&mut self, name: &str, value: &Expr) -> Result<()> {
        self.emit_expr(value)?;
        let (offset, primitive) = self.symbol_offset_and_primitive(name);
        self.push_offset(offset);
        if primitive == Some(PrimitiveType::U8) {
            self.op_line(opcode::MSTORE8);
        } else {
            self.op_line(opcode::MSTORE);
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
        self.push_label_line(else_id);
        self.op_line(opcode::JUMPI);

        for s in &stmt.then_body {
            self.emit_stmt(s)?;
        }
        self.push_label_line(end_id);
        self.op_line(opcode::JUMP);

        self.record_label(else_id);
        self.emit_jumpdest(else_id);

        if let Some(else_body) = &stmt.else_body {
            for s in else_body {
                self.emit_stmt(s)?;
            }
        }

        self.record_label(end_id);
        self.emit_jumpdest(end_id);
        Ok(())
    }

    fn emit_while(&mut self, stmt: &WhileStmt) -> Result<()> {
        let start_id = self.fresh_label();
        let end_id = self.fresh_label();

        self.record_label(start_id);
        self.emit_jumpdest(start_id);

        self.emit_expr(&stmt.cond)?;
        self.push_label_line(end_id);
        self.op_line(opcode::JUMPI);

        for s in &stmt.body {
            self.emit_stmt(s)?;
        }
        self.push_label_line(start_id);
        self.op_line(opcode::JUMP);

        self.record_label(end_id);
        self.emit_jumpdest(end_id);
        Ok(())
    }

    fn emit_expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Number(n) => {
                let n_bytes = (n.bit_width / 8) as u8;
                let be = n.value.to_be_bytes::<32>();
                self.push_line(n_bytes, &be[32 - n_bytes as usize..]);
                Ok(())
            }
            Expr::Bool(b) => {
                self.push_line(1, &[if b.value { 1 } else { 0 }]);
                Ok(())
            }
            Expr::Str(s) => {
                let bytes = s.value.as_bytes();
                if bytes.len() > 32 {
                    return Err(CodegenError::StringTooLong(bytes.len()));
                }
                let mut buf = [0u8; 32];
                buf[32 - bytes.len()..].copy_from_slice(bytes);
                self.push_line(32, &buf);
                Ok(())
            }
            Expr::Ident(ident) => {
                let (offset, _) = self.symbol_offset_and_primitive(&ident.name);
                self.push_offset(offset);
                self.op_line(opcode::MLOAD);
                Ok(())
            }
            Expr::Binary(b) => {
                self.emit_expr(&b.left)?;
                self.emit_expr(&b.right)?;
                for &op in opcode::lower_operator(b.op) {
                    self.op_line(op);
                }
                Ok(())
            }
            Expr::Array(array) => self.emit_array_literal(array),
            Expr::Index(access) => self.emit_array_access(access),
        }
    }

    fn emit_array_literal(&mut self, array: &ArrayLit) -> Result<()> {
        let total_size = (array.elements.len() as u64) * 32;

        self.push_line(1, &[0x40]);
        self.op_line(opcode::MLOAD);
        self.op_line(opcode::DUP1);
        self.push_line(2, &(total_size as u16).to_be_bytes());
        self.op_line(opcode::ADD);
        self.push_line(1, &[0x40]);
        self.op_line(opcode::SWAP1);
        self.op_line(opcode::MSTORE);

        for (i, element) in array.elements.iter().enumerate() {
            self.push_line(2, &((i as u64 * 32) as u16).to_be_bytes());
            self.op_line(opcode::ADD);
            self.op_line(opcode::DUP2);
            self.emit_expr(element)?;
            self.op_line(opcode::SWAP1);
            self.op_line(opcode::MSTORE);
        }
        Ok(())
    }

    fn emit_array_access(&mut self, access: &ArrayAccess) -> Result<()> {
        self.emit_expr(&access.array)?;
        self.emit_expr(&access.index)?;
        self.push_line(1, &[0x20]);
        self.op_line(opcode::MUL);
        self.op_line(opcode::ADD);
        self.op_line(opcode::MLOAD);
        Ok(())
    }
}

//! The analyzer itself: one `analyze_*`/`infer_*` method per AST variant,
//! walking the tree exactly once and building a `SymbolTable` as it goes
//! (§4.3). Analysis never partially populates the table on failure: the
//! first error aborts the whole pass (§7).

use evmc_par::ast::{
    Assign, BinaryExpr, Expr, IfStmt, Program, Stmt, VarDecl, WhileStmt,
};

use crate::error::{Result, SemError};
use crate::symbol_table::{Symbol, SymbolTable};
use crate::types::{PrimitiveType, TypeInfo};

/// Maximum byte length of a string literal's UTF-8 encoding (§3.2).
const MAX_STRING_BYTES: usize = 32;

pub struct Analyzer {
    symbols: SymbolTable,
    next_offset: u64,
}

impl Analyzer {
    fn new() -> Self {
        Analyzer {
            symbols: SymbolTable::new(),
            next_offset: 0,
        }
    }

    pub fn analyze(program: &Program) -> Result<SymbolTable> {
        let mut analyzer = Analyzer::new();
        for stmt in &program.statements {
            analyzer.analyze_stmt(stmt)?;
        }
        Ok(analyzer.symbols)
    }

    fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::VarDecl(decl) => self.analyze_var_decl(decl),
            Stmt::Assign(assign) => self.analyze_assign(assign),
            Stmt::If(stmt) => self.analyze_if(stmt),
            Stmt::While(stmt) => self.analyze_while(stmt),
            Stmt::Expr(expr) => self.check_expr(expr),
        }
    }

    fn analyze_var_decl(&mut self, decl: &VarDecl) -> Result<()> {
        if self.symbols.contains(&decl.name) {
            return Err(SemError::Redeclared(decl.name.clone()));
        }

        self.check_expr(&decl.init)?;
        let type_info = self.infer(&decl.init)?;

        let offset = self.next_offset;
        self.next_offset += type_info.bit_width();
        self.symbols.insert(
            decl.name.clone(),
            Symbol {
                offset,
                type_info,
            },
        );
        Ok(())
    }

    fn analyze_assign(&mut self, assign: &Assign) -> Result<()> {
        let existing = self
            .symbols
            .get(&assign.name)
            .ok_or_else(|| SemError::Undeclared(assign.name.clone()))?
            .type_info
            .clone();

        self.check_expr(&assign.value)?;
        let rhs = self.infer(&assign.value)?;

        match (existing.as_primitive(), rhs.as_primitive()) {
            (Some(expected), Some(actual)) if expected == actual => Ok(()),
            (Some(expected), Some(actual)) => Err(SemError::TypeMismatch { expected, actual }),
            _ => Err(SemError::ArrayAssignmentUnsupported),
        }
    }

    fn analyze_if(&mut self, stmt: &IfStmt) -> Result<()> {
        self.check_expr(&stmt.cond)?;
        for s in &stmt.then_body {
            self.analyze_stmt(s)?;
        }
        if let Some(else_body) = &stmt.else_body {
            for s in else_body {
                self.analyze_stmt(s)?;
            }
        }
        Ok(())
    }

    fn analyze_while(&mut self, stmt: &WhileStmt) -> Result<()> {
        self.check_expr(&stmt.cond)?;
        for s in &stmt.body {
            self.analyze_stmt(s)?;
        }
        Ok(())
    }

    /// Validates an expression and everything nested inside it. Does not
    /// itself compute a `TypeInfo`; see `infer` for that.
    fn check_expr(&self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Number(n) => {
                let in_range = n.bit_width == 256 || n.value.bit_len() <= n.bit_width as usize;
                if !in_range {
                    return Err(SemError::LiteralOutOfRange {
                        value: n.value.to_string(),
                        bit_width: n.bit_width,
                    });
                }
                Ok(())
            }
            Expr::Str(s) => {
                let len = s.value.len();
                if len > MAX_STRING_BYTES {
                    return Err(SemError::StringTooLong(len));
                }
                Ok(())
            }
            Expr::Bool(_) => Ok(()),
            Expr::Ident(ident) => {
                if self.symbols.contains(&ident.name) {
                    Ok(())
                } else {
                    Err(SemError::Undeclared(ident.name.clone()))
                }
            }
            Expr::Binary(BinaryExpr { left, right, .. }) => {
                self.check_expr(left)?;
                self.check_expr(right)
            }
            Expr::Array(array) => {
                let Some((first, rest)) = array.elements.split_first() else {
                    return Err(SemError::EmptyArrayType);
                };
                self.check_expr(first)?;
                let first_type = self.infer(first)?;
                for element in rest {
                    self.check_expr(element)?;
                    if self.infer(element)? != first_type {
                        return Err(SemError::HeterogeneousArray);
                    }
                }
                Ok(())
            }
            Expr::Index(access) => {
                self.check_expr(&access.array)?;
                self.check_expr(&access.index)?;
                let array_type = self.infer(&access.array)?;
                if array_type.is_array() {
                    Ok(())
                } else {
                    Err(SemError::ArrayIndexOnNonArray(index_target_name(access)))
                }
            }
        }
    }

    /// Computes an expression's `TypeInfo`. Assumes `check_expr` has
    /// already validated it; identifier lookups still return `Result`
    /// since `infer` is also called standalone by `check_expr` itself
    /// while validating array literals.
    fn infer(&self, expr: &Expr) -> Result<TypeInfo> {
        match expr {
            Expr::Number(n) => {
                let primitive = PrimitiveType::from_bit_width(n.bit_width)
                    .expect("parser only ever assigns 8/16/32/256 as a literal's bit width");
                Ok(TypeInfo::Primitive(primitive))
            }
            Expr::Str(_) => Ok(TypeInfo::Primitive(PrimitiveType::U256)),
            Expr::Bool(_) => Ok(TypeInfo::Primitive(PrimitiveType::Bool)),
            Expr::Ident(ident) => self
                .symbols
                .get(&ident.name)
                .map(|s| s.type_info.clone())
                .ok_or_else(|| SemError::Undeclared(ident.name.clone())),
            Expr::Binary(b) => self.infer(&b.left),
            Expr::Array(array) => {
                let first = array
                    .elements
                    .first()
                    .ok_or(SemError::EmptyArrayType)?;
                let element_type = self.infer(first)?;
                Ok(TypeInfo::Array(Box::new(element_type), array.elements.len()))
            }
            Expr::Index(access) => {
                let array_type = self.infer(&access.array)?;
                match array_type.element_type() {
                    Some(elem) => Ok(elem.clone()),
                    None => Err(SemError::ArrayIndexOnNonArray(index_target_name(access))),
                }
            }
        }
    }
}

/// Best-effort name for an `ArrayIndexOnNonArray` diagnostic; the grammar
/// only ever builds `ArrayAccess` over an identifier primary.
fn index_target_name(access: &evmc_par::ast::ArrayAccess) -> String {
    match access.array.as_ref() {
        Expr::Ident(ident) => ident.name.clone(),
        other => format!("<expression at {:?}>", other.span()),
    }
}

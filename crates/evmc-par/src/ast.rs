//! Abstract syntax tree produced by the parser.
//!
//! One tagged-variant tree (`Stmt`/`Expr`) walked by exhaustive `match` in
//! every downstream stage (analyzer, both emitters) rather than a visitor
//! with double dispatch — adding a variant is a compile error everywhere
//! it isn't handled instead of a silent no-op.

use evmc_util::Span;
use ruint::aliases::U256;

/// The type a variable declaration resolves to, either from an explicit
/// annotation (`u8`/`u16`/`u32`/`u256`) or inferred from its initializer.
/// `Bool` only ever arises through inference: there is no `bool` spelling
/// in the annotation grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeName {
    U8,
    U16,
    U32,
    U256,
    Bool,
}

impl TypeName {
    pub fn bit_width(self) -> u16 {
        match self {
            TypeName::U8 | TypeName::Bool => 8,
            TypeName::U16 => 16,
            TypeName::U32 => 32,
            TypeName::U256 => 256,
        }
    }

    /// Maps a type annotation's identifier text to a `TypeName`, or `None`
    /// if it names no recognized primitive.
    pub fn from_annotation(name: &str) -> Option<TypeName> {
        match name {
            "u8" => Some(TypeName::U8),
            "u16" => Some(TypeName::U16),
            "u32" => Some(TypeName::U32),
            "u256" => Some(TypeName::U256),
            _ => None,
        }
    }
}

/// A recognized binary operator symbol (§4.4 of the operator table).
/// Unary `!`/`-` are not members of this set: the parser lowers them to
/// `BinaryExpr` nodes directly (see `parse_prefix`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Eq,
    Ne,
    Le,
    Ge,
    And,
    Or,
}

impl BinOp {
    pub fn from_symbol(symbol: &str) -> Option<BinOp> {
        match symbol {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            "<" => Some(BinOp::Lt),
            ">" => Some(BinOp::Gt),
            "==" => Some(BinOp::Eq),
            "!=" => Some(BinOp::Ne),
            "<=" => Some(BinOp::Le),
            ">=" => Some(BinOp::Ge),
            "&&" => Some(BinOp::And),
            "||" => Some(BinOp::Or),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

#[derive(Debug)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug)]
pub enum Stmt {
    VarDecl(VarDecl),
    Assign(Assign),
    If(IfStmt),
    While(WhileStmt),
    Expr(Expr),
}

#[derive(Debug)]
pub struct VarDecl {
    pub name: String,
    pub declared_type: TypeName,
    pub init: Expr,
    pub span: Span,
}

#[derive(Debug)]
pub struct Assign {
    pub name: String,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Option<Vec<Stmt>>,
    pub span: Span,
}

#[derive(Debug)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug)]
pub enum Expr {
    Number(NumberLit),
    Str(StringLit),
    Bool(BoolLit),
    Ident(IdentExpr),
    Binary(BinaryExpr),
    Array(ArrayLit),
    Index(ArrayAccess),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Number(n) => n.span,
            Expr::Str(s) => s.span,
            Expr::Bool(b) => b.span,
            Expr::Ident(i) => i.span,
            Expr::Binary(b) => b.span,
            Expr::Array(a) => a.span,
            Expr::Index(a) => a.span,
        }
    }
}

/// Value is an unbounded-width unsigned integer at the AST level (a `u256`
/// literal can use the full 256-bit range); `bit_width` starts at 256 for
/// every number literal and is rewritten by an enclosing variable
/// declaration to the declared/inferred primitive's width (§4.2).
#[derive(Clone, Debug)]
pub struct NumberLit {
    pub value: U256,
    pub bit_width: u16,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct StringLit {
    pub value: String,
    pub span: Span,
}

#[derive(Clone, Copy, Debug)]
pub struct BoolLit {
    pub value: bool,
    pub span: Span,
}

#[derive(Clone, Debug)]
pub struct IdentExpr {
    pub name: String,
    pub span: Span,
}

#[derive(Debug)]
pub struct BinaryExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug)]
pub struct ArrayLit {
    pub elements: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug)]
pub struct ArrayAccess {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}

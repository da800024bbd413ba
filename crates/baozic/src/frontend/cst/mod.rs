//! Concrete syntax tree
//!
//! This is the shape a parser hands to the analyzer. It mirrors the grammar
//! productions and carries no semantic information: names are plain
//! strings, types are unresolved annotations and nothing is typed yet.
//! Every node records the byte span it was parsed from.

#[cfg(test)]
pub mod build;

use crate::ast::{BinOp, UnaryOp};
use crate::common::Span;

/// One compilation unit: a sequence of terminated statements
#[derive(Debug, Clone, PartialEq)]
pub struct SourceUnit {
    pub statements: Vec<CstStmt>,
    pub span: Span,
}

impl SourceUnit {
    pub fn new(statements: Vec<CstStmt>, span: Span) -> Self {
        Self { statements, span }
    }
}

/// An identifier occurrence
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A type annotation as written, e.g. `整数[][]`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub kind: TypeAnnotationKind,
    pub span: Span,
}

impl TypeAnnotation {
    pub fn new(kind: TypeAnnotationKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeAnnotationKind {
    /// `真假`
    Boolean,
    /// `整数`
    Int,
    /// `小数`
    Float,
    /// `词`
    String,
    /// `字`
    Char,
    /// `T[]`
    Array(Box<TypeAnnotation>),
}

/// A brace-delimited statement list
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<CstStmt>,
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<CstStmt>, span: Span) -> Self {
        Self { statements, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CstStmt {
    pub kind: CstStmtKind,
    pub span: Span,
}

impl CstStmt {
    pub fn new(kind: CstStmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CstStmtKind {
    VarDec {
        ty: TypeAnnotation,
        name: Ident,
        initializer: CstExpr,
    },
    Assign {
        target: Ident,
        source: CstExpr,
    },
    Print {
        argument: CstExpr,
    },
    While {
        test: CstExpr,
        body: Block,
    },
    For {
        test: CstExpr,
        body: Block,
    },
    If {
        test: CstExpr,
        consequent: Block,
        alternate: Option<Block>,
    },
    Breathing,
    Return {
        argument: CstExpr,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CstExpr {
    pub kind: CstExprKind,
    pub span: Span,
}

impl CstExpr {
    pub fn new(kind: CstExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CstExprKind {
    Binary {
        op: BinOp,
        left: Box<CstExpr>,
        right: Box<CstExpr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<CstExpr>,
    },
    /// `( expr )`
    Paren(Box<CstExpr>),
    /// `[ e1, e2, ... ]`
    Array(Vec<CstExpr>),
    /// `array[index]`
    Subscript {
        array: Box<CstExpr>,
        index: Box<CstExpr>,
    },
    Int(i64),
    Float(f64),
    Str(String),
    Char(char),
    Bool(bool),
    Identifier(String),
}

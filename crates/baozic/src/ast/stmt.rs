//! Typed statement nodes

use super::{Expr, Variable};
use crate::common::Span;
use crate::types::Type;

/// An analyzed compilation unit
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        Self { statements, span }
    }

    /// Every expression node in the program, in program order
    pub fn expressions(&self) -> Vec<&Expr> {
        let mut out = Vec::new();
        for stmt in &self.statements {
            stmt.walk_exprs(&mut |e| out.push(e));
        }
        out
    }
}

/// A statement
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Visit every expression reachable from this statement, including
    /// those in nested bodies
    pub fn walk_exprs<'a>(&'a self, visit: &mut impl FnMut(&'a Expr)) {
        match &self.kind {
            StmtKind::VariableDeclaration { initializer, .. } => initializer.walk(visit),
            StmtKind::Assignment { source, .. } => source.walk(visit),
            StmtKind::Print { argument } | StmtKind::Return { argument } => argument.walk(visit),
            StmtKind::While { test, body } | StmtKind::For { test, body } => {
                test.walk(visit);
                for stmt in body {
                    stmt.walk_exprs(visit);
                }
            }
            StmtKind::If {
                test,
                consequent,
                alternate,
            } => {
                test.walk(visit);
                for stmt in consequent.iter().chain(alternate.iter().flatten()) {
                    stmt.walk_exprs(visit);
                }
            }
            StmtKind::Breathing => {}
        }
    }
}

/// Statement kinds
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `T name = initializer;`
    VariableDeclaration {
        ty: Type,
        variable: Variable,
        initializer: Expr,
    },
    /// `target = source;`
    Assignment { target: Variable, source: Expr },
    /// `打印🐷argument🐷;`
    Print { argument: Expr },
    /// `当 test { body }`
    While { test: Expr, body: Vec<Stmt> },
    /// Condition-guarded repeat, same shape as `While`
    For { test: Expr, body: Vec<Stmt> },
    /// `如果 test { consequent } 否则 { alternate }`
    If {
        test: Expr,
        consequent: Vec<Stmt>,
        alternate: Option<Vec<Stmt>>,
    },
    /// Explicit no-op
    Breathing,
    /// `返回 argument;`
    Return { argument: Expr },
}

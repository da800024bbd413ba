//! AST optimizer
//!
//! A single bottom-up pass over a typed program. Children are optimized
//! before their parent, so each rewrite sees operands that are already in
//! their simplest form and one pass reaches a fixed point. Every rewritten
//! expression keeps the type of the node it replaces.

pub mod fold;
mod simplify;

use log::{debug, trace};

use crate::ast::{Expr, ExprKind, Program, Stmt, StmtKind};
pub use simplify::{simplify_binary, simplify_unary};

/// Optimize a typed program
pub fn optimize(program: Program) -> Program {
    let mut optimizer = Optimizer::new();
    let program = optimizer.optimize_program(program);
    debug!(
        "optimizer removed {} statements and pruned {} branches",
        optimizer.removed_statements, optimizer.pruned_branches
    );
    program
}

/// Statement-level state of one optimizer run
#[derive(Debug, Default)]
pub struct Optimizer {
    removed_statements: usize,
    pruned_branches: usize,
}

impl Optimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optimize_program(&mut self, program: Program) -> Program {
        let statements = self.optimize_block(program.statements);
        Program::new(statements, program.span)
    }

    /// Optimize a statement list, splicing in whatever each statement
    /// becomes
    fn optimize_block(&mut self, statements: Vec<Stmt>) -> Vec<Stmt> {
        statements
            .into_iter()
            .flat_map(|stmt| self.optimize_stmt(stmt))
            .collect()
    }

    /// A statement optimizes to zero or more statements
    fn optimize_stmt(&mut self, stmt: Stmt) -> Vec<Stmt> {
        let span = stmt.span;
        let kind = match stmt.kind {
            StmtKind::VariableDeclaration {
                ty,
                variable,
                initializer,
            } => StmtKind::VariableDeclaration {
                ty,
                variable,
                initializer: optimize_expr(initializer),
            },
            StmtKind::Assignment { target, source } => {
                let source = optimize_expr(source);
                if let ExprKind::Variable(var) = &source.kind {
                    if *var == target {
                        trace!("removed self-assignment of {}", target.name);
                        self.removed_statements += 1;
                        return Vec::new();
                    }
                }
                StmtKind::Assignment { target, source }
            }
            StmtKind::Print { argument } => StmtKind::Print {
                argument: optimize_expr(argument),
            },
            StmtKind::Return { argument } => StmtKind::Return {
                argument: optimize_expr(argument),
            },
            StmtKind::While { test, body } => StmtKind::While {
                test: optimize_expr(test),
                body: self.optimize_block(body),
            },
            StmtKind::For { test, body } => StmtKind::For {
                test: optimize_expr(test),
                body: self.optimize_block(body),
            },
            StmtKind::If {
                test,
                consequent,
                alternate,
            } => {
                let test = optimize_expr(test);
                let consequent = self.optimize_block(consequent);
                let alternate = alternate.map(|body| self.optimize_block(body));

                match test.as_literal().and_then(|lit| lit.as_bool()) {
                    Some(true) => {
                        trace!("if test is always true, kept the consequent");
                        self.pruned_branches += 1;
                        return consequent;
                    }
                    Some(false) => {
                        trace!("if test is always false, kept the alternate");
                        self.pruned_branches += 1;
                        return alternate.unwrap_or_default();
                    }
                    None => StmtKind::If {
                        test,
                        consequent,
                        alternate,
                    },
                }
            }
            StmtKind::Breathing => StmtKind::Breathing,
        };

        vec![Stmt::new(kind, span)]
    }
}

/// Optimize an expression bottom-up
pub fn optimize_expr(expr: Expr) -> Expr {
    let Expr { kind, ty, span } = expr;
    match kind {
        ExprKind::Binary { op, left, right } => {
            simplify_binary(op, optimize_expr(*left), optimize_expr(*right), ty, span)
        }
        ExprKind::Unary { op, operand } => simplify_unary(op, optimize_expr(*operand), ty, span),
        ExprKind::Array(elements) => Expr::new(
            ExprKind::Array(elements.into_iter().map(optimize_expr).collect()),
            ty,
            span,
        ),
        ExprKind::Subscript { array, index } => Expr::new(
            ExprKind::Subscript {
                array: Box::new(optimize_expr(*array)),
                index: Box::new(optimize_expr(*index)),
            },
            ty,
            span,
        ),
        kind @ (ExprKind::Literal(_) | ExprKind::Variable(_)) => Expr::new(kind, ty, span),
    }
}

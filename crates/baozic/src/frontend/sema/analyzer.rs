//! Baozi semantic analyzer

use log::{debug, trace};

use super::scope::Scope;
use super::types::TypeChecker;
use crate::ast::*;
use crate::common::{AnalysisError, AnalysisResult};
use crate::frontend::cst::{Block, CstExpr, CstExprKind, CstStmt, CstStmtKind, SourceUnit};
use crate::opt::fold;
use crate::types::Type;

/// Walks a CST, resolving names and checking types, and builds the typed AST.
/// Analysis stops at the first error.
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    scope: Scope,
    type_checker: TypeChecker,
    declared: usize,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            scope: Scope::new(),
            type_checker: TypeChecker::new(),
            declared: 0,
        }
    }

    /// Analyze a complete compilation unit against a fresh root scope
    pub fn analyze(&mut self, unit: &SourceUnit) -> AnalysisResult<Program> {
        self.scope = Scope::new();
        self.declared = 0;
        debug!("analyzing {} top-level statements", unit.statements.len());

        let statements = unit
            .statements
            .iter()
            .map(|stmt| self.analyze_stmt(stmt))
            .collect::<AnalysisResult<Vec<_>>>()?;

        debug!("analysis finished");
        Ok(Program::new(statements, unit.span))
    }

    /// Analyze a body in its own child scope
    fn analyze_block(&mut self, block: &Block) -> AnalysisResult<Vec<Stmt>> {
        self.scope.push_child();
        trace!("entered body scope at depth {}", self.scope.depth());

        let result = block
            .statements
            .iter()
            .map(|stmt| self.analyze_stmt(stmt))
            .collect::<AnalysisResult<Vec<_>>>();

        self.scope.pop_to_parent();
        trace!("left body scope, back at depth {}", self.scope.depth());
        result
    }

    fn analyze_stmt(&mut self, stmt: &CstStmt) -> AnalysisResult<Stmt> {
        let kind = match &stmt.kind {
            CstStmtKind::VarDec {
                ty,
                name,
                initializer,
            } => {
                let ty = self.type_checker.resolve(ty);
                let initializer = self.analyze_expr(initializer, Some(&ty))?;
                self.type_checker.expect_assignable(&ty, &initializer)?;

                self.declared += 1;
                let variable =
                    Variable::new(name.name.clone(), ty.clone()).with_id(self.declared);
                self.scope.declare(variable.clone(), name.span)?;
                trace!("declared {}: {}", variable.unique_name(), variable.ty);

                StmtKind::VariableDeclaration {
                    ty,
                    variable,
                    initializer,
                }
            }
            CstStmtKind::Assign { target, source } => {
                let target = self.scope.resolve(&target.name, target.span)?.clone();
                let source = self.analyze_expr(source, Some(&target.ty))?;
                self.type_checker.expect_assignable(&target.ty, &source)?;
                StmtKind::Assignment { target, source }
            }
            CstStmtKind::Print { argument } => StmtKind::Print {
                argument: self.analyze_expr(argument, None)?,
            },
            CstStmtKind::While { test, body } => {
                let test = self.analyze_condition(test)?;
                let body = self.analyze_block(body)?;
                StmtKind::While { test, body }
            }
            CstStmtKind::For { test, body } => {
                let test = self.analyze_condition(test)?;
                let body = self.analyze_block(body)?;
                StmtKind::For { test, body }
            }
            CstStmtKind::If {
                test,
                consequent,
                alternate,
            } => {
                let test = self.analyze_condition(test)?;
                let consequent = self.analyze_block(consequent)?;
                let alternate = match alternate {
                    Some(block) => Some(self.analyze_block(block)?),
                    None => None,
                };
                StmtKind::If {
                    test,
                    consequent,
                    alternate,
                }
            }
            CstStmtKind::Breathing => StmtKind::Breathing,
            CstStmtKind::Return { argument } => {
                if self.scope.is_root() {
                    return Err(AnalysisError::misplaced_return(stmt.span));
                }
                StmtKind::Return {
                    argument: self.analyze_expr(argument, None)?,
                }
            }
        };

        Ok(Stmt::new(kind, stmt.span))
    }

    fn analyze_condition(&mut self, test: &CstExpr) -> AnalysisResult<Expr> {
        let test = self.analyze_expr(test, None)?;
        self.type_checker.expect_condition(&test)?;
        Ok(test)
    }

    /// Type an expression. `expected` is the type the surrounding context
    /// requires, if known; it lets a one-character string stand for a Char
    /// and gives empty array literals their type.
    fn analyze_expr(&mut self, expr: &CstExpr, expected: Option<&Type>) -> AnalysisResult<Expr> {
        let span = expr.span;
        match &expr.kind {
            CstExprKind::Int(n) => Ok(Expr::literal(Literal::Int(*n), span)),
            CstExprKind::Float(x) => Ok(Expr::literal(Literal::Float(*x), span)),
            CstExprKind::Bool(b) => Ok(Expr::literal(Literal::Boolean(*b), span)),
            CstExprKind::Char(c) => Ok(Expr::literal(Literal::Char(*c), span)),
            CstExprKind::Str(s) => {
                let literal = match (expected, single_char(s)) {
                    (Some(Type::Char), Some(c)) => Literal::Char(c),
                    _ => Literal::String(s.clone()),
                };
                Ok(Expr::literal(literal, span))
            }
            CstExprKind::Identifier(name) => {
                let variable = self.scope.resolve(name, span)?.clone();
                Ok(Expr::variable(variable, span))
            }
            CstExprKind::Paren(inner) => self.analyze_expr(inner, expected),
            CstExprKind::Unary { op, operand } => {
                let operand = self.analyze_expr(operand, None)?;
                let ty = self.type_checker.unary_result_type(*op, &operand)?;
                Ok(Expr::unary(*op, operand, ty, span))
            }
            CstExprKind::Binary { op, left, right } => {
                let (left, right) = if op.is_equality() {
                    self.analyze_compared(left, right)?
                } else {
                    (self.analyze_expr(left, None)?, self.analyze_expr(right, None)?)
                };
                let ty = self
                    .type_checker
                    .binary_result_type(*op, &left, &right, span)?;
                Ok(Expr::binary(*op, left, right, ty, span))
            }
            CstExprKind::Array(elements) => {
                self.analyze_array(elements, expected.and_then(Type::element_type), expr)
            }
            CstExprKind::Subscript { array, index } => self.analyze_subscript(array, index, expr),
        }
    }

    /// Operands of `==` and `≠`. Each side is context for the other: the
    /// left types the right, unless the left is an empty array literal that
    /// can only be typed from the right.
    fn analyze_compared(
        &mut self,
        left: &CstExpr,
        right: &CstExpr,
    ) -> AnalysisResult<(Expr, Expr)> {
        if is_empty_array(left) {
            let right = self.analyze_expr(right, None)?;
            let left = self.analyze_expr(left, Some(&right.ty))?;
            return Ok((left, right));
        }

        let left = self.analyze_expr(left, None)?;
        let right = self.analyze_expr(right, Some(&left.ty))?;
        if right.ty == Type::Char {
            return Ok((coerce_to_char(left), right));
        }
        Ok((left, right))
    }

    fn analyze_array(
        &mut self,
        elements: &[CstExpr],
        expected_element: Option<&Type>,
        expr: &CstExpr,
    ) -> AnalysisResult<Expr> {
        let Some((first, rest)) = elements.split_first() else {
            return match expected_element {
                Some(element) => Ok(Expr::new(
                    ExprKind::Array(Vec::new()),
                    Type::array_of(element.clone()),
                    expr.span,
                )),
                None => Err(AnalysisError::type_mismatch(
                    "cannot infer the element type of an empty array",
                    expr.span,
                )),
            };
        };

        let first = self.analyze_expr(first, expected_element)?;
        let element_ty = first.ty.clone();
        let mut typed = Vec::with_capacity(elements.len());
        typed.push(first);

        for element in rest {
            let element = self.analyze_expr(element, Some(&element_ty))?;
            if !self.type_checker.types_match(&element_ty, &element.ty) {
                return Err(AnalysisError::heterogeneous_array_element(
                    element_ty,
                    element.ty,
                    element.span,
                ));
            }
            typed.push(element);
        }

        Ok(Expr::new(
            ExprKind::Array(typed),
            Type::array_of(element_ty),
            expr.span,
        ))
    }

    fn analyze_subscript(
        &mut self,
        array: &CstExpr,
        index: &CstExpr,
        expr: &CstExpr,
    ) -> AnalysisResult<Expr> {
        let array = self.analyze_expr(array, None)?;
        let Some(element_ty) = array.ty.element_type().cloned() else {
            return Err(AnalysisError::type_mismatch(
                format!("cannot index into a value of type {}", array.ty),
                array.span,
            ));
        };

        let index = self.analyze_expr(index, None)?;
        if index.ty != Type::Int {
            return Err(AnalysisError::array_index_type(index.ty, index.span));
        }

        // Only constant indices can be checked statically
        if let Some(n) = fold::evaluate(&index).as_ref().and_then(Literal::as_int) {
            let length = match &array.kind {
                ExprKind::Array(elements) => Some(elements.len()),
                _ => None,
            };
            let past_end = length.is_some_and(|len| usize::try_from(n).is_ok_and(|i| i >= len));
            if n < 0 || past_end {
                return Err(AnalysisError::array_index_out_of_range(n, length, index.span));
            }
        }

        Ok(Expr::new(
            ExprKind::Subscript {
                array: Box::new(array),
                index: Box::new(index),
            },
            element_ty,
            expr.span,
        ))
    }
}

fn is_empty_array(expr: &CstExpr) -> bool {
    match &expr.kind {
        CstExprKind::Array(elements) => elements.is_empty(),
        CstExprKind::Paren(inner) => is_empty_array(inner),
        _ => false,
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Re-type a one-character string literal as a Char literal
fn coerce_to_char(expr: Expr) -> Expr {
    match &expr.kind {
        ExprKind::Literal(Literal::String(s)) => match single_char(s) {
            Some(c) => Expr::literal(Literal::Char(c), expr.span),
            None => expr,
        },
        _ => expr,
    }
}

/// Analyze a compilation unit with a fresh analyzer
pub fn analyze(unit: &SourceUnit) -> AnalysisResult<Program> {
    SemanticAnalyzer::new().analyze(unit)
}

//! Type rules for operators, assignment and conditions

use crate::ast::{BinOp, Expr, UnaryOp};
use crate::common::{AnalysisError, AnalysisResult, Span};
use crate::frontend::cst::{TypeAnnotation, TypeAnnotationKind};
use crate::types::Type;

/// Type checker for Baozi expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeChecker;

impl TypeChecker {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a written annotation to its type
    pub fn resolve(&self, annotation: &TypeAnnotation) -> Type {
        match &annotation.kind {
            TypeAnnotationKind::Boolean => Type::Boolean,
            TypeAnnotationKind::Int => Type::Int,
            TypeAnnotationKind::Float => Type::Float,
            TypeAnnotationKind::String => Type::String,
            TypeAnnotationKind::Char => Type::Char,
            TypeAnnotationKind::Array(element) => Type::array_of(self.resolve(element)),
        }
    }

    /// Check if two types match (structural equivalence)
    pub fn types_match(&self, a: &Type, b: &Type) -> bool {
        a.is_equivalent_to(b)
    }

    /// Check if a value of type `source` may be stored in a `target` slot.
    /// There are no implicit conversions, not even Int to Float.
    pub fn is_assignable(&self, target: &Type, source: &Type) -> bool {
        self.types_match(target, source)
    }

    /// Require an expression to be assignable to `target`
    pub fn expect_assignable(&self, target: &Type, source: &Expr) -> AnalysisResult<()> {
        if self.is_assignable(target, &source.ty) {
            Ok(())
        } else {
            Err(AnalysisError::expected_type(target, &source.ty, source.span))
        }
    }

    /// Require a loop or branch test to be Boolean
    pub fn expect_condition(&self, test: &Expr) -> AnalysisResult<()> {
        if test.ty.is_boolean() {
            Ok(())
        } else {
            Err(AnalysisError::non_boolean_condition(test.ty.clone(), test.span))
        }
    }

    /// Get the result type of a binary operation
    pub fn binary_result_type(
        &self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        span: Span,
    ) -> AnalysisResult<Type> {
        if op.is_equality() {
            if !self.types_match(&left.ty, &right.ty) {
                return Err(AnalysisError::type_mismatch(
                    format!("cannot compare {} with {}", left.ty, right.ty),
                    span,
                ));
            }
            return Ok(Type::Boolean);
        }

        if op.is_logical() {
            for operand in [left, right] {
                if !operand.ty.is_boolean() {
                    return Err(AnalysisError::expected_type(
                        &Type::Boolean,
                        &operand.ty,
                        operand.span,
                    ));
                }
            }
            return Ok(Type::Boolean);
        }

        // ordering and arithmetic
        for operand in [left, right] {
            if !operand.ty.is_numeric() {
                return Err(AnalysisError::non_numeric_operand(
                    op.symbol(),
                    operand.ty.clone(),
                    operand.span,
                ));
            }
        }
        if !self.types_match(&left.ty, &right.ty) {
            return Err(AnalysisError::type_mismatch(
                format!(
                    "operator '{}' needs operands of one numeric type, found {} and {}",
                    op.symbol(),
                    left.ty,
                    right.ty
                ),
                span,
            ));
        }

        if op.is_ordering() {
            Ok(Type::Boolean)
        } else {
            Ok(left.ty.clone())
        }
    }

    /// Get the result type of a unary operation
    pub fn unary_result_type(&self, op: UnaryOp, operand: &Expr) -> AnalysisResult<Type> {
        match op {
            UnaryOp::Neg if operand.ty.is_numeric() => Ok(operand.ty.clone()),
            UnaryOp::Neg => Err(AnalysisError::non_numeric_operand(
                op.symbol(),
                operand.ty.clone(),
                operand.span,
            )),
            UnaryOp::Not if operand.ty.is_boolean() => Ok(Type::Boolean),
            UnaryOp::Not => Err(AnalysisError::expected_type(
                &Type::Boolean,
                &operand.ty,
                operand.span,
            )),
        }
    }
}

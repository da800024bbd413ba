//! Local rewrites of operator nodes whose operands are already optimized
//!
//! Rules applied to a binary node, first match wins:
//! - both operands literal: fold to a single literal, or keep the node
//!   when folding is refused
//! - `真 且 x`, `x 且 真`, `假 或 x`, `x 或 假` -> `x`
//! - `x + 0`, `0 + x`, `x - 0`, `x * 1`, `1 * x`, `x ÷ 1` -> `x`
//! - `0 - x` -> `-x`
//! - `x * 0`, `0 * x`, `0 ÷ x` -> `0`
//! - `x ** 0`, `1 ** x` -> `1`

use log::trace;

use super::fold::{fold_binary, fold_unary};
use crate::ast::{BinOp, Expr, Literal, UnaryOp};
use crate::common::Span;
use crate::types::Type;

/// Rebuild a binary node, simplifying it when a rule applies
pub fn simplify_binary(op: BinOp, left: Expr, right: Expr, ty: Type, span: Span) -> Expr {
    if let (Some(l), Some(r)) = (left.as_literal(), right.as_literal()) {
        if let Some(folded) = fold_binary(op, l, r) {
            trace!("folded {} {} {} to {}", l, op, r, folded);
            return Expr::literal(folded, span);
        }
        // Identities need exactly one literal side; an unfoldable pair
        // such as `0 ** 0` or `0 ÷ 0` stays as written
        return Expr::binary(op, left, right, ty, span);
    }

    let l = left.as_literal();
    let r = right.as_literal();
    let is = |lit: Option<&Literal>, pred: fn(&Literal) -> bool| lit.is_some_and(pred);
    let is_true = |lit: Option<&Literal>| lit.and_then(Literal::as_bool) == Some(true);
    let is_false = |lit: Option<&Literal>| lit.and_then(Literal::as_bool) == Some(false);

    let rewritten = match op {
        BinOp::And if is_true(l) => Rewrite::Right,
        BinOp::And if is_true(r) => Rewrite::Left,
        BinOp::Or if is_false(l) => Rewrite::Right,
        BinOp::Or if is_false(r) => Rewrite::Left,

        BinOp::Add if is(r, Literal::is_zero) => Rewrite::Left,
        BinOp::Add if is(l, Literal::is_zero) => Rewrite::Right,
        BinOp::Sub if is(r, Literal::is_zero) => Rewrite::Left,
        BinOp::Sub if is(l, Literal::is_zero) => Rewrite::NegateRight,
        BinOp::Mul if is(r, Literal::is_one) => Rewrite::Left,
        BinOp::Mul if is(l, Literal::is_one) => Rewrite::Right,
        BinOp::Mul if is(l, Literal::is_zero) || is(r, Literal::is_zero) => Rewrite::Zero,
        BinOp::Div if is(r, Literal::is_one) => Rewrite::Left,
        BinOp::Div if is(l, Literal::is_zero) => Rewrite::Zero,
        BinOp::Pow if is(r, Literal::is_zero) || is(l, Literal::is_one) => Rewrite::One,
        _ => Rewrite::Keep,
    };

    match rewritten {
        Rewrite::Left if left.ty == ty => {
            trace!("dropped identity operand of '{}'", op);
            left
        }
        Rewrite::Right if right.ty == ty => {
            trace!("dropped identity operand of '{}'", op);
            right
        }
        Rewrite::NegateRight if right.ty == ty => {
            trace!("rewrote 0 - x to -x");
            simplify_unary(UnaryOp::Neg, right, ty, span)
        }
        Rewrite::Zero => constant(Literal::zero(&ty), op, left, right, ty, span),
        Rewrite::One => constant(Literal::one(&ty), op, left, right, ty, span),
        _ => Expr::binary(op, left, right, ty, span),
    }
}

/// Rebuild a unary node, folding it when its operand is a literal
pub fn simplify_unary(op: UnaryOp, operand: Expr, ty: Type, span: Span) -> Expr {
    if let Some(lit) = operand.as_literal() {
        if let Some(folded) = fold_unary(op, lit) {
            trace!("folded {}{} to {}", op, lit, folded);
            return Expr::literal(folded, span);
        }
    }
    Expr::unary(op, operand, ty, span)
}

enum Rewrite {
    Keep,
    Left,
    Right,
    NegateRight,
    Zero,
    One,
}

/// Replace the node with a constant of its own type
fn constant(
    value: Option<Literal>,
    op: BinOp,
    left: Expr,
    right: Expr,
    ty: Type,
    span: Span,
) -> Expr {
    match value {
        Some(value) => {
            trace!("collapsed '{}' to {}", op, value);
            Expr::literal(value, span)
        }
        None => Expr::binary(op, left, right, ty, span),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ExprKind, Variable};
    use pretty_assertions::assert_eq;

    fn lit(literal: Literal) -> Expr {
        Expr::literal(literal, Span::dummy())
    }

    fn x(ty: Type) -> Expr {
        Expr::variable(Variable::new("x", ty), Span::dummy())
    }

    fn simplify(op: BinOp, left: Expr, right: Expr) -> Expr {
        let ty = if op.is_comparison() || op.is_logical() {
            Type::Boolean
        } else {
            left.ty.clone()
        };
        simplify_binary(op, left, right, ty, Span::dummy())
    }

    #[test]
    fn test_additive_identities() {
        assert_eq!(simplify(BinOp::Add, x(Type::Int), lit(Literal::Int(0))), x(Type::Int));
        assert_eq!(simplify(BinOp::Add, lit(Literal::Int(0)), x(Type::Int)), x(Type::Int));
        assert_eq!(
            simplify(BinOp::Sub, x(Type::Float), lit(Literal::Float(0.0))),
            x(Type::Float)
        );
    }

    #[test]
    fn test_zero_minus_x() {
        let result = simplify(BinOp::Sub, lit(Literal::Int(0)), x(Type::Int));
        assert_eq!(result, Expr::unary(UnaryOp::Neg, x(Type::Int), Type::Int, Span::dummy()));
    }

    #[test]
    fn test_multiplicative_identities() {
        assert_eq!(simplify(BinOp::Mul, x(Type::Int), lit(Literal::Int(1))), x(Type::Int));
        assert_eq!(simplify(BinOp::Mul, lit(Literal::Int(1)), x(Type::Int)), x(Type::Int));
        assert_eq!(
            simplify(BinOp::Div, x(Type::Float), lit(Literal::Float(1.0))),
            x(Type::Float)
        );
        assert_eq!(
            simplify(BinOp::Mul, x(Type::Float), lit(Literal::Float(0.0))),
            lit(Literal::Float(0.0))
        );
        assert_eq!(
            simplify(BinOp::Mul, lit(Literal::Int(0)), x(Type::Int)),
            lit(Literal::Int(0))
        );
        assert_eq!(
            simplify(BinOp::Div, lit(Literal::Int(0)), x(Type::Int)),
            lit(Literal::Int(0))
        );
    }

    #[test]
    fn test_power_identities() {
        assert_eq!(
            simplify(BinOp::Pow, x(Type::Float), lit(Literal::Float(0.0))),
            lit(Literal::Float(1.0))
        );
        assert_eq!(
            simplify(BinOp::Pow, lit(Literal::Int(1)), x(Type::Int)),
            lit(Literal::Int(1))
        );
    }

    #[test]
    fn test_zero_to_the_zero_is_kept() {
        let result = simplify(BinOp::Pow, lit(Literal::Int(0)), lit(Literal::Int(0)));
        assert!(matches!(result.kind, ExprKind::Binary { op: BinOp::Pow, .. }));
        assert_eq!(result.ty, Type::Int);
    }

    #[test]
    fn test_unfoldable_literal_pairs_are_kept() {
        let cases = [
            (BinOp::Div, lit(Literal::Int(0)), lit(Literal::Int(0))),
            (BinOp::Div, lit(Literal::Float(0.0)), lit(Literal::Float(0.0))),
            (BinOp::Pow, lit(Literal::Float(0.0)), lit(Literal::Float(0.0))),
            (BinOp::Pow, lit(Literal::Int(1)), lit(Literal::Int(-1))),
        ];
        for (op, left, right) in cases {
            let ty = left.ty.clone();
            let result = simplify(op, left, right);
            assert!(
                matches!(result.kind, ExprKind::Binary { op: kept, .. } if kept == op),
                "{} was rewritten to {:?}",
                op,
                result
            );
            assert_eq!(result.ty, ty);
        }

        // exact in i64, so this one folds
        assert_eq!(
            simplify(BinOp::Mul, lit(Literal::Int(i64::MAX)), lit(Literal::Int(0))),
            lit(Literal::Int(0))
        );
    }

    #[test]
    fn test_boolean_identities() {
        let flag = || x(Type::Boolean);
        let t = || lit(Literal::Boolean(true));
        let f = || lit(Literal::Boolean(false));
        assert_eq!(simplify(BinOp::And, t(), flag()), flag());
        assert_eq!(simplify(BinOp::And, flag(), t()), flag());
        assert_eq!(simplify(BinOp::Or, f(), flag()), flag());
        assert_eq!(simplify(BinOp::Or, flag(), f()), flag());

        // no short-circuit collapse beyond these four
        let kept = simplify(BinOp::And, f(), flag());
        assert!(matches!(kept.kind, ExprKind::Binary { op: BinOp::And, .. }));
    }

    #[test]
    fn test_literal_operands_fold() {
        assert_eq!(
            simplify(BinOp::Gt, lit(Literal::Float(0.5)), lit(Literal::Float(0.25))),
            lit(Literal::Boolean(true))
        );
        assert_eq!(
            simplify(BinOp::And, lit(Literal::Boolean(true)), lit(Literal::Boolean(false))),
            lit(Literal::Boolean(false))
        );
    }

    #[test]
    fn test_unary_fold() {
        let folded = simplify_unary(
            UnaryOp::Not,
            lit(Literal::Boolean(true)),
            Type::Boolean,
            Span::dummy(),
        );
        assert_eq!(folded, lit(Literal::Boolean(false)));

        let kept = simplify_unary(UnaryOp::Neg, x(Type::Int), Type::Int, Span::dummy());
        assert!(matches!(kept.kind, ExprKind::Unary { .. }));
    }
}

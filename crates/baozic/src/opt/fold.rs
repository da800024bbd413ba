//! Constant evaluation of operators over literals
//!
//! Every function here returns `None` when the operation cannot be
//! evaluated without changing what the program means at run time: integer
//! overflow, division or remainder by zero, a negative integer exponent,
//! an inexact integer quotient, `0 ** 0`, or a Float result that is not
//! finite. The caller then keeps the operation as written.

use crate::ast::{BinOp, Expr, ExprKind, Literal, UnaryOp};

/// Evaluate `left op right`
pub fn fold_binary(op: BinOp, left: &Literal, right: &Literal) -> Option<Literal> {
    match (left, right) {
        (Literal::Int(a), Literal::Int(b)) => fold_int(op, *a, *b),
        (Literal::Float(a), Literal::Float(b)) => fold_float(op, *a, *b),
        (Literal::Boolean(a), Literal::Boolean(b)) => match op {
            BinOp::And => Some(Literal::Boolean(*a && *b)),
            BinOp::Or => Some(Literal::Boolean(*a || *b)),
            _ => None,
        },
        _ => None,
    }
}

/// Evaluate `op operand`
pub fn fold_unary(op: UnaryOp, operand: &Literal) -> Option<Literal> {
    match (op, operand) {
        (UnaryOp::Neg, Literal::Int(n)) => n.checked_neg().map(Literal::Int),
        (UnaryOp::Neg, Literal::Float(x)) => Some(Literal::Float(-x)),
        (UnaryOp::Not, Literal::Boolean(b)) => Some(Literal::Boolean(!b)),
        _ => None,
    }
}

/// The constant value of an expression built only from literals and
/// operators, if it has one
pub fn evaluate(expr: &Expr) -> Option<Literal> {
    match &expr.kind {
        ExprKind::Literal(literal) => Some(literal.clone()),
        ExprKind::Unary { op, operand } => fold_unary(*op, &evaluate(operand)?),
        ExprKind::Binary { op, left, right } => {
            fold_binary(*op, &evaluate(left)?, &evaluate(right)?)
        }
        ExprKind::Array(_) | ExprKind::Subscript { .. } | ExprKind::Variable(_) => None,
    }
}

fn compare<T: PartialOrd>(op: BinOp, a: T, b: T) -> Option<Literal> {
    let result = match op {
        BinOp::Eq => a == b,
        BinOp::Ne => a != b,
        BinOp::Lt => a < b,
        BinOp::Le => a <= b,
        BinOp::Gt => a > b,
        BinOp::Ge => a >= b,
        _ => return None,
    };
    Some(Literal::Boolean(result))
}

fn fold_int(op: BinOp, a: i64, b: i64) -> Option<Literal> {
    let value = match op {
        BinOp::Add => a.checked_add(b)?,
        BinOp::Sub => a.checked_sub(b)?,
        BinOp::Mul => a.checked_mul(b)?,
        // The target divides Ints to a fractional result, so only exact
        // quotients stay Int
        BinOp::Div => {
            if a.checked_rem(b)? != 0 {
                return None;
            }
            a.checked_div(b)?
        }
        BinOp::Rem => a.checked_rem(b)?,
        BinOp::Pow => {
            if a == 0 && b == 0 {
                return None;
            }
            a.checked_pow(u32::try_from(b).ok()?)?
        }
        BinOp::And | BinOp::Or => return None,
        _ => return compare(op, a, b),
    };
    Some(Literal::Int(value))
}

fn fold_float(op: BinOp, a: f64, b: f64) -> Option<Literal> {
    let value = match op {
        BinOp::Add => a + b,
        BinOp::Sub => a - b,
        BinOp::Mul => a * b,
        BinOp::Div => a / b,
        BinOp::Rem => a % b,
        BinOp::Pow => {
            if a == 0.0 && b == 0.0 {
                return None;
            }
            a.powf(b)
        }
        BinOp::And | BinOp::Or => return None,
        _ => return compare(op, a, b),
    };
    value.is_finite().then_some(Literal::Float(value))
}

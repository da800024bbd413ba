//! Typed expression nodes

use super::{BinOp, UnaryOp};
use crate::common::Span;
use crate::types::Type;

/// A declared variable: its name, its (immutable) declared type and an id
/// that is unique among the declarations of one program. Every reference
/// carries the id of the declaration it resolved to, so two declarations
/// that share a name stay distinct after branches are spliced together.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
    pub id: usize,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            id: 0,
        }
    }

    pub fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    /// Name that is unique within the program, e.g. `y_2`
    pub fn unique_name(&self) -> String {
        format!("{}_{}", self.name, self.id)
    }
}

/// A constant value, tagged with its primitive kind
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Char(char),
}

impl Literal {
    pub fn ty(&self) -> Type {
        match self {
            Literal::Boolean(_) => Type::Boolean,
            Literal::Int(_) => Type::Int,
            Literal::Float(_) => Type::Float,
            Literal::String(_) => Type::String,
            Literal::Char(_) => Type::Char,
        }
    }

    /// The numeric zero of the given type
    pub fn zero(ty: &Type) -> Option<Self> {
        match ty {
            Type::Int => Some(Literal::Int(0)),
            Type::Float => Some(Literal::Float(0.0)),
            _ => None,
        }
    }

    /// The numeric one of the given type
    pub fn one(ty: &Type) -> Option<Self> {
        match ty {
            Type::Int => Some(Literal::Int(1)),
            Type::Float => Some(Literal::Float(1.0)),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Literal::Int(n) => *n == 0,
            Literal::Float(x) => *x == 0.0,
            _ => false,
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Literal::Int(n) => *n == 1,
            Literal::Float(x) => *x == 1.0,
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Boolean(true) => write!(f, "真"),
            Literal::Boolean(false) => write!(f, "假"),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(x) => write!(f, "{:?}", x),
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Char(c) => write!(f, "{:?}", c),
        }
    }
}

/// A typed expression
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Type,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, ty: Type, span: Span) -> Self {
        Self { kind, ty, span }
    }

    /// A literal node; its type is the literal's own tag
    pub fn literal(literal: Literal, span: Span) -> Self {
        let ty = literal.ty();
        Self::new(ExprKind::Literal(literal), ty, span)
    }

    /// A reference to a declared variable
    pub fn variable(variable: Variable, span: Span) -> Self {
        let ty = variable.ty.clone();
        Self::new(ExprKind::Variable(variable), ty, span)
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr, ty: Type, span: Span) -> Self {
        Self::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            ty,
            span,
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr, ty: Type, span: Span) -> Self {
        Self::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            ty,
            span,
        )
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match &self.kind {
            ExprKind::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.as_literal().is_some()
    }

    /// Visit this expression and all of its sub-expressions, pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Expr)) {
        visit(self);
        match &self.kind {
            ExprKind::Binary { left, right, .. } => {
                left.walk(visit);
                right.walk(visit);
            }
            ExprKind::Unary { operand, .. } => operand.walk(visit),
            ExprKind::Array(elements) => {
                for element in elements {
                    element.walk(visit);
                }
            }
            ExprKind::Subscript { array, index } => {
                array.walk(visit);
                index.walk(visit);
            }
            ExprKind::Literal(_) | ExprKind::Variable(_) => {}
        }
    }
}

/// Expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `left op right`
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `op operand`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `[a, b, c]`
    Array(Vec<Expr>),
    /// `array[index]`
    Subscript { array: Box<Expr>, index: Box<Expr> },
    Literal(Literal),
    /// Reference to a declared variable
    Variable(Variable),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_carries_its_own_type() {
        assert_eq!(Expr::literal(Literal::Int(7), Span::dummy()).ty, Type::Int);
        assert_eq!(Expr::literal(Literal::Float(7.0), Span::dummy()).ty, Type::Float);
        assert_eq!(Expr::literal(Literal::Char('p'), Span::dummy()).ty, Type::Char);
    }

    #[test]
    fn test_walk_is_preorder() {
        let x = Expr::variable(Variable::new("x", Type::Int), Span::dummy());
        let one = Expr::literal(Literal::Int(1), Span::dummy());
        let sum = Expr::binary(BinOp::Add, x, one, Type::Int, Span::dummy());

        let mut seen = Vec::new();
        sum.walk(&mut |e| seen.push(e.is_literal()));
        assert_eq!(seen, vec![false, false, true]);
    }

    #[test]
    fn test_unique_name() {
        let y = Variable::new("y", Type::Int).with_id(2);
        assert_eq!(y.unique_name(), "y_2");
        assert_ne!(y, Variable::new("y", Type::Int).with_id(3));
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::Float(0.625).to_string(), "0.625");
        assert_eq!(Literal::Float(13.0).to_string(), "13.0");
        assert_eq!(Literal::Boolean(true).to_string(), "真");
        assert_eq!(Literal::String("狗".into()).to_string(), "\"狗\"");
    }
}

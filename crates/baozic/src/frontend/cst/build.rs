//! Terse CST construction for tests. All spans are dummies.

use super::*;

pub fn unit(statements: Vec<CstStmt>) -> SourceUnit {
    SourceUnit::new(statements, Span::dummy())
}

fn ty(kind: TypeAnnotationKind) -> TypeAnnotation {
    TypeAnnotation::new(kind, Span::dummy())
}

pub fn bool_ty() -> TypeAnnotation {
    ty(TypeAnnotationKind::Boolean)
}

pub fn int_ty() -> TypeAnnotation {
    ty(TypeAnnotationKind::Int)
}

pub fn float_ty() -> TypeAnnotation {
    ty(TypeAnnotationKind::Float)
}

pub fn string_ty() -> TypeAnnotation {
    ty(TypeAnnotationKind::String)
}

pub fn char_ty() -> TypeAnnotation {
    ty(TypeAnnotationKind::Char)
}

pub fn array_ty(element: TypeAnnotation) -> TypeAnnotation {
    ty(TypeAnnotationKind::Array(Box::new(element)))
}

fn stmt(kind: CstStmtKind) -> CstStmt {
    CstStmt::new(kind, Span::dummy())
}

fn block(statements: Vec<CstStmt>) -> Block {
    Block::new(statements, Span::dummy())
}

pub fn var_dec(ty: TypeAnnotation, name: &str, initializer: CstExpr) -> CstStmt {
    stmt(CstStmtKind::VarDec {
        ty,
        name: Ident::new(name, Span::dummy()),
        initializer,
    })
}

pub fn assign(target: &str, source: CstExpr) -> CstStmt {
    stmt(CstStmtKind::Assign {
        target: Ident::new(target, Span::dummy()),
        source,
    })
}

pub fn print(argument: CstExpr) -> CstStmt {
    stmt(CstStmtKind::Print { argument })
}

pub fn while_loop(test: CstExpr, body: Vec<CstStmt>) -> CstStmt {
    stmt(CstStmtKind::While {
        test,
        body: block(body),
    })
}

pub fn for_loop(test: CstExpr, body: Vec<CstStmt>) -> CstStmt {
    stmt(CstStmtKind::For {
        test,
        body: block(body),
    })
}

pub fn if_then(test: CstExpr, consequent: Vec<CstStmt>) -> CstStmt {
    stmt(CstStmtKind::If {
        test,
        consequent: block(consequent),
        alternate: None,
    })
}

pub fn if_else(test: CstExpr, consequent: Vec<CstStmt>, alternate: Vec<CstStmt>) -> CstStmt {
    stmt(CstStmtKind::If {
        test,
        consequent: block(consequent),
        alternate: Some(block(alternate)),
    })
}

pub fn breathing() -> CstStmt {
    stmt(CstStmtKind::Breathing)
}

pub fn ret(argument: CstExpr) -> CstStmt {
    stmt(CstStmtKind::Return { argument })
}

fn expr(kind: CstExprKind) -> CstExpr {
    CstExpr::new(kind, Span::dummy())
}

pub fn int(value: i64) -> CstExpr {
    expr(CstExprKind::Int(value))
}

pub fn float(value: f64) -> CstExpr {
    expr(CstExprKind::Float(value))
}

pub fn string(value: &str) -> CstExpr {
    expr(CstExprKind::Str(value.to_string()))
}

pub fn chr(value: char) -> CstExpr {
    expr(CstExprKind::Char(value))
}

pub fn boolean(value: bool) -> CstExpr {
    expr(CstExprKind::Bool(value))
}

pub fn ident(name: &str) -> CstExpr {
    expr(CstExprKind::Identifier(name.to_string()))
}

/// Binary expression from an operator token, e.g. `bin("≤", a, b)`
pub fn bin(symbol: &str, left: CstExpr, right: CstExpr) -> CstExpr {
    let op = BinOp::from_symbol(symbol).expect("unknown binary operator in test");
    expr(CstExprKind::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn neg(operand: CstExpr) -> CstExpr {
    expr(CstExprKind::Unary {
        op: UnaryOp::Neg,
        operand: Box::new(operand),
    })
}

pub fn not(operand: CstExpr) -> CstExpr {
    expr(CstExprKind::Unary {
        op: UnaryOp::Not,
        operand: Box::new(operand),
    })
}

pub fn paren(inner: CstExpr) -> CstExpr {
    expr(CstExprKind::Paren(Box::new(inner)))
}

pub fn array(elements: Vec<CstExpr>) -> CstExpr {
    expr(CstExprKind::Array(elements))
}

pub fn index(array: CstExpr, index: CstExpr) -> CstExpr {
    expr(CstExprKind::Subscript {
        array: Box::new(array),
        index: Box::new(index),
    })
}

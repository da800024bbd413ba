//! Front-end stages that run after parsing
//!
//! - `cst`: the concrete syntax tree handed over by the parser
//! - `sema`: scope resolution and type checking, producing the typed AST

pub mod cst;
pub mod sema;

pub use cst::SourceUnit;
pub use sema::{SemanticAnalyzer, analyze};

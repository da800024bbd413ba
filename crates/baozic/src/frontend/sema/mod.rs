//! Semantic analysis module
//!
//! This module resolves identifiers against a scope chain and performs type
//! checking, turning the CST into the typed AST.

mod analyzer;
mod scope;
mod types;

pub use analyzer::{SemanticAnalyzer, analyze};
pub use scope::Scope;
pub use types::TypeChecker;

//! Baozi compiler core - semantic analysis and tree optimization
//!
//! This library takes the concrete syntax tree of a Baozi program, checks
//! it against the language's scoping and typing rules, and produces a typed
//! AST that a code generator can consume. An optional optimizer rewrites
//! the typed AST without changing its meaning or any node's type.
//!
//! ## Architecture
//!
//! - **Common** (`common/`): errors, diagnostics and spans
//! - **Types** (`types/`): the static type lattice
//! - **AST** (`ast/`): the typed program tree
//! - **Frontend** (`frontend/`): the CST and the semantic analyzer
//! - **Optimizer** (`opt/`): constant folding and algebraic simplification
//! - **Driver** (`driver/`): pipeline orchestration and configuration

pub mod ast;
pub mod common;
pub mod driver;
pub mod frontend;
pub mod opt;
pub mod types;

// Re-exports for convenience
pub use ast::Program;
pub use common::{AnalysisError, AnalysisResult, DiagnosticReporter, ErrorKind, Span};
pub use driver::{CompileConfig, Pipeline};
pub use frontend::{SemanticAnalyzer, SourceUnit, analyze};
pub use opt::optimize;
pub use types::Type;

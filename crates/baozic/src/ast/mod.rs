//! Typed program tree
//!
//! Produced by the semantic analyzer, rewritten by the optimizer and walked
//! by a code generator. Every expression node carries its resolved type.

mod expr;
mod ops;
mod stmt;

pub use expr::*;
pub use ops::*;
pub use stmt::*;

//! Common infrastructure shared by the analyzer, optimizer and driver

mod error;
mod span;

pub use error::{AnalysisError, AnalysisResult, DiagnosticReporter, ErrorKind};
pub use span::Span;

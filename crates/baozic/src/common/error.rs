//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{self, SimpleFiles};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{Buffer, ColorChoice, StandardStream};
use thiserror::Error;

use super::Span;
use crate::types::Type;

/// Error raised by semantic analysis, with the span of the offending node
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("identifier '{name}' already declared")]
    DuplicateDeclaration { name: String, span: Span },

    #[error("identifier '{name}' not declared")]
    UndeclaredIdentifier { name: String, span: Span },

    #[error("type mismatch: {message}")]
    TypeMismatch { message: String, span: Span },

    #[error("condition must be Boolean, found {found}")]
    NonBooleanCondition { found: Type, span: Span },

    #[error("operator '{op}' expects numeric operands, found {found}")]
    NonNumericOperand { op: String, found: Type, span: Span },

    #[error("array elements must share one type: expected {expected}, found {found}")]
    HeterogeneousArrayElement {
        expected: Type,
        found: Type,
        span: Span,
    },

    #[error("array index must be Int, found {found}")]
    ArrayIndexTypeError { found: Type, span: Span },

    #[error("array index {index} is out of range{}", length_note(.length))]
    ArrayIndexOutOfRange {
        index: i64,
        length: Option<usize>,
        span: Span,
    },

    #[error("return is only allowed inside a while, for or if body")]
    MisplacedReturn { span: Span },
}

fn length_note(length: &Option<usize>) -> String {
    match length {
        Some(len) => format!(" for an array of length {}", len),
        None => String::new(),
    }
}

/// The error taxonomy, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateDeclaration,
    UndeclaredIdentifier,
    TypeMismatch,
    NonBooleanCondition,
    NonNumericOperand,
    HeterogeneousArrayElement,
    ArrayIndexTypeError,
    ArrayIndexOutOfRange,
    MisplacedReturn,
}

impl ErrorKind {
    /// Stable name, used as the diagnostic code
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateDeclaration => "DuplicateDeclaration",
            ErrorKind::UndeclaredIdentifier => "UndeclaredIdentifier",
            ErrorKind::TypeMismatch => "TypeMismatch",
            ErrorKind::NonBooleanCondition => "NonBooleanCondition",
            ErrorKind::NonNumericOperand => "NonNumericOperand",
            ErrorKind::HeterogeneousArrayElement => "HeterogeneousArrayElement",
            ErrorKind::ArrayIndexTypeError => "ArrayIndexTypeError",
            ErrorKind::ArrayIndexOutOfRange => "ArrayIndexOutOfRange",
            ErrorKind::MisplacedReturn => "MisplacedReturn",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateDeclaration | ErrorKind::UndeclaredIdentifier => "Scope error",
            ErrorKind::MisplacedReturn => "Semantic error",
            _ => "Type error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl AnalysisError {
    pub fn duplicate_declaration(name: impl Into<String>, span: Span) -> Self {
        Self::DuplicateDeclaration {
            name: name.into(),
            span,
        }
    }

    pub fn undeclared_identifier(name: impl Into<String>, span: Span) -> Self {
        Self::UndeclaredIdentifier {
            name: name.into(),
            span,
        }
    }

    pub fn type_mismatch(message: impl Into<String>, span: Span) -> Self {
        Self::TypeMismatch {
            message: message.into(),
            span,
        }
    }

    /// The usual "expected X, found Y" mismatch
    pub fn expected_type(expected: &Type, found: &Type, span: Span) -> Self {
        Self::type_mismatch(format!("expected {}, found {}", expected, found), span)
    }

    pub fn non_boolean_condition(found: Type, span: Span) -> Self {
        Self::NonBooleanCondition { found, span }
    }

    pub fn non_numeric_operand(op: impl Into<String>, found: Type, span: Span) -> Self {
        Self::NonNumericOperand {
            op: op.into(),
            found,
            span,
        }
    }

    pub fn heterogeneous_array_element(expected: Type, found: Type, span: Span) -> Self {
        Self::HeterogeneousArrayElement {
            expected,
            found,
            span,
        }
    }

    pub fn array_index_type(found: Type, span: Span) -> Self {
        Self::ArrayIndexTypeError { found, span }
    }

    pub fn array_index_out_of_range(index: i64, length: Option<usize>, span: Span) -> Self {
        Self::ArrayIndexOutOfRange {
            index,
            length,
            span,
        }
    }

    pub fn misplaced_return(span: Span) -> Self {
        Self::MisplacedReturn { span }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateDeclaration { .. } => ErrorKind::DuplicateDeclaration,
            Self::UndeclaredIdentifier { .. } => ErrorKind::UndeclaredIdentifier,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::NonBooleanCondition { .. } => ErrorKind::NonBooleanCondition,
            Self::NonNumericOperand { .. } => ErrorKind::NonNumericOperand,
            Self::HeterogeneousArrayElement { .. } => ErrorKind::HeterogeneousArrayElement,
            Self::ArrayIndexTypeError { .. } => ErrorKind::ArrayIndexTypeError,
            Self::ArrayIndexOutOfRange { .. } => ErrorKind::ArrayIndexOutOfRange,
            Self::MisplacedReturn { .. } => ErrorKind::MisplacedReturn,
        }
    }

    /// The human-readable message, without the kind
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn span(&self) -> Span {
        match self {
            Self::DuplicateDeclaration { span, .. }
            | Self::UndeclaredIdentifier { span, .. }
            | Self::TypeMismatch { span, .. }
            | Self::NonBooleanCondition { span, .. }
            | Self::NonNumericOperand { span, .. }
            | Self::HeterogeneousArrayElement { span, .. }
            | Self::ArrayIndexTypeError { span, .. }
            | Self::ArrayIndexOutOfRange { span, .. }
            | Self::MisplacedReturn { span } => *span,
        }
    }

    /// Extra note shown under the diagnostic, if any
    fn note(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateDeclaration { .. } => {
                Some("names may not be redeclared anywhere in the enclosing scope chain")
            }
            Self::HeterogeneousArrayElement { .. } => {
                Some("all elements of an array literal must have the same type")
            }
            _ => None,
        }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    /// Build the codespan diagnostic for an analysis error
    pub fn diagnostic(&self, file_id: usize, error: &AnalysisError) -> Diagnostic<usize> {
        let kind = error.kind();
        let span = error.span();
        let diagnostic = Diagnostic::error()
            .with_message(kind.title())
            .with_code(kind.name())
            .with_labels(vec![
                Label::primary(file_id, span.start..span.end).with_message(error.to_string()),
            ]);

        match error.note() {
            Some(note) => diagnostic.with_notes(vec![note.to_string()]),
            None => diagnostic,
        }
    }

    /// Print the error to stderr
    pub fn report_error(&self, file_id: usize, error: &AnalysisError) {
        let diagnostic = self.diagnostic(file_id, error);
        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }

    /// Render the error without colors
    pub fn render(&self, file_id: usize, error: &AnalysisError) -> Result<String, files::Error> {
        let diagnostic = self.diagnostic(file_id, error);
        let mut buffer = Buffer::no_color();
        term::emit(&mut buffer, &self.config, &self.files, &diagnostic)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_span() {
        let error = AnalysisError::duplicate_declaration("个数", Span::new(14, 20));
        assert_eq!(error.kind(), ErrorKind::DuplicateDeclaration);
        assert_eq!(error.span(), Span::new(14, 20));
        assert_eq!(error.kind().name(), "DuplicateDeclaration");
        assert_eq!(error.message(), "identifier '个数' already declared");
    }

    #[test]
    fn test_messages() {
        let error = AnalysisError::expected_type(&Type::Int, &Type::Float, Span::dummy());
        assert_eq!(error.to_string(), "type mismatch: expected Int, found Float");

        let error = AnalysisError::array_index_out_of_range(5, Some(2), Span::dummy());
        assert_eq!(
            error.to_string(),
            "array index 5 is out of range for an array of length 2"
        );

        let error = AnalysisError::array_index_out_of_range(-1, None, Span::dummy());
        assert_eq!(error.to_string(), "array index -1 is out of range");
    }

    #[test]
    fn test_render_points_at_source() {
        let source = "整数 个数 = 1; 小数 个数 = 1.5;";
        let mut reporter = DiagnosticReporter::new();
        let file_id = reporter.add_file("test.bz", source);

        // byte range of the second `个数`
        let start = source.rfind("个数").unwrap();
        let error = AnalysisError::duplicate_declaration("个数", Span::new(start, start + "个数".len()));

        let rendered = reporter.render(file_id, &error).unwrap();
        assert!(rendered.contains("error[DuplicateDeclaration]"));
        assert!(rendered.contains("identifier '个数' already declared"));
        assert!(rendered.contains("test.bz"));
    }
}

use global_common::{LineIndex, Span, Spanned};
use std::fmt;
use thiserror::Error;

/// Failure of one file's conversion. Approximated constructs are never
/// errors; they are reported as [Diagnostic](crate::Diagnostic)s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The source does not parse.
    #[error("{line}:{column}: {message}")]
    ParseFailure {
        span: Span,
        line: usize,
        column: usize,
        message: String,
    },

    /// An option value outside of its domain.
    #[error("invalid value `{value}` for option `{option}`")]
    InvalidOption { option: &'static str, value: String },

    /// The printer failed to write the output.
    #[error("failed to print the converted program")]
    Print,
}

impl ConvertError {
    pub(crate) fn parse_failure(src: &str, err: &parser::error::Error) -> Self {
        let span = err.span();
        let pos = LineIndex::new(src).line_col(src, span.lo);
        ConvertError::ParseFailure {
            span,
            line: pos.line,
            column: pos.col,
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid_option(option: &'static str, value: impl Into<String>) -> Self {
        ConvertError::InvalidOption {
            option,
            value: value.into(),
        }
    }
}

impl From<fmt::Error> for ConvertError {
    fn from(_: fmt::Error) -> Self {
        ConvertError::Print
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parser::Syntax;

    #[test]
    fn parse_failure_points_at_the_error() {
        let src = "const a = 1;\nconst = 2;";
        let err = match parser::parse(src, Syntax::default()) {
            Err(err) => ConvertError::parse_failure(src, &err),
            Ok(..) => panic!("should not parse"),
        };
        match err {
            ConvertError::ParseFailure { line, .. } => assert_eq!(line, 2),
            err => panic!("{:?}", err),
        }
    }
}

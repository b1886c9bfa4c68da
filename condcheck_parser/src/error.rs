//! Parse error types

use crate::span::{SourceMap, Span};
use thiserror::Error;

/// Parse error type
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    /// Unexpected token
    #[error("unexpected token '{found}' at {span:?}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        span: Span,
    },

    /// Unexpected end of input
    #[error("unexpected end of input at {span:?}, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    /// Indentation increased where no block was expected
    #[error("unexpected indent at {span:?}")]
    UnexpectedIndent { span: Span },

    /// Dedent to an indentation level that was never on the stack
    #[error("unindent does not match any outer indentation level at {span:?}")]
    InconsistentDedent { span: Span },

    /// Statement form the parser does not support
    #[error("unsupported statement '{keyword}' at {span:?}")]
    UnsupportedStatement { keyword: String, span: Span },

    /// Invalid syntax
    #[error("{message} at {span:?}")]
    InvalidSyntax { message: String, span: Span },

    /// Lexer error
    #[error("unrecognized token at {span:?}")]
    LexerError { span: Span },
}

impl ParseError {
    /// Get the span of the error
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } => *span,
            ParseError::UnexpectedEof { span, .. } => *span,
            ParseError::UnexpectedIndent { span } => *span,
            ParseError::InconsistentDedent { span } => *span,
            ParseError::UnsupportedStatement { span, .. } => *span,
            ParseError::InvalidSyntax { span, .. } => *span,
            ParseError::LexerError { span } => *span,
        }
    }

    /// Create an unexpected token error
    pub fn unexpected_token(
        found: impl Into<String>,
        expected: impl Into<String>,
        span: Span,
    ) -> Self {
        ParseError::UnexpectedToken {
            found: found.into(),
            expected: expected.into(),
            span,
        }
    }

    /// Create an unexpected EOF error
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedEof {
            expected: expected.into(),
            span,
        }
    }

    /// Create an invalid syntax error
    pub fn invalid_syntax(message: impl Into<String>, span: Span) -> Self {
        ParseError::InvalidSyntax {
            message: message.into(),
            span,
        }
    }

    /// Format error with source context
    ///
    /// Returns a string showing the source line with an error marker.
    pub fn format_with_context(&self, source: &str) -> String {
        let span = self.span();
        let map = SourceMap::new(source);
        let pos = map.line_col(span.start);

        let Some(line) = source.lines().nth(pos.line - 1) else {
            return String::new();
        };

        let col = pos.column - 1;
        let len = span.len().max(1);
        let spaces = " ".repeat(col);
        let marker = "^".repeat(len.min(line.len().saturating_sub(col)).max(1));

        format!(
            "  {} | {}\n  {} | {}{}",
            pos.line,
            line,
            " ".repeat(pos.line.to_string().len()),
            spaces,
            marker
        )
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Collection of parse errors for error recovery
#[derive(Debug, Default)]
pub struct ParseErrors {
    errors: Vec<ParseError>,
}

impl ParseErrors {
    /// Create a new empty error collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error
    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Get the first error
    pub fn first(&self) -> Option<&ParseError> {
        self.errors.first()
    }

    /// Iterate over errors
    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter()
    }

    /// Format all errors as a single message
    pub fn format_all(&self, source: &str) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        self.errors
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let context = e.format_with_context(source);
                format!("Error {}: {}\n{}", i + 1, e, context)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token() {
        let err = ParseError::unexpected_token("foo", "bar", Span::new(0, 3));

        assert_eq!(err.span(), Span::new(0, 3));
        assert!(err.to_string().contains("foo"));
        assert!(err.to_string().contains("bar"));
    }

    #[test]
    fn test_parse_errors() {
        let mut errors = ParseErrors::new();
        assert!(errors.is_empty());

        errors.push(ParseError::unexpected_token("a", "b", Span::new(0, 1)));
        errors.push(ParseError::unexpected_eof("newline", Span::new(10, 10)));

        assert_eq!(errors.len(), 2);
        assert!(!errors.is_empty());
        assert!(errors.first().is_some());
    }

    #[test]
    fn test_format_with_context() {
        let source = "if x >\nprint(1)";
        let err = ParseError::unexpected_eof("expression", Span::new(6, 6));

        let context = err.format_with_context(source);
        assert!(context.contains("if x >"));
        assert!(context.contains("^"));
    }

    #[test]
    fn test_format_all() {
        let source = "if >\nwhile >\n";
        let mut errors = ParseErrors::new();
        errors.push(ParseError::unexpected_token(">", "expression", Span::new(3, 4)));
        errors.push(ParseError::unexpected_token(">", "expression", Span::new(11, 12)));

        let formatted = errors.format_all(source);
        assert!(formatted.contains("Error 1:"));
        assert!(formatted.contains("Error 2:"));
    }
}

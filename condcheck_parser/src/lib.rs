//! condcheck_parser
//!
//! Pure Rust parser for a Python subset, producing a spanned AST suitable
//! for static condition analysis. Layout (INDENT/DEDENT), implicit line
//! joining, and error recovery are handled so that realistic files parse
//! even when individual statements fall outside the subset.
//!
//! # Example
//!
//! ```
//! use condcheck_parser::{parse, NodeKind};
//!
//! let source = "if x > 1:\n    pass\n";
//! let (module, errors) = parse(source);
//!
//! assert!(errors.is_empty());
//! assert_eq!(module.kind, NodeKind::Module);
//! assert_eq!(module.children[0].kind, NodeKind::IfStatement);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod node_kind;
pub mod parser;
pub mod span;
pub mod token;

// Re-exports
pub use ast::{AstNode, AstWalker};
pub use error::{ParseError, ParseErrors, ParseResult};
pub use lexer::{Lexer, SpannedToken};
pub use node_kind::NodeKind;
pub use parser::Parser;
pub use span::{LineCol, SourceMap, Span};
pub use token::{Associativity, Precedence, Token};

/// Parse source code with error recovery
///
/// Returns a `Module` node even if there are parse errors, along with the
/// list of errors.
pub fn parse(source: &str) -> (AstNode, ParseErrors) {
    parser::parse(source)
}

/// Tokenize source code
///
/// Returns a vector of tokens with their spans, including the synthesized
/// layout tokens.
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken<'_>, ParseError>> {
    lexer::tokenize(source)
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let (module, errors) = parse("");
        assert!(errors.is_empty());
        assert_eq!(module.kind, NodeKind::Module);
        assert!(module.children.is_empty());
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("1 < 2");
        // 1, <, 2, synthetic newline
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

//! condcheck
//!
//! Flags `if`/`elif` conditions whose boolean value is fixed at parse time:
//! boolean literals, and comparisons between numeric literals (optionally
//! negated), evaluated with exact arithmetic.
//!
//! The evaluator itself is a pure function library behind the
//! [`ConditionExpr`] trait; [`inspect_source`] wires it to the bundled
//! Python-subset parser.
//!
//! # Example
//!
//! ```
//! use condcheck::inspect_source;
//!
//! let (findings, errors) = inspect_source("if 2 < 3:\n    pass\n");
//!
//! assert!(errors.is_empty());
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].message, "The condition is always true");
//! ```

pub mod evaluate;
pub mod inspection;
pub mod operators;
pub mod report;
pub mod value;

// Re-exports
pub use evaluate::{evaluate_condition, numeric_operand, ConditionExpr, ConditionVerdict, ExprShape};
pub use inspection::{check_condition, condition_message, inspect_module, inspect_source, Finding};
pub use operators::ComparisonOperator;
pub use report::{render_finding, render_findings_json};
pub use value::{ConstantKind, DecimalValue, NumericConstant};

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_source_smoke() {
        let (findings, errors) = inspect_source("if True:\n    pass\n");
        assert!(errors.is_empty());
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

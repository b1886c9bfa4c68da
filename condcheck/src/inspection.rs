//! The constant-condition inspection
//!
//! Walks a parsed module, evaluates every `if`/`elif` condition, and turns
//! non-Unknown verdicts into findings. `else` clauses have no condition and
//! nested sub-expressions are never evaluated on their own.

use condcheck_parser::{AstNode, NodeKind, ParseErrors, Span};
use serde::Serialize;

use crate::evaluate::{evaluate_condition, ConditionExpr, ConditionVerdict, ExprShape};

impl ConditionExpr for AstNode {
    fn shape(&self) -> ExprShape<'_, AstNode> {
        match self.kind {
            NodeKind::BooleanLiteral => {
                ExprShape::BooleanLiteral(self.text_str() == Some("True"))
            }
            NodeKind::IntegerLiteral => match self.text_str() {
                Some(text) => ExprShape::NumericLiteral {
                    text,
                    is_integer: true,
                },
                None => ExprShape::Other,
            },
            NodeKind::FloatLiteral => match self.text_str() {
                Some(text) => ExprShape::NumericLiteral {
                    text,
                    is_integer: false,
                },
                None => ExprShape::Other,
            },
            NodeKind::UnaryExpression => {
                let operator = self
                    .child_by_field("operator")
                    .and_then(|op| op.text_str());
                let operand = self.child_by_field("operand");
                match (operator, operand) {
                    (Some(operator), Some(operand)) => ExprShape::Prefix { operator, operand },
                    _ => ExprShape::Other,
                }
            }
            NodeKind::BinaryExpression => {
                let operator = self
                    .child_by_field("operator")
                    .and_then(|op| op.text_str());
                let left = self.child_by_field("left");
                let right = self.child_by_field("right");
                match (operator, left, right) {
                    (Some(operator), Some(left), Some(right)) => ExprShape::Binary {
                        operator,
                        left,
                        right,
                    },
                    _ => ExprShape::Other,
                }
            }
            _ => ExprShape::Other,
        }
    }
}

/// A reported constant condition
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Span of the condition expression
    pub span: Span,
    /// The fixed boolean value of the condition
    pub value: bool,
    /// Human-readable message
    pub message: String,
}

/// The message other tooling matches on; the phrasing is a contract.
pub fn condition_message(value: bool) -> String {
    format!("The condition is always {}", value)
}

/// Inspect a parsed module, returning findings in document order.
pub fn inspect_module(root: &AstNode) -> Vec<Finding> {
    let mut findings = Vec::new();

    for node in root.walk() {
        let condition = match node.kind {
            NodeKind::IfStatement | NodeKind::ElifClause => node.child_by_field("condition"),
            _ => None,
        };
        let Some(condition) = condition else {
            continue;
        };

        if let Some(value) = evaluate_condition(condition).as_bool() {
            findings.push(Finding {
                span: condition.span,
                value,
                message: condition_message(value),
            });
        }
    }

    findings
}

/// Parse a source file and inspect whatever tree was produced.
///
/// Parse errors do not abort the inspection: statements that parsed are
/// still checked, and the errors are returned alongside the findings.
pub fn inspect_source(source: &str) -> (Vec<Finding>, ParseErrors) {
    let (module, errors) = condcheck_parser::parse(source);
    (inspect_module(&module), errors)
}

/// Convenience wrapper: evaluate a single condition node to a verdict.
pub fn check_condition(node: &AstNode) -> ConditionVerdict {
    evaluate_condition(node)
}

//! Condition evaluation
//!
//! The evaluator is generic over a minimal expression-shape interface, so
//! it depends on what a node *is* (a literal, a prefix, a comparison) and
//! never on a concrete tree implementation.

use crate::operators::ComparisonOperator;
use crate::value::NumericConstant;

/// The shape of an expression node, as seen by the evaluator.
///
/// A closed classification: anything the evaluator does not understand is
/// `Other`, which uniformly evaluates to "no information".
#[derive(Debug)]
pub enum ExprShape<'a, N: ?Sized> {
    /// A boolean literal with its value
    BooleanLiteral(bool),
    /// A numeric literal: raw lexical text plus its integer/decimal kind
    NumericLiteral { text: &'a str, is_integer: bool },
    /// A prefix operation: operator spelling and single operand
    Prefix { operator: &'a str, operand: &'a N },
    /// A binary operation: operator spelling and both operands
    Binary {
        operator: &'a str,
        left: &'a N,
        right: &'a N,
    },
    /// Anything else
    Other,
}

/// Minimal capability surface the evaluator needs from an expression tree
pub trait ConditionExpr {
    /// Classify this node into an [`ExprShape`]
    fn shape(&self) -> ExprShape<'_, Self>;
}

/// The evaluator's verdict on a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionVerdict {
    /// The condition always evaluates to true
    AlwaysTrue,
    /// The condition always evaluates to false
    AlwaysFalse,
    /// The condition's value is not statically determinable
    Unknown,
}

impl ConditionVerdict {
    /// Verdict for a known boolean value
    pub fn from_bool(value: bool) -> Self {
        if value {
            ConditionVerdict::AlwaysTrue
        } else {
            ConditionVerdict::AlwaysFalse
        }
    }

    /// The fixed boolean value, if there is one
    pub fn as_bool(self) -> Option<bool> {
        match self {
            ConditionVerdict::AlwaysTrue => Some(true),
            ConditionVerdict::AlwaysFalse => Some(false),
            ConditionVerdict::Unknown => None,
        }
    }

    /// Whether this verdict is reportable
    pub fn is_known(self) -> bool {
        self != ConditionVerdict::Unknown
    }
}

/// Extract the exact numeric constant an operand denotes, if any.
///
/// Recognized: numeric literals, and a unary minus applied directly to a
/// numeric literal. Nested negation (`--5`), other prefix operators, and
/// every non-literal expression are not constants.
pub fn numeric_operand<N: ConditionExpr + ?Sized>(node: &N) -> Option<NumericConstant> {
    match node.shape() {
        ExprShape::NumericLiteral { text, is_integer } => parse_literal(text, is_integer),
        ExprShape::Prefix {
            operator: "-",
            operand,
        } => match operand.shape() {
            ExprShape::NumericLiteral { text, is_integer } => {
                parse_literal(text, is_integer).map(NumericConstant::negated)
            }
            _ => None,
        },
        _ => None,
    }
}

fn parse_literal(text: &str, is_integer: bool) -> Option<NumericConstant> {
    if is_integer {
        NumericConstant::from_integer_literal(text)
    } else {
        NumericConstant::from_decimal_literal(text)
    }
}

/// Evaluate a condition expression to a verdict.
///
/// Pure and side-effect free: safe to call repeatedly and concurrently on
/// shared immutable nodes.
pub fn evaluate_condition<N: ConditionExpr + ?Sized>(node: &N) -> ConditionVerdict {
    match node.shape() {
        ExprShape::BooleanLiteral(value) => ConditionVerdict::from_bool(value),
        ExprShape::Binary {
            operator,
            left,
            right,
        } => {
            let Some(op) = ComparisonOperator::from_symbol(operator) else {
                return ConditionVerdict::Unknown;
            };
            let (Some(lhs), Some(rhs)) = (numeric_operand(left), numeric_operand(right)) else {
                return ConditionVerdict::Unknown;
            };
            match lhs.compare(&rhs) {
                Some(ordering) => ConditionVerdict::from_bool(op.holds_for(ordering)),
                None => ConditionVerdict::Unknown,
            }
        }
        _ => ConditionVerdict::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal tree for exercising the evaluator without a parser
    #[derive(Debug)]
    enum TestExpr {
        Bool(bool),
        Num(&'static str, bool),
        Prefix(&'static str, Box<TestExpr>),
        Binary(&'static str, Box<TestExpr>, Box<TestExpr>),
        Name,
    }

    impl ConditionExpr for TestExpr {
        fn shape(&self) -> ExprShape<'_, Self> {
            match self {
                TestExpr::Bool(value) => ExprShape::BooleanLiteral(*value),
                TestExpr::Num(text, is_integer) => ExprShape::NumericLiteral {
                    text: *text,
                    is_integer: *is_integer,
                },
                TestExpr::Prefix(operator, operand) => ExprShape::Prefix {
                    operator: *operator,
                    operand: operand.as_ref(),
                },
                TestExpr::Binary(operator, left, right) => ExprShape::Binary {
                    operator: *operator,
                    left: left.as_ref(),
                    right: right.as_ref(),
                },
                TestExpr::Name => ExprShape::Other,
            }
        }
    }

    fn int(text: &'static str) -> Box<TestExpr> {
        Box::new(TestExpr::Num(text, true))
    }

    fn dec(text: &'static str) -> Box<TestExpr> {
        Box::new(TestExpr::Num(text, false))
    }

    fn neg(expr: Box<TestExpr>) -> Box<TestExpr> {
        Box::new(TestExpr::Prefix("-", expr))
    }

    fn cmp(op: &'static str, left: Box<TestExpr>, right: Box<TestExpr>) -> TestExpr {
        TestExpr::Binary(op, left, right)
    }

    #[test]
    fn test_boolean_literal_conditions() {
        assert_eq!(
            evaluate_condition(&TestExpr::Bool(true)),
            ConditionVerdict::AlwaysTrue
        );
        assert_eq!(
            evaluate_condition(&TestExpr::Bool(false)),
            ConditionVerdict::AlwaysFalse
        );
    }

    #[test]
    fn test_integer_comparisons_all_operators() {
        // (op, 3 op 5, 5 op 5, 7 op 5)
        let cases = [
            ("<", true, false, false),
            (">", false, false, true),
            ("<=", true, true, false),
            (">=", false, true, true),
            ("==", false, true, false),
            ("!=", true, false, true),
        ];
        for (op, lt, eq, gt) in cases {
            assert_eq!(
                evaluate_condition(&cmp(op, int("3"), int("5"))),
                ConditionVerdict::from_bool(lt),
                "3 {} 5",
                op
            );
            assert_eq!(
                evaluate_condition(&cmp(op, int("5"), int("5"))),
                ConditionVerdict::from_bool(eq),
                "5 {} 5",
                op
            );
            assert_eq!(
                evaluate_condition(&cmp(op, int("7"), int("5"))),
                ConditionVerdict::from_bool(gt),
                "7 {} 5",
                op
            );
        }
    }

    #[test]
    fn test_decimal_equality_by_value() {
        assert_eq!(
            evaluate_condition(&cmp("==", dec("1.50"), dec("1.5"))),
            ConditionVerdict::AlwaysTrue
        );
        assert_eq!(
            evaluate_condition(&cmp("<", dec("1.4"), dec("1.5"))),
            ConditionVerdict::AlwaysTrue
        );
    }

    #[test]
    fn test_negated_operands() {
        assert_eq!(
            evaluate_condition(&cmp("<", neg(int("3")), neg(int("2")))),
            ConditionVerdict::AlwaysTrue
        );
        assert_eq!(
            evaluate_condition(&cmp("<", neg(dec("1.5")), dec("0.0"))),
            ConditionVerdict::AlwaysTrue
        );
    }

    #[test]
    fn test_double_negation_is_unknown() {
        assert_eq!(
            evaluate_condition(&cmp("<", neg(neg(int("3"))), int("2"))),
            ConditionVerdict::Unknown
        );
    }

    #[test]
    fn test_other_prefix_operators_are_unknown() {
        let tilde = TestExpr::Prefix("~", int("3"));
        assert_eq!(numeric_operand(&tilde), None);

        let plus = TestExpr::Prefix("+", int("3"));
        assert_eq!(numeric_operand(&plus), None);
    }

    #[test]
    fn test_mixed_kinds_are_unknown() {
        assert_eq!(
            evaluate_condition(&cmp("==", int("3"), dec("3.0"))),
            ConditionVerdict::Unknown
        );
    }

    #[test]
    fn test_non_constant_operand_is_unknown() {
        assert_eq!(
            evaluate_condition(&cmp("<", Box::new(TestExpr::Name), int("5"))),
            ConditionVerdict::Unknown
        );
        assert_eq!(
            evaluate_condition(&cmp("<", int("5"), Box::new(TestExpr::Name))),
            ConditionVerdict::Unknown
        );
    }

    #[test]
    fn test_unrecognized_operator_is_unknown() {
        assert_eq!(
            evaluate_condition(&cmp("in", int("3"), int("5"))),
            ConditionVerdict::Unknown
        );
        assert_eq!(
            evaluate_condition(&cmp("+", int("3"), int("5"))),
            ConditionVerdict::Unknown
        );
    }

    #[test]
    fn test_legacy_not_equal_spelling() {
        assert_eq!(
            evaluate_condition(&cmp("<>", int("3"), int("5"))),
            ConditionVerdict::AlwaysTrue
        );
        assert_eq!(
            evaluate_condition(&cmp("<>", int("5"), int("5"))),
            ConditionVerdict::AlwaysFalse
        );
    }

    #[test]
    fn test_large_integer_precision() {
        let verdict = evaluate_condition(&cmp(
            "==",
            int("1000000000000000000000000000000"),
            int("1000000000000000000000000000001"),
        ));
        assert_eq!(verdict, ConditionVerdict::AlwaysFalse);
    }

    #[test]
    fn test_malformed_literal_is_unknown() {
        assert_eq!(
            evaluate_condition(&cmp("<", int("not_a_number"), int("5"))),
            ConditionVerdict::Unknown
        );
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let expr = cmp("<=", int("5"), int("5"));
        let first = evaluate_condition(&expr);
        for _ in 0..10 {
            assert_eq!(evaluate_condition(&expr), first);
        }
    }
}

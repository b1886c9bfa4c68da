//! Comparison operators and their predicates

use std::cmp::Ordering;
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The six supported comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
    Equal,
    NotEqual,
}

/// Operator symbol lookup, built once at startup.
///
/// The legacy `<>` spelling maps to the same operator as `!=`.
static SYMBOL_TABLE: Lazy<HashMap<&'static str, ComparisonOperator>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert("<", ComparisonOperator::Less);
    table.insert(">", ComparisonOperator::Greater);
    table.insert("<=", ComparisonOperator::LessOrEqual);
    table.insert(">=", ComparisonOperator::GreaterOrEqual);
    table.insert("==", ComparisonOperator::Equal);
    table.insert("!=", ComparisonOperator::NotEqual);
    table.insert("<>", ComparisonOperator::NotEqual);
    table
});

impl ComparisonOperator {
    /// All six operators
    pub const ALL: [ComparisonOperator; 6] = [
        ComparisonOperator::Less,
        ComparisonOperator::Greater,
        ComparisonOperator::LessOrEqual,
        ComparisonOperator::GreaterOrEqual,
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
    ];

    /// Look up an operator by its source spelling
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        SYMBOL_TABLE.get(symbol).copied()
    }

    /// The canonical source spelling
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Less => "<",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::Equal => "==",
            ComparisonOperator::NotEqual => "!=",
        }
    }

    /// Whether the operator holds for a given three-way comparison result.
    ///
    /// This is the whole predicate: operands are compared exactly once and
    /// the operator only inspects the sign of the result.
    pub fn holds_for(self, ordering: Ordering) -> bool {
        match self {
            ComparisonOperator::Less => ordering == Ordering::Less,
            ComparisonOperator::Greater => ordering == Ordering::Greater,
            ComparisonOperator::LessOrEqual => ordering != Ordering::Greater,
            ComparisonOperator::GreaterOrEqual => ordering != Ordering::Less,
            ComparisonOperator::Equal => ordering == Ordering::Equal,
            ComparisonOperator::NotEqual => ordering != Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(
            ComparisonOperator::from_symbol("<"),
            Some(ComparisonOperator::Less)
        );
        assert_eq!(
            ComparisonOperator::from_symbol(">="),
            Some(ComparisonOperator::GreaterOrEqual)
        );
        assert_eq!(ComparisonOperator::from_symbol("in"), None);
        assert_eq!(ComparisonOperator::from_symbol("is"), None);
        assert_eq!(ComparisonOperator::from_symbol("==="), None);
    }

    #[test]
    fn test_legacy_not_equal_aliases_not_equal() {
        assert_eq!(
            ComparisonOperator::from_symbol("<>"),
            Some(ComparisonOperator::NotEqual)
        );
        assert_eq!(
            ComparisonOperator::from_symbol("<>"),
            ComparisonOperator::from_symbol("!=")
        );
    }

    #[test]
    fn test_every_operator_has_a_symbol_mapping() {
        for op in ComparisonOperator::ALL {
            assert_eq!(ComparisonOperator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_holds_for_full_table() {
        use Ordering::{Equal, Greater, Less};

        let cases = [
            (ComparisonOperator::Less, [true, false, false]),
            (ComparisonOperator::Greater, [false, false, true]),
            (ComparisonOperator::LessOrEqual, [true, true, false]),
            (ComparisonOperator::GreaterOrEqual, [false, true, true]),
            (ComparisonOperator::Equal, [false, true, false]),
            (ComparisonOperator::NotEqual, [true, false, true]),
        ];

        for (op, [lt, eq, gt]) in cases {
            assert_eq!(op.holds_for(Less), lt, "{:?} on Less", op);
            assert_eq!(op.holds_for(Equal), eq, "{:?} on Equal", op);
            assert_eq!(op.holds_for(Greater), gt, "{:?} on Greater", op);
        }
    }
}

//! Node kinds for the Python-subset AST

use serde::{Deserialize, Serialize};

/// AST node kinds
///
/// A closed enum over everything the parser produces, so consumers can
/// match exhaustively instead of probing an open class hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    // ==================== Top Level ====================
    /// Root node: a whole source file
    Module,
    /// Suite of statements
    Block,

    // ==================== Statements ====================
    /// if cond: ... (with optional elif/else clauses as children)
    IfStatement,
    /// elif cond: ...
    ElifClause,
    /// else: ...
    ElseClause,
    /// while cond: ...
    WhileStatement,
    /// for target in iter: ...
    ForStatement,
    /// def name(params): ...
    FunctionDefinition,
    /// class Name(bases): ...
    ClassDefinition,
    /// Parameter list: (a, b=1)
    ParameterList,
    /// Single parameter: a or a=default
    Parameter,
    /// pass
    PassStatement,
    /// break
    BreakStatement,
    /// continue
    ContinueStatement,
    /// return [expr]
    ReturnStatement,
    /// import x / from x import y
    ImportStatement,
    /// lhs = rhs
    Assignment,
    /// lhs += rhs (and the other augmented forms)
    AugmentedAssignment,

    // ==================== Expressions ====================
    /// Binary operation: a < b, a + b, a or b
    BinaryExpression,
    /// Prefix operation: -x, not x, ~x
    UnaryExpression,
    /// Function call: f(x, y=1)
    CallExpression,
    /// name=value inside a call's argument list
    KeywordArgument,
    /// Attribute access: a.b
    AttributeExpression,
    /// Subscript: a[i]
    SubscriptExpression,
    /// Slice inside a subscript: a[1:2]
    SliceExpression,
    /// (expr)
    ParenthesizedExpression,
    /// (a, b) or a, b
    TupleExpression,
    /// [a, b]
    ListExpression,
    /// Plain name
    Identifier,

    // ==================== Literals ====================
    /// 42, 0xff, 1_000
    IntegerLiteral,
    /// 1.5, .5, 1e10
    FloatLiteral,
    /// 2j
    ImaginaryLiteral,
    /// "text"
    StringLiteral,
    /// True / False
    BooleanLiteral,
    /// None
    NoneLiteral,

    // ==================== Other ====================
    /// Operator leaf (anonymous)
    Operator,
    /// Error placeholder produced during recovery
    Error,
}

impl NodeKind {
    /// Check if this is a named node (vs anonymous punctuation)
    pub fn is_named(&self) -> bool {
        !matches!(self, NodeKind::Operator | NodeKind::Error)
    }

    /// Check if this is a statement node
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::IfStatement
                | NodeKind::WhileStatement
                | NodeKind::ForStatement
                | NodeKind::FunctionDefinition
                | NodeKind::ClassDefinition
                | NodeKind::PassStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::ReturnStatement
                | NodeKind::ImportStatement
                | NodeKind::Assignment
                | NodeKind::AugmentedAssignment
        )
    }

    /// Check if this is an expression node
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::BinaryExpression
                | NodeKind::UnaryExpression
                | NodeKind::CallExpression
                | NodeKind::KeywordArgument
                | NodeKind::AttributeExpression
                | NodeKind::SubscriptExpression
                | NodeKind::SliceExpression
                | NodeKind::ParenthesizedExpression
                | NodeKind::TupleExpression
                | NodeKind::ListExpression
                | NodeKind::Identifier
                | NodeKind::IntegerLiteral
                | NodeKind::FloatLiteral
                | NodeKind::ImaginaryLiteral
                | NodeKind::StringLiteral
                | NodeKind::BooleanLiteral
                | NodeKind::NoneLiteral
        )
    }

    /// Check if this is a literal node
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            NodeKind::IntegerLiteral
                | NodeKind::FloatLiteral
                | NodeKind::ImaginaryLiteral
                | NodeKind::StringLiteral
                | NodeKind::BooleanLiteral
                | NodeKind::NoneLiteral
        )
    }

    /// Stable snake_case name, matching what external tooling expects
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Module => "module",
            NodeKind::Block => "block",
            NodeKind::IfStatement => "if_statement",
            NodeKind::ElifClause => "elif_clause",
            NodeKind::ElseClause => "else_clause",
            NodeKind::WhileStatement => "while_statement",
            NodeKind::ForStatement => "for_statement",
            NodeKind::FunctionDefinition => "function_definition",
            NodeKind::ClassDefinition => "class_definition",
            NodeKind::ParameterList => "parameter_list",
            NodeKind::Parameter => "parameter",
            NodeKind::PassStatement => "pass_statement",
            NodeKind::BreakStatement => "break_statement",
            NodeKind::ContinueStatement => "continue_statement",
            NodeKind::ReturnStatement => "return_statement",
            NodeKind::ImportStatement => "import_statement",
            NodeKind::Assignment => "assignment",
            NodeKind::AugmentedAssignment => "augmented_assignment",
            NodeKind::BinaryExpression => "binary_expression",
            NodeKind::UnaryExpression => "unary_expression",
            NodeKind::CallExpression => "call_expression",
            NodeKind::KeywordArgument => "keyword_argument",
            NodeKind::AttributeExpression => "attribute_expression",
            NodeKind::SubscriptExpression => "subscript_expression",
            NodeKind::SliceExpression => "slice_expression",
            NodeKind::ParenthesizedExpression => "parenthesized_expression",
            NodeKind::TupleExpression => "tuple_expression",
            NodeKind::ListExpression => "list_expression",
            NodeKind::Identifier => "identifier",
            NodeKind::IntegerLiteral => "integer_literal",
            NodeKind::FloatLiteral => "float_literal",
            NodeKind::ImaginaryLiteral => "imaginary_literal",
            NodeKind::StringLiteral => "string_literal",
            NodeKind::BooleanLiteral => "boolean_literal",
            NodeKind::NoneLiteral => "none_literal",
            NodeKind::Operator => "operator",
            NodeKind::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(NodeKind::IfStatement.is_statement());
        assert!(!NodeKind::IfStatement.is_expression());
        assert!(NodeKind::IntegerLiteral.is_literal());
        assert!(NodeKind::IntegerLiteral.is_expression());
        assert!(NodeKind::BinaryExpression.is_expression());
        assert!(!NodeKind::Operator.is_named());
        assert!(NodeKind::Identifier.is_named());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(NodeKind::IfStatement.as_str(), "if_statement");
        assert_eq!(NodeKind::ElifClause.as_str(), "elif_clause");
        assert_eq!(NodeKind::BooleanLiteral.as_str(), "boolean_literal");
    }
}

//! AST node structure
//!
//! A uniform tree: every node carries its kind, span, and children, with
//! optional leaf text and an optional field name linking it to its parent.

use serde::Serialize;

use crate::node_kind::NodeKind;
use crate::span::Span;

/// A node in the abstract syntax tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstNode {
    /// The kind of node
    pub kind: NodeKind,

    /// Source location span
    pub span: Span,

    /// Whether this is a named node (vs anonymous punctuation)
    pub is_named: bool,

    /// Child nodes
    pub children: Vec<AstNode>,

    /// For leaf nodes: the text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Field name if this node is a named field of its parent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
}

impl AstNode {
    /// Create a new node
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            is_named: kind.is_named(),
            children: Vec::new(),
            text: None,
            field_name: None,
        }
    }

    /// Create a new leaf node with text
    pub fn leaf(kind: NodeKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            is_named: kind.is_named(),
            children: Vec::new(),
            text: Some(text.into()),
            field_name: None,
        }
    }

    /// Create a new node with children
    pub fn with_children(kind: NodeKind, span: Span, children: Vec<AstNode>) -> Self {
        Self {
            kind,
            span,
            is_named: kind.is_named(),
            children,
            text: None,
            field_name: None,
        }
    }

    /// Add a child node
    pub fn push_child(&mut self, child: AstNode) {
        self.children.push(child);
    }

    /// Add a named field child
    pub fn push_field(&mut self, field_name: impl Into<String>, child: AstNode) {
        let mut child = child;
        child.field_name = Some(field_name.into());
        self.children.push(child);
    }

    /// Get child by index
    pub fn child(&self, index: usize) -> Option<&AstNode> {
        self.children.get(index)
    }

    /// Get child by field name
    pub fn child_by_field(&self, name: &str) -> Option<&AstNode> {
        self.children
            .iter()
            .find(|c| c.field_name.as_deref() == Some(name))
    }

    /// Get named children (excluding anonymous punctuation)
    pub fn named_children(&self) -> impl Iterator<Item = &AstNode> {
        self.children.iter().filter(|c| c.is_named)
    }

    /// Find a child with the given node kind
    pub fn find_child(&self, kind: NodeKind) -> Option<&AstNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Find all children with the given node kind
    pub fn find_children(&self, kind: NodeKind) -> impl Iterator<Item = &AstNode> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Get text content as Option<&str>
    pub fn text_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the number of children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if this node (or any descendant) is an error placeholder
    pub fn has_error(&self) -> bool {
        self.kind == NodeKind::Error || self.children.iter().any(|c| c.has_error())
    }

    /// Get the text from source
    pub fn text_from_source<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start..self.span.end]
    }

    /// Walk the tree in pre-order (document order)
    pub fn walk(&self) -> AstWalker<'_> {
        AstWalker::new(self)
    }

    /// Return the tree structure as an indented string.
    ///
    /// Useful for understanding the tree shape when writing tests or
    /// debugging parser issues:
    /// ```text
    /// if_statement
    ///   condition: boolean_literal = "True"
    ///   body: block
    /// ```
    pub fn debug_ast_string(&self) -> String {
        let mut output = String::new();
        self.debug_ast_to_string(&mut output, 0);
        output
    }

    fn debug_ast_to_string(&self, output: &mut String, indent: usize) {
        use std::fmt::Write;

        let pad = "  ".repeat(indent);

        let field_prefix = match &self.field_name {
            Some(name) => format!("{}: ", name),
            None => String::new(),
        };

        let text_suffix = match &self.text {
            Some(t) => format!(" = {:?}", t),
            None => String::new(),
        };

        writeln!(
            output,
            "{}{}{}{}",
            pad,
            field_prefix,
            self.kind.as_str(),
            text_suffix
        )
        .ok();

        for child in &self.children {
            child.debug_ast_to_string(output, indent + 1);
        }
    }
}

/// Tree walker for pre-order traversal
#[derive(Debug)]
pub struct AstWalker<'a> {
    stack: Vec<&'a AstNode>,
}

impl<'a> AstWalker<'a> {
    fn new(root: &'a AstNode) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for AstWalker<'a> {
    type Item = &'a AstNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so we visit them left-to-right
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node() {
        let node = AstNode::new(NodeKind::Identifier, Span::new(0, 3));

        assert_eq!(node.kind, NodeKind::Identifier);
        assert_eq!(node.span, Span::new(0, 3));
        assert!(node.is_named);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_leaf_node() {
        let node = AstNode::leaf(NodeKind::IntegerLiteral, Span::new(0, 5), "12345");

        assert_eq!(node.kind, NodeKind::IntegerLiteral);
        assert_eq!(node.text_str(), Some("12345"));
    }

    #[test]
    fn test_field_access() {
        let left = AstNode::leaf(NodeKind::IntegerLiteral, Span::new(0, 1), "1");
        let op = AstNode::leaf(NodeKind::Operator, Span::new(2, 3), "<");
        let right = AstNode::leaf(NodeKind::IntegerLiteral, Span::new(4, 5), "2");

        let mut cmp = AstNode::new(NodeKind::BinaryExpression, Span::new(0, 5));
        cmp.push_field("left", left);
        cmp.push_child(op);
        cmp.push_field("right", right);

        assert_eq!(cmp.child_count(), 3);
        assert!(cmp.child_by_field("left").is_some());
        assert!(cmp.child_by_field("right").is_some());
        assert!(cmp.child_by_field("operator").is_none());
        assert_eq!(cmp.named_children().count(), 2); // operator is anonymous
    }

    #[test]
    fn test_walker_document_order() {
        let left = AstNode::leaf(NodeKind::Identifier, Span::new(0, 1), "x");
        let right = AstNode::leaf(NodeKind::IntegerLiteral, Span::new(4, 5), "1");
        let parent =
            AstNode::with_children(NodeKind::BinaryExpression, Span::new(0, 5), vec![left, right]);

        let kinds: Vec<_> = parent.walk().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::BinaryExpression,
                NodeKind::Identifier,
                NodeKind::IntegerLiteral,
            ]
        );
    }

    #[test]
    fn test_debug_ast_string() {
        let mut node = AstNode::new(NodeKind::Assignment, Span::new(0, 5));
        node.push_field(
            "target",
            AstNode::leaf(NodeKind::Identifier, Span::new(0, 1), "x"),
        );
        node.push_field(
            "value",
            AstNode::leaf(NodeKind::IntegerLiteral, Span::new(4, 5), "1"),
        );

        let output = node.debug_ast_string();
        assert!(output.contains("assignment"));
        assert!(output.contains("  target: identifier = \"x\""));
        assert!(output.contains("  value: integer_literal = \"1\""));
    }

    #[test]
    fn test_has_error() {
        let mut node = AstNode::new(NodeKind::Block, Span::new(0, 1));
        assert!(!node.has_error());
        node.push_child(AstNode::new(NodeKind::Error, Span::new(0, 1)));
        assert!(node.has_error());
    }
}

//! Expression parsing (Pratt parser)
//!
//! Handles binary and unary expressions with Python precedence, two-word
//! comparison operators (`not in`, `is not`), and postfix operations
//! (call, attribute access, subscript).

use crate::ast::AstNode;
use crate::error::{ParseError, ParseResult};
use crate::node_kind::NodeKind;
use crate::span::Span;
use crate::token::{Associativity, Precedence, Token};

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse an expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> ParseResult<AstNode> {
        self.parse_expression_with_precedence(Precedence::LOWEST)
    }

    /// Parse `expr` or `expr, expr, ...` (an unparenthesized tuple)
    pub(crate) fn parse_expression_or_tuple(&mut self) -> ParseResult<AstNode> {
        let first = self.parse_expression()?;
        if !self.check(&Token::Comma) {
            return Ok(first);
        }

        let mut items = vec![first];
        while self.check(&Token::Comma) {
            self.advance();
            // Trailing comma: `x = 1,`
            if self.expect_statement_end().is_ok() {
                break;
            }
            items.push(self.parse_expression()?);
        }

        let mut span = items[0].span;
        if let Some(last) = items.last() {
            span = span.merge(&last.span);
        }
        Ok(AstNode::with_children(NodeKind::TupleExpression, span, items))
    }

    /// Parse an expression with minimum precedence (Pratt parser core)
    pub(crate) fn parse_expression_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> ParseResult<AstNode> {
        let mut left = self.parse_prefix()?;

        while !self.is_at_end() {
            // Clone the current token to avoid borrow issues with peek_next
            let Some(token) = self.current.as_ref().map(|t| t.token.clone()) else {
                break;
            };

            // Two-word comparison: `not in`
            if token == Token::KwNot {
                if min_prec <= Precedence::Comparison && self.peek_next() == Some(Token::KwIn) {
                    left = self.parse_comparison_tail(left, true)?;
                    continue;
                }
                break;
            }

            let Some((prec, assoc)) = token.binary_precedence() else {
                break;
            };
            if prec < min_prec {
                break;
            }

            if token.is_comparison() {
                left = self.parse_comparison_tail(left, false)?;
                continue;
            }

            let op_token = self
                .advance()
                .ok_or_else(|| ParseError::unexpected_eof("operator", self.current_span()))?;

            let next_prec = match assoc {
                Associativity::Left => prec.next_tighter(),
                Associativity::Right => prec,
            };
            let right = self.parse_expression_with_precedence(next_prec)?;

            left = self.binary_node(left, op_token.span, right);
        }

        Ok(left)
    }

    /// Parse the operator and right operand of a comparison.
    ///
    /// `negated` marks the `not in` form, where the current token is `not`.
    /// Handles `is not` by merging the two keyword spans into one operator.
    fn parse_comparison_tail(&mut self, left: AstNode, negated: bool) -> ParseResult<AstNode> {
        let first = self
            .advance()
            .ok_or_else(|| ParseError::unexpected_eof("comparison", self.current_span()))?;
        let mut op_span = first.span;

        if negated {
            let in_token = self.expect(Token::KwIn)?;
            op_span = op_span.merge(&in_token.span);
        } else if first.token == Token::KwIs && self.check(&Token::KwNot) {
            let not_token = self
                .advance()
                .ok_or_else(|| ParseError::unexpected_eof("comparison", self.current_span()))?;
            op_span = op_span.merge(&not_token.span);
        }

        // Comparisons chain left-associatively: a < b < c parses as (a < b) < c
        let right = self.parse_expression_with_precedence(Precedence::Comparison.next_tighter())?;
        Ok(self.binary_node(left, op_span, right))
    }

    /// Build a BinaryExpression node with left/operator/right fields
    fn binary_node(&self, left: AstNode, op_span: Span, right: AstNode) -> AstNode {
        let op_text = &self.source[op_span.start..op_span.end];
        let span = left.span.merge(&right.span);

        let mut node = AstNode::new(NodeKind::BinaryExpression, span);
        node.push_field("left", left);
        node.push_field(
            "operator",
            AstNode::leaf(NodeKind::Operator, op_span, op_text),
        );
        node.push_field("right", right);
        node
    }

    /// Parse a prefix expression (unary operator or postfix chain)
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<AstNode> {
        let token = self
            .current
            .as_ref()
            .ok_or_else(|| ParseError::unexpected_eof("expression", self.current_span()))?;

        if let Some(prec) = token.token.unary_precedence() {
            let op_token = self
                .advance()
                .ok_or_else(|| ParseError::unexpected_eof("expression", self.current_span()))?;
            let operand = self.parse_expression_with_precedence(prec)?;

            let span = op_token.span.merge(&operand.span);
            let mut node = AstNode::new(NodeKind::UnaryExpression, span);
            node.push_field(
                "operator",
                AstNode::leaf(NodeKind::Operator, op_token.span, op_token.text),
            );
            node.push_field("operand", operand);
            return Ok(node);
        }

        self.parse_postfix_chain()
    }

    /// Parse a primary expression followed by postfix operations
    fn parse_postfix_chain(&mut self) -> ParseResult<AstNode> {
        let mut left = self.parse_primary()?;

        loop {
            if self.check(&Token::LParen) {
                left = self.parse_call(left)?;
            } else if self.check(&Token::Dot) {
                left = self.parse_attribute(left)?;
            } else if self.check(&Token::LBracket) {
                left = self.parse_subscript(left)?;
            } else {
                break;
            }
        }

        Ok(left)
    }

    /// Parse a call: f(a, b, name=value)
    fn parse_call(&mut self, function: AstNode) -> ParseResult<AstNode> {
        self.expect(Token::LParen)?;

        let mut node = AstNode::new(NodeKind::CallExpression, function.span);
        let start = node.span.start;
        node.push_field("function", function);

        if !self.check(&Token::RParen) {
            loop {
                if self.check(&Token::RParen) {
                    break;
                }
                node.push_child(self.parse_call_argument()?);
                if !self.check(&Token::Comma) {
                    break;
                }
                self.advance();
            }
        }

        let rparen = self.expect(Token::RParen)?;
        node.span = Span::new(start, rparen.span.end);
        Ok(node)
    }

    /// Parse one call argument: an expression or `name=value`
    fn parse_call_argument(&mut self) -> ParseResult<AstNode> {
        if self.check(&Token::Identifier) && self.peek_next() == Some(Token::Eq) {
            let name_token = self
                .advance()
                .ok_or_else(|| ParseError::unexpected_eof("argument", self.current_span()))?;
            self.expect(Token::Eq)?;
            let value = self.parse_expression()?;

            let span = name_token.span.merge(&value.span);
            let mut node = AstNode::new(NodeKind::KeywordArgument, span);
            node.push_field(
                "name",
                AstNode::leaf(NodeKind::Identifier, name_token.span, name_token.text),
            );
            node.push_field("value", value);
            return Ok(node);
        }
        self.parse_expression()
    }

    /// Parse attribute access: obj.name
    fn parse_attribute(&mut self, object: AstNode) -> ParseResult<AstNode> {
        self.expect(Token::Dot)?;
        let name_token = self.expect(Token::Identifier)?;

        let span = object.span.merge(&name_token.span);
        let mut node = AstNode::new(NodeKind::AttributeExpression, span);
        node.push_field("object", object);
        node.push_field(
            "attribute",
            AstNode::leaf(NodeKind::Identifier, name_token.span, name_token.text),
        );
        Ok(node)
    }

    /// Parse subscript: obj[index] or obj[a:b]
    fn parse_subscript(&mut self, object: AstNode) -> ParseResult<AstNode> {
        self.expect(Token::LBracket)?;
        let start = object.span.start;

        let lower = if self.check(&Token::Colon) || self.check(&Token::RBracket) {
            None
        } else {
            Some(self.parse_expression()?)
        };

        let index = if self.check(&Token::Colon) {
            let colon = self
                .advance()
                .ok_or_else(|| ParseError::unexpected_eof("slice", self.current_span()))?;
            let upper = if self.check(&Token::RBracket) {
                None
            } else {
                Some(self.parse_expression()?)
            };

            let mut span = colon.span;
            if let Some(l) = &lower {
                span = span.merge(&l.span);
            }
            if let Some(u) = &upper {
                span = span.merge(&u.span);
            }
            let mut slice = AstNode::new(NodeKind::SliceExpression, span);
            if let Some(l) = lower {
                slice.push_field("lower", l);
            }
            if let Some(u) = upper {
                slice.push_field("upper", u);
            }
            slice
        } else {
            lower.ok_or_else(|| {
                ParseError::unexpected_token(self.current_text(), "subscript", self.current_span())
            })?
        };

        let rbracket = self.expect(Token::RBracket)?;
        let mut node = AstNode::new(NodeKind::SubscriptExpression, Span::new(start, rbracket.span.end));
        node.push_field("object", object);
        node.push_field("index", index);
        Ok(node)
    }

    /// Parse a primary expression: literal, name, parenthesized, list
    fn parse_primary(&mut self) -> ParseResult<AstNode> {
        let token = self
            .current
            .as_ref()
            .ok_or_else(|| ParseError::unexpected_eof("expression", self.current_span()))?
            .token
            .clone();

        match token {
            Token::True | Token::False => {
                let t = self.leaf_token()?;
                Ok(AstNode::leaf(NodeKind::BooleanLiteral, t.0, t.1))
            }
            Token::None => {
                let t = self.leaf_token()?;
                Ok(AstNode::leaf(NodeKind::NoneLiteral, t.0, t.1))
            }
            t if t.is_integer_literal() => {
                let t = self.leaf_token()?;
                Ok(AstNode::leaf(NodeKind::IntegerLiteral, t.0, t.1))
            }
            Token::FloatLiteral | Token::FloatLeadingDot | Token::FloatExponent => {
                let t = self.leaf_token()?;
                Ok(AstNode::leaf(NodeKind::FloatLiteral, t.0, t.1))
            }
            Token::ImaginaryLiteral => {
                let t = self.leaf_token()?;
                Ok(AstNode::leaf(NodeKind::ImaginaryLiteral, t.0, t.1))
            }
            Token::StringLiteral => {
                let t = self.leaf_token()?;
                Ok(AstNode::leaf(NodeKind::StringLiteral, t.0, t.1))
            }
            Token::Identifier => {
                let t = self.leaf_token()?;
                Ok(AstNode::leaf(NodeKind::Identifier, t.0, t.1))
            }
            Token::LParen => self.parse_paren_or_tuple(),
            Token::LBracket => self.parse_list(),
            Token::KwLambda => Err(ParseError::invalid_syntax(
                "lambda expressions are not supported",
                self.current_span(),
            )),
            Token::KwIf => Err(ParseError::invalid_syntax(
                "conditional expressions are not supported",
                self.current_span(),
            )),
            _ => Err(ParseError::unexpected_token(
                self.current_text(),
                "expression",
                self.current_span(),
            )),
        }
    }

    /// Consume the current token, returning its span and text
    fn leaf_token(&mut self) -> ParseResult<(Span, &'a str)> {
        let token = self
            .advance()
            .ok_or_else(|| ParseError::unexpected_eof("expression", self.current_span()))?;
        Ok((token.span, token.text))
    }

    /// Parse `(expr)`, `(a, b)`, or `()`
    fn parse_paren_or_tuple(&mut self) -> ParseResult<AstNode> {
        let lparen = self.expect(Token::LParen)?;
        let start = lparen.span.start;

        if self.check(&Token::RParen) {
            let rparen = self.expect(Token::RParen)?;
            return Ok(AstNode::new(
                NodeKind::TupleExpression,
                Span::new(start, rparen.span.end),
            ));
        }

        let first = self.parse_expression()?;

        if !self.check(&Token::Comma) {
            let rparen = self.expect(Token::RParen)?;
            let mut node = AstNode::new(
                NodeKind::ParenthesizedExpression,
                Span::new(start, rparen.span.end),
            );
            node.push_child(first);
            return Ok(node);
        }

        let mut items = vec![first];
        while self.check(&Token::Comma) {
            self.advance();
            if self.check(&Token::RParen) {
                break;
            }
            items.push(self.parse_expression()?);
        }
        let rparen = self.expect(Token::RParen)?;

        Ok(AstNode::with_children(
            NodeKind::TupleExpression,
            Span::new(start, rparen.span.end),
            items,
        ))
    }

    /// Parse a list display: [a, b, c]
    fn parse_list(&mut self) -> ParseResult<AstNode> {
        let lbracket = self.expect(Token::LBracket)?;
        let start = lbracket.span.start;
        let mut items = Vec::new();

        while !self.check(&Token::RBracket) && !self.is_at_end() {
            items.push(self.parse_expression()?);
            if !self.check(&Token::Comma) {
                break;
            }
            self.advance();
        }
        let rbracket = self.expect(Token::RBracket)?;

        Ok(AstNode::with_children(
            NodeKind::ListExpression,
            Span::new(start, rbracket.span.end),
            items,
        ))
    }
}

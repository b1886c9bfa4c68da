//! Statement parsers (compound statements, suites, simple statements)

use crate::ast::AstNode;
use crate::error::{ParseError, ParseResult};
use crate::node_kind::NodeKind;
use crate::token::{Precedence, Token};

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse a single statement.
    ///
    /// Central dispatch point: keyword tokens route to their specific
    /// parsers, everything else is an expression/assignment line.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<AstNode> {
        let token = self
            .current
            .as_ref()
            .ok_or_else(|| ParseError::unexpected_eof("statement", self.current_span()))?
            .token
            .clone();

        match token {
            // Compound statements
            Token::KwIf => self.parse_if_statement(),
            Token::KwWhile => self.parse_while_statement(),
            Token::KwFor => self.parse_for_statement(),
            Token::KwDef => self.parse_function_definition(),
            Token::KwClass => self.parse_class_definition(),

            // `elif`/`else` only make sense inside an if statement
            Token::KwElif | Token::KwElse => Err(ParseError::unexpected_token(
                self.current_text(),
                "statement",
                self.current_span(),
            )),

            // Simple statements that start with a keyword; `not` can open an
            // expression statement
            Token::KwPass
            | Token::KwBreak
            | Token::KwContinue
            | Token::KwReturn
            | Token::KwImport
            | Token::KwFrom
            | Token::KwNot => {
                let stmt = self.parse_small_statement()?;
                self.expect_statement_end()?;
                Ok(stmt)
            }

            // Remaining statement keywords are outside the subset
            t if t.is_keyword() => {
                let span = self.current_span();
                Err(ParseError::UnsupportedStatement {
                    keyword: self.current_text().to_string(),
                    span,
                })
            }

            _ => {
                let stmt = self.parse_small_statement()?;
                self.expect_statement_end()?;
                Ok(stmt)
            }
        }
    }

    /// Parse a non-compound statement (no trailing separator consumed)
    pub(crate) fn parse_small_statement(&mut self) -> ParseResult<AstNode> {
        let token = self
            .current
            .as_ref()
            .ok_or_else(|| ParseError::unexpected_eof("statement", self.current_span()))?
            .token
            .clone();

        match &token {
            Token::KwPass => self.parse_keyword_statement(NodeKind::PassStatement, Token::KwPass),
            Token::KwBreak => {
                self.parse_keyword_statement(NodeKind::BreakStatement, Token::KwBreak)
            }
            Token::KwContinue => {
                self.parse_keyword_statement(NodeKind::ContinueStatement, Token::KwContinue)
            }
            Token::KwReturn => self.parse_return_statement(),
            Token::KwImport | Token::KwFrom => self.parse_import_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse a bare keyword statement (pass, break, continue)
    fn parse_keyword_statement(&mut self, kind: NodeKind, keyword: Token) -> ParseResult<AstNode> {
        let token = self.expect(keyword)?;
        Ok(AstNode::new(kind, token.span))
    }

    /// Parse return statement: return [expr[, expr]*]
    fn parse_return_statement(&mut self) -> ParseResult<AstNode> {
        let return_token = self.expect(Token::KwReturn)?;
        let start = return_token.span.start;

        let mut node = AstNode::new(NodeKind::ReturnStatement, return_token.span);
        if self.expect_statement_end().is_err() {
            let value = self.parse_expression_or_tuple()?;
            node.span = node.span.merge(&value.span);
            node.push_field("value", value);
        }
        node.span.start = start;
        Ok(node)
    }

    /// Parse import statement: import a.b / from a import b, c
    ///
    /// The subset keeps imports unstructured: module names are collected as
    /// identifier leaves, everything else on the line is consumed.
    fn parse_import_statement(&mut self) -> ParseResult<AstNode> {
        let start = self.current_span().start;
        let mut end = self.current_span().end;
        let mut names = Vec::new();

        while !self.is_at_end()
            && !self.check(&Token::Newline)
            && !self.check(&Token::Semicolon)
            && !self.check(&Token::Dedent)
        {
            if self.check(&Token::Identifier) {
                let token = self.advance().ok_or_else(|| {
                    ParseError::unexpected_eof("import name", self.current_span())
                })?;
                end = token.span.end;
                names.push(AstNode::leaf(NodeKind::Identifier, token.span, token.text));
            } else {
                end = self.current_span().end;
                self.advance();
            }
        }

        let span = crate::span::Span::new(start, end);
        Ok(AstNode::with_children(NodeKind::ImportStatement, span, names))
    }

    /// Parse an expression line: a bare expression, an assignment chain
    /// (`a = b = 1`), or an augmented assignment (`a += 1`).
    fn parse_expression_statement(&mut self) -> ParseResult<AstNode> {
        let first = self.parse_expression_or_tuple()?;

        // Augmented assignment
        let is_augmented = self
            .current
            .as_ref()
            .map(|t| t.token.is_augmented_assignment())
            .unwrap_or(false);
        if is_augmented {
            let op_token = self.advance().ok_or_else(|| {
                ParseError::unexpected_eof("augmented assignment", self.current_span())
            })?;
            let value = self.parse_expression_or_tuple()?;

            let span = first.span.merge(&value.span);
            let mut node = AstNode::new(NodeKind::AugmentedAssignment, span);
            node.push_field("target", first);
            node.push_field(
                "operator",
                AstNode::leaf(NodeKind::Operator, op_token.span, op_token.text),
            );
            node.push_field("value", value);
            return Ok(node);
        }

        if !self.check(&Token::Eq) {
            return Ok(first);
        }

        // Assignment chain: every expression before the last `=` is a target
        let mut exprs = vec![first];
        while self.check(&Token::Eq) {
            self.advance();
            exprs.push(self.parse_expression_or_tuple()?);
        }

        let value = exprs.pop().ok_or_else(|| {
            ParseError::unexpected_eof("assignment value", self.current_span())
        })?;
        let span = exprs[0].span.merge(&value.span);
        let mut node = AstNode::new(NodeKind::Assignment, span);
        for target in exprs {
            node.push_field("target", target);
        }
        node.push_field("value", value);
        Ok(node)
    }

    // ==================== Compound Statements ====================

    /// Parse if statement: if cond: suite [elif cond: suite]* [else: suite]
    pub(crate) fn parse_if_statement(&mut self) -> ParseResult<AstNode> {
        let if_token = self.expect(Token::KwIf)?;
        let start = if_token.span.start;

        let condition = self.parse_expression()?;
        let body = self.parse_suite()?;

        let mut end = body.span.end;
        let mut node = AstNode::new(NodeKind::IfStatement, if_token.span);
        node.push_field("condition", condition);
        node.push_field("body", body);

        while self.check(&Token::KwElif) {
            let clause = self.parse_elif_clause()?;
            end = clause.span.end;
            node.push_child(clause);
        }

        if self.check(&Token::KwElse) {
            let clause = self.parse_else_clause()?;
            end = clause.span.end;
            node.push_child(clause);
        }

        node.span = crate::span::Span::new(start, end);
        Ok(node)
    }

    /// Parse elif clause
    fn parse_elif_clause(&mut self) -> ParseResult<AstNode> {
        let elif_token = self.expect(Token::KwElif)?;
        let start = elif_token.span.start;

        let condition = self.parse_expression()?;
        let body = self.parse_suite()?;

        let span = crate::span::Span::new(start, body.span.end);
        let mut node = AstNode::new(NodeKind::ElifClause, span);
        node.push_field("condition", condition);
        node.push_field("body", body);
        Ok(node)
    }

    /// Parse else clause
    fn parse_else_clause(&mut self) -> ParseResult<AstNode> {
        let else_token = self.expect(Token::KwElse)?;
        let start = else_token.span.start;

        let body = self.parse_suite()?;

        let span = crate::span::Span::new(start, body.span.end);
        let mut node = AstNode::new(NodeKind::ElseClause, span);
        node.push_field("body", body);
        Ok(node)
    }

    /// Parse while statement: while cond: suite
    pub(crate) fn parse_while_statement(&mut self) -> ParseResult<AstNode> {
        let while_token = self.expect(Token::KwWhile)?;
        let start = while_token.span.start;

        let condition = self.parse_expression()?;
        let body = self.parse_suite()?;

        let span = crate::span::Span::new(start, body.span.end);
        let mut node = AstNode::new(NodeKind::WhileStatement, span);
        node.push_field("condition", condition);
        node.push_field("body", body);
        Ok(node)
    }

    /// Parse for statement: for target in iter: suite
    pub(crate) fn parse_for_statement(&mut self) -> ParseResult<AstNode> {
        let for_token = self.expect(Token::KwFor)?;
        let start = for_token.span.start;

        // The target must stop before `in`, so parse above comparison level
        let target = self.parse_target_list()?;
        self.expect(Token::KwIn)?;
        let iter = self.parse_expression_or_tuple()?;
        let body = self.parse_suite()?;

        let span = crate::span::Span::new(start, body.span.end);
        let mut node = AstNode::new(NodeKind::ForStatement, span);
        node.push_field("target", target);
        node.push_field("iter", iter);
        node.push_field("body", body);
        Ok(node)
    }

    /// Parse a for-loop target list: `x` or `x, y`
    fn parse_target_list(&mut self) -> ParseResult<AstNode> {
        let first = self.parse_expression_with_precedence(Precedence::BitOr)?;
        if !self.check(&Token::Comma) {
            return Ok(first);
        }

        let mut items = vec![first];
        while self.check(&Token::Comma) {
            self.advance();
            if self.check(&Token::KwIn) {
                break;
            }
            items.push(self.parse_expression_with_precedence(Precedence::BitOr)?);
        }

        let span = items
            .first()
            .map(|f| f.span)
            .unwrap_or_else(|| self.current_span());
        let span = items.last().map(|l| span.merge(&l.span)).unwrap_or(span);
        Ok(AstNode::with_children(NodeKind::TupleExpression, span, items))
    }

    /// Parse function definition: def name(params) [-> annotation]: suite
    pub(crate) fn parse_function_definition(&mut self) -> ParseResult<AstNode> {
        let def_token = self.expect(Token::KwDef)?;
        let start = def_token.span.start;

        let name_token = self.expect(Token::Identifier)?;
        let name = AstNode::leaf(NodeKind::Identifier, name_token.span, name_token.text);

        let parameters = self.parse_parameter_list()?;

        let mut node = AstNode::new(NodeKind::FunctionDefinition, def_token.span);
        node.push_field("name", name);
        node.push_field("parameters", parameters);

        if self.check(&Token::Arrow) {
            self.advance();
            let annotation = self.parse_expression()?;
            node.push_field("returns", annotation);
        }

        let body = self.parse_suite()?;
        node.span = crate::span::Span::new(start, body.span.end);
        node.push_field("body", body);
        Ok(node)
    }

    /// Parse a parameter list: (a, b=1)
    fn parse_parameter_list(&mut self) -> ParseResult<AstNode> {
        let lparen = self.expect(Token::LParen)?;
        let start = lparen.span.start;
        let mut params = Vec::new();

        if !self.check(&Token::RParen) {
            loop {
                if self.check(&Token::RParen) {
                    break;
                }
                let name_token = self.expect(Token::Identifier)?;
                let name = AstNode::leaf(NodeKind::Identifier, name_token.span, name_token.text);

                let mut param = AstNode::new(NodeKind::Parameter, name_token.span);
                param.push_field("name", name);

                if self.check(&Token::Eq) {
                    self.advance();
                    let default = self.parse_expression()?;
                    param.span = param.span.merge(&default.span);
                    param.push_field("default", default);
                }

                params.push(param);
                if !self.check(&Token::Comma) {
                    break;
                }
                self.advance();
            }
        }

        let rparen = self.expect(Token::RParen)?;
        let span = crate::span::Span::new(start, rparen.span.end);
        Ok(AstNode::with_children(NodeKind::ParameterList, span, params))
    }

    /// Parse class definition: class Name[(bases)]: suite
    pub(crate) fn parse_class_definition(&mut self) -> ParseResult<AstNode> {
        let class_token = self.expect(Token::KwClass)?;
        let start = class_token.span.start;

        let name_token = self.expect(Token::Identifier)?;
        let name = AstNode::leaf(NodeKind::Identifier, name_token.span, name_token.text);

        let mut node = AstNode::new(NodeKind::ClassDefinition, class_token.span);
        node.push_field("name", name);

        if self.check(&Token::LParen) {
            self.advance();
            while !self.check(&Token::RParen) && !self.is_at_end() {
                let base = self.parse_expression()?;
                node.push_child(base);
                if !self.check(&Token::Comma) {
                    break;
                }
                self.advance();
            }
            self.expect(Token::RParen)?;
        }

        let body = self.parse_suite()?;
        node.span = crate::span::Span::new(start, body.span.end);
        node.push_field("body", body);
        Ok(node)
    }

    // ==================== Suites ====================

    /// Parse a suite: `: NEWLINE INDENT stmt+ DEDENT` or `: small_stmt (; small_stmt)*`
    pub(crate) fn parse_suite(&mut self) -> ParseResult<AstNode> {
        self.expect(Token::Colon)?;

        if !self.check(&Token::Newline) {
            return self.parse_inline_suite();
        }
        self.advance(); // consume newline

        if !self.check(&Token::Indent) {
            return Err(ParseError::invalid_syntax(
                "expected an indented block",
                self.current_span(),
            ));
        }
        let indent = self.advance().ok_or_else(|| {
            ParseError::unexpected_eof("indented block", self.current_span())
        })?;
        let start = indent.span.start;

        let mut children = Vec::new();
        while !self.is_at_end() && !self.check(&Token::Dedent) {
            while self.check(&Token::Newline) || self.check(&Token::Semicolon) {
                self.advance();
            }
            if self.is_at_end() || self.check(&Token::Dedent) {
                break;
            }
            if self.check(&Token::Indent) {
                self.errors.push(ParseError::UnexpectedIndent {
                    span: self.current_span(),
                });
                self.skip_indented_block();
                continue;
            }

            match self.parse_statement() {
                Ok(node) => children.push(node),
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        self.expect(Token::Dedent)?;

        let end = children.last().map(|c| c.span.end).unwrap_or(start);
        let span = crate::span::Span::new(start, end);
        Ok(AstNode::with_children(NodeKind::Block, span, children))
    }

    /// Parse an inline suite: `if x: pass; y = 1`
    fn parse_inline_suite(&mut self) -> ParseResult<AstNode> {
        let start = self.current_span().start;
        let mut children = vec![self.parse_small_statement()?];

        while self.check(&Token::Semicolon) {
            self.advance();
            if self.check(&Token::Newline) || self.is_at_end() {
                break;
            }
            children.push(self.parse_small_statement()?);
        }
        self.expect_statement_end()?;
        // Consume the line terminator so elif/else clauses are visible
        if self.check(&Token::Newline) {
            self.advance();
        }

        let end = children.last().map(|c| c.span.end).unwrap_or(start);
        let span = crate::span::Span::new(start, end);
        Ok(AstNode::with_children(NodeKind::Block, span, children))
    }
}

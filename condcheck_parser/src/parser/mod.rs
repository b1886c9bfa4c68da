//! Recursive descent parser for the Python subset
//!
//! Converts the layout-aware token stream into AST nodes.

mod expressions;
mod statements;

use crate::ast::AstNode;
use crate::error::{ParseError, ParseErrors, ParseResult};
use crate::lexer::{Lexer, SpannedToken};
use crate::node_kind::NodeKind;
use crate::span::Span;
use crate::token::Token;

/// Python-subset parser
///
/// Parses source code into an abstract syntax tree.
#[derive(Debug)]
pub struct Parser<'a> {
    /// Source code
    pub(crate) source: &'a str,
    /// Lexer
    pub(crate) lexer: Lexer<'a>,
    /// Current token (peeked)
    pub(crate) current: Option<SpannedToken<'a>>,
    /// Collected errors (for error recovery)
    pub(crate) errors: ParseErrors,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            current: None,
            errors: ParseErrors::new(),
        }
    }

    /// Parse the source and return a Module AST node
    pub fn parse(mut self) -> (AstNode, ParseErrors) {
        let mut children = Vec::new();

        // Prime the parser with the first token
        self.advance();

        while !self.is_at_end() {
            // Skip statement separators
            while self.check(&Token::Newline) || self.check(&Token::Semicolon) {
                self.advance();
            }

            if self.is_at_end() {
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

        let span = Span::new(0, self.source.len());
        let root = AstNode::with_children(NodeKind::Module, span, children);

        (root, self.errors)
    }

    // ==================== Token Management ====================

    /// Advance to the next token
    pub(crate) fn advance(&mut self) -> Option<SpannedToken<'a>> {
        let prev = self.current.take();
        loop {
            match self.lexer.next_token() {
                Some(Ok(token)) => {
                    self.current = Some(token);
                    break;
                }
                Some(Err(e)) => {
                    self.errors.push(e);
                    continue;
                }
                None => {
                    self.current = None;
                    break;
                }
            }
        }
        prev
    }

    /// Check if current token matches
    pub(crate) fn check(&self, expected: &Token) -> bool {
        self.current
            .as_ref()
            .map(|t| &t.token == expected)
            .unwrap_or(false)
    }

    /// Peek at the next token without consuming it
    pub(crate) fn peek_next(&mut self) -> Option<Token> {
        loop {
            match self.lexer.peek() {
                Some(Ok(token)) => return Some(token.token.clone()),
                Some(Err(_)) => {
                    // Surface the error when the token is actually consumed
                    let _ = self.lexer.next_token();
                    continue;
                }
                None => return None,
            }
        }
    }

    /// Consume current token if it matches, return error otherwise
    pub(crate) fn expect(&mut self, expected: Token) -> ParseResult<SpannedToken<'a>> {
        if self.check(&expected) {
            self.advance()
                .ok_or_else(|| ParseError::unexpected_eof(format!("{:?}", expected), Span::at(self.source.len())))
        } else {
            let found = self
                .current
                .as_ref()
                .map(|t| t.text)
                .unwrap_or("end of input");
            let span = self.current_span();
            Err(ParseError::unexpected_token(
                found,
                format!("{:?}", expected),
                span,
            ))
        }
    }

    /// Get the span of the current token
    pub(crate) fn current_span(&self) -> Span {
        self.current
            .as_ref()
            .map(|t| t.span)
            .unwrap_or_else(|| Span::at(self.source.len()))
    }

    /// Get the text of the current token (for error messages)
    pub(crate) fn current_text(&self) -> &'a str {
        self.current
            .as_ref()
            .map(|t| t.text)
            .unwrap_or("end of input")
    }

    /// Check if we're at end of input
    pub(crate) fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Verify the current token can terminate a simple statement.
    ///
    /// Does not consume: the enclosing block loop owns the separators.
    pub(crate) fn expect_statement_end(&mut self) -> ParseResult<()> {
        if self.is_at_end()
            || self.check(&Token::Newline)
            || self.check(&Token::Semicolon)
            || self.check(&Token::Dedent)
        {
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                self.current_text(),
                "end of statement",
                self.current_span(),
            ))
        }
    }

    /// Error recovery: skip to the start of the next logical line.
    ///
    /// An indented block following the bad line (the suite of a broken
    /// compound statement) is skipped wholesale, so recovery resumes at the
    /// same nesting level the error occurred at.
    pub(crate) fn synchronize(&mut self) {
        // Always advance at least once to avoid infinite loops
        self.advance();

        loop {
            if self.is_at_end() || self.check(&Token::Dedent) {
                return;
            }
            if self.check(&Token::Newline) {
                self.advance();
                if self.check(&Token::Indent) {
                    self.skip_indented_block();
                }
                return;
            }
            self.advance();
        }
    }

    /// Skip a balanced Indent..Dedent region (current token must be Indent)
    pub(crate) fn skip_indented_block(&mut self) {
        let mut depth = 0usize;
        while !self.is_at_end() {
            if self.check(&Token::Indent) {
                depth += 1;
            } else if self.check(&Token::Dedent) {
                if depth <= 1 {
                    self.advance();
                    return;
                }
                depth -= 1;
            }
            self.advance();
        }
    }
}

/// Parse Python-subset source code into an AST
pub fn parse(source: &str) -> (AstNode, ParseErrors) {
    Parser::new(source).parse()
}

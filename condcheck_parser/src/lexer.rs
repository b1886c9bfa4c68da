//! Lexer for Python-subset source code
//!
//! Wraps the logos-generated lexer with the layout handling a token DFA
//! cannot express: INDENT/DEDENT synthesis, implicit line joining inside
//! brackets, explicit backslash continuation, and blank-line suppression.

use logos::Logos;

use crate::error::ParseError;
use crate::span::Span;
use crate::token::Token;

/// A token with its span
#[derive(Debug, Clone)]
pub struct SpannedToken<'a> {
    pub token: Token,
    pub span: Span,
    pub text: &'a str,
}

impl<'a> SpannedToken<'a> {
    pub fn new(token: Token, span: Span, text: &'a str) -> Self {
        Self { token, span, text }
    }
}

/// Tab stops expand to the next multiple of this width
const TAB_WIDTH: usize = 8;

/// Python-subset lexer
///
/// Tokenizes eagerly so that layout tokens can be interleaved at the right
/// positions; the parser consumes the result as a stream.
#[derive(Debug)]
pub struct Lexer<'a> {
    tokens: std::vec::IntoIter<Result<SpannedToken<'a>, ParseError>>,
    peeked: Option<Result<SpannedToken<'a>, ParseError>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            tokens: layout(source).into_iter(),
            peeked: None,
        }
    }

    /// Peek at the next token without consuming it
    pub fn peek(&mut self) -> Option<&Result<SpannedToken<'a>, ParseError>> {
        if self.peeked.is_none() {
            self.peeked = self.tokens.next();
        }
        self.peeked.as_ref()
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Option<Result<SpannedToken<'a>, ParseError>> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }
        self.tokens.next()
    }

    /// Check if we're at end of input
    pub fn is_eof(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Collect all tokens (for debugging)
    pub fn collect_all(mut self) -> Vec<Result<SpannedToken<'a>, ParseError>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<SpannedToken<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize source code into a vector of spanned tokens
pub fn tokenize(source: &str) -> Vec<Result<SpannedToken<'_>, ParseError>> {
    Lexer::new(source).collect_all()
}

/// Run the logos lexer and interleave layout tokens.
fn layout(source: &str) -> Vec<Result<SpannedToken<'_>, ParseError>> {
    let mut raw = Token::lexer(source);
    let mut out: Vec<Result<SpannedToken<'_>, ParseError>> = Vec::new();

    // Indentation stack; the outermost level is always 0
    let mut indents: Vec<usize> = vec![0];
    // Open bracket depth; newlines inside brackets are joined away
    let mut depth = 0usize;
    // Whether the current logical line has produced a real token yet
    let mut line_has_content = false;

    while let Some(result) = raw.next() {
        let span = Span::new(raw.span().start, raw.span().end);
        let text = raw.slice();

        let token = match result {
            Err(()) => {
                out.push(Err(ParseError::LexerError { span }));
                line_has_content = true;
                continue;
            }
            Ok(token) => token,
        };

        match token {
            Token::Comment | Token::Continuation => continue,
            Token::Newline => {
                if depth > 0 || !line_has_content {
                    // Implicit joining, or a blank/comment-only line
                    continue;
                }
                out.push(Ok(SpannedToken::new(Token::Newline, span, text)));
                line_has_content = false;
            }
            _ => {
                if depth == 0 && !line_has_content {
                    let width = indent_width(source, span.start);
                    adjust_indent(&mut indents, width, span.start, &mut out);
                }
                line_has_content = true;

                match token {
                    Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
                    Token::RParen | Token::RBracket | Token::RBrace => {
                        depth = depth.saturating_sub(1);
                    }
                    _ => {}
                }

                out.push(Ok(SpannedToken::new(token, span, text)));
            }
        }
    }

    // Flush at EOF: terminate the last logical line, close open blocks
    let eof = Span::at(source.len());
    if line_has_content {
        out.push(Ok(SpannedToken::new(Token::Newline, eof, "")));
    }
    while indents.len() > 1 {
        indents.pop();
        out.push(Ok(SpannedToken::new(Token::Dedent, eof, "")));
    }

    out
}

/// Emit Indent/Dedent tokens to move the indentation stack to `width`.
fn adjust_indent<'a>(
    indents: &mut Vec<usize>,
    width: usize,
    offset: usize,
    out: &mut Vec<Result<SpannedToken<'a>, ParseError>>,
) {
    let span = Span::at(offset);
    let current = indents.last().copied().unwrap_or(0);

    if width > current {
        indents.push(width);
        out.push(Ok(SpannedToken::new(Token::Indent, span, "")));
        return;
    }

    while indents.last().copied().unwrap_or(0) > width {
        indents.pop();
        out.push(Ok(SpannedToken::new(Token::Dedent, span, "")));
    }
    if indents.last().copied().unwrap_or(0) != width {
        out.push(Err(ParseError::InconsistentDedent { span }));
    }
}

/// Compute the expanded indentation width of the line containing `offset`.
///
/// `offset` is the position of the first non-whitespace token on the line;
/// tabs expand to the next multiple of [`TAB_WIDTH`].
fn indent_width(source: &str, offset: usize) -> usize {
    let bytes = source.as_bytes();
    let mut line_start = offset;
    while line_start > 0 && bytes[line_start - 1] != b'\n' {
        line_start -= 1;
    }

    let mut width = 0;
    for &b in &bytes[line_start..offset] {
        match b {
            b'\t' => width = (width / TAB_WIDTH + 1) * TAB_WIDTH,
            _ => width += 1,
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .into_iter()
            .filter_map(|r| r.ok())
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_basic_tokens() {
        assert_eq!(
            kinds("x = 1"),
            vec![
                Token::Identifier,
                Token::Eq,
                Token::DecimalLiteral,
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_indent_dedent() {
        let source = "if x:\n    pass\ny = 1\n";
        assert_eq!(
            kinds(source),
            vec![
                Token::KwIf,
                Token::Identifier,
                Token::Colon,
                Token::Newline,
                Token::Indent,
                Token::KwPass,
                Token::Newline,
                Token::Dedent,
                Token::Identifier,
                Token::Eq,
                Token::DecimalLiteral,
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_dedent_flush_at_eof() {
        let source = "if x:\n    if y:\n        pass";
        let tokens = kinds(source);
        let dedents = tokens.iter().filter(|t| **t == Token::Dedent).count();
        assert_eq!(dedents, 2);
        assert_eq!(tokens.last(), Some(&Token::Dedent));
    }

    #[test]
    fn test_blank_and_comment_lines_ignored() {
        let source = "if x:\n\n    # comment\n    pass\n";
        assert_eq!(
            kinds(source),
            vec![
                Token::KwIf,
                Token::Identifier,
                Token::Colon,
                Token::Newline,
                Token::Indent,
                Token::KwPass,
                Token::Newline,
                Token::Dedent,
            ]
        );
    }

    #[test]
    fn test_implicit_line_joining() {
        let source = "x = (1 +\n     2)\n";
        let tokens = kinds(source);
        // Only the final newline survives; the one inside parens is joined
        let newlines = tokens.iter().filter(|t| **t == Token::Newline).count();
        assert_eq!(newlines, 1);
        assert!(!tokens.contains(&Token::Indent));
    }

    #[test]
    fn test_explicit_continuation() {
        let source = "x = 1 + \\\n    2\n";
        let tokens = kinds(source);
        assert!(!tokens.contains(&Token::Indent));
        let newlines = tokens.iter().filter(|t| **t == Token::Newline).count();
        assert_eq!(newlines, 1);
    }

    #[test]
    fn test_inconsistent_dedent() {
        let source = "if x:\n        pass\n    y\n";
        let has_error = tokenize(source).into_iter().any(|r| {
            matches!(r, Err(ParseError::InconsistentDedent { .. }))
        });
        assert!(has_error);
    }

    #[test]
    fn test_tab_expansion() {
        // A tab indents to column 8, deeper than 4 spaces
        let source = "if x:\n    if y:\n\tpass\n";
        let tokens = kinds(source);
        let indents = tokens.iter().filter(|t| **t == Token::Indent).count();
        assert_eq!(indents, 2);
    }

    #[test]
    fn test_spans() {
        let tokens: Vec<_> = tokenize("foo < bar")
            .into_iter()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[0].text, "foo");
        assert_eq!(tokens[1].span, Span::new(4, 5));
        assert_eq!(tokens[2].span, Span::new(6, 9));
        assert_eq!(tokens[2].text, "bar");
    }

    #[test]
    fn test_peek() {
        let mut lexer = Lexer::new("a b");

        let peeked = lexer.peek().unwrap().as_ref().unwrap();
        assert_eq!(peeked.text, "a");
        let peeked = lexer.peek().unwrap().as_ref().unwrap();
        assert_eq!(peeked.text, "a");

        let next = lexer.next_token().unwrap().unwrap();
        assert_eq!(next.text, "a");
        let next = lexer.next_token().unwrap().unwrap();
        assert_eq!(next.text, "b");
    }
}

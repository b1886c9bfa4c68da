//! Token definitions for the Python-subset lexer
//!
//! The logos-generated DFA covers everything except Python's layout rules;
//! the `Indent`/`Dedent` variants are synthesized by the lexer wrapper.

use logos::Logos;

/// Python-subset tokens
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\f]+")] // Skip whitespace (but not newlines)
pub enum Token {
    // ==================== Keywords ====================
    // The full Python 3 keyword set is lexed so that keywords never
    // masquerade as identifiers, even where the parser rejects them.
    #[token("if")]
    KwIf,
    #[token("elif")]
    KwElif,
    #[token("else")]
    KwElse,
    #[token("while")]
    KwWhile,
    #[token("for")]
    KwFor,
    #[token("in")]
    KwIn,
    #[token("is")]
    KwIs,
    #[token("not")]
    KwNot,
    #[token("and")]
    KwAnd,
    #[token("or")]
    KwOr,
    #[token("pass")]
    KwPass,
    #[token("break")]
    KwBreak,
    #[token("continue")]
    KwContinue,
    #[token("return")]
    KwReturn,
    #[token("def")]
    KwDef,
    #[token("class")]
    KwClass,
    #[token("import")]
    KwImport,
    #[token("from")]
    KwFrom,
    #[token("as")]
    KwAs,
    #[token("del")]
    KwDel,
    #[token("global")]
    KwGlobal,
    #[token("nonlocal")]
    KwNonlocal,
    #[token("lambda")]
    KwLambda,
    #[token("try")]
    KwTry,
    #[token("except")]
    KwExcept,
    #[token("finally")]
    KwFinally,
    #[token("raise")]
    KwRaise,
    #[token("with")]
    KwWith,
    #[token("yield")]
    KwYield,
    #[token("assert")]
    KwAssert,
    #[token("async")]
    KwAsync,
    #[token("await")]
    KwAwait,

    // ==================== Constant Keywords ====================
    #[token("True")]
    True,
    #[token("False")]
    False,
    #[token("None")]
    None,

    // ==================== Delimiters ====================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // ==================== Punctuation ====================
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("->")]
    Arrow,

    // ==================== Assignment Operators ====================
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("//=")]
    SlashSlashEq,
    #[token("%=")]
    PercentEq,
    #[token("**=")]
    StarStarEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("<<=")]
    LtLtEq,
    #[token(">>=")]
    GtGtEq,
    #[token("@=")]
    AtEq,

    // ==================== Comparison Operators ====================
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    // Legacy Python 2 not-equal spelling, still seen in old sources
    #[token("<>")]
    NotEqOld,

    // ==================== Arithmetic / Bitwise Operators ====================
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("//")]
    SlashSlash,
    #[token("%")]
    Percent,
    #[token("**")]
    StarStar,
    #[token("@")]
    At,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,

    // ==================== Newlines / Continuation ====================
    #[regex(r"\r?\n")]
    Newline,

    // Explicit line joining: backslash immediately before a newline
    #[regex(r"\\\r?\n")]
    Continuation,

    // ==================== Comments ====================
    #[regex(r"#[^\n]*")]
    Comment,

    // ==================== Literals ====================

    // Integer literals (decimal keeps leading zeros so legacy text still lexes)
    #[regex(r"0[bB][01]([01]|_[01])*")]
    BinaryLiteral,
    #[regex(r"0[oO][0-7]([0-7]|_[0-7])*")]
    OctalLiteral,
    #[regex(r"0[xX][0-9a-fA-F]([0-9a-fA-F]|_[0-9a-fA-F])*")]
    HexLiteral,
    #[regex(r"[0-9]([0-9]|_[0-9])*")]
    DecimalLiteral,

    // Float literals: point, trailing-point, leading-dot, and exponent forms
    #[regex(r"[0-9]([0-9]|_[0-9])*\.([0-9]([0-9]|_[0-9])*)?([eE][+-]?[0-9]([0-9]|_[0-9])*)?")]
    FloatLiteral,
    #[regex(r"\.[0-9]([0-9]|_[0-9])*([eE][+-]?[0-9]([0-9]|_[0-9])*)?")]
    FloatLeadingDot,
    #[regex(r"[0-9]([0-9]|_[0-9])*[eE][+-]?[0-9]([0-9]|_[0-9])*")]
    FloatExponent,

    // Imaginary literals: any integer/float body with a j suffix
    #[regex(r"([0-9]([0-9]|_[0-9])*\.?([0-9]([0-9]|_[0-9])*)?|\.[0-9]([0-9]|_[0-9])*)([eE][+-]?[0-9]([0-9]|_[0-9])*)?[jJ]")]
    ImaginaryLiteral,

    // Single-line string literals with optional prefix letters (r"...", b'...', f"...")
    #[regex(r#"[rRbBuUfF]{0,2}"([^"\\\n]|\\.)*""#)]
    #[regex(r"[rRbBuUfF]{0,2}'([^'\\\n]|\\.)*'")]
    StringLiteral,

    // ==================== Identifiers ====================
    #[regex(r"[_\p{XID_Start}]\p{XID_Continue}*")]
    Identifier,

    // ==================== Synthesized by the lexer wrapper ====================
    /// Indentation increased at the start of a logical line
    Indent,
    /// Indentation decreased at the start of a logical line
    Dedent,
}

impl Token {
    /// Check if this token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::KwIf
                | Token::KwElif
                | Token::KwElse
                | Token::KwWhile
                | Token::KwFor
                | Token::KwIn
                | Token::KwIs
                | Token::KwNot
                | Token::KwAnd
                | Token::KwOr
                | Token::KwPass
                | Token::KwBreak
                | Token::KwContinue
                | Token::KwReturn
                | Token::KwDef
                | Token::KwClass
                | Token::KwImport
                | Token::KwFrom
                | Token::KwAs
                | Token::KwDel
                | Token::KwGlobal
                | Token::KwNonlocal
                | Token::KwLambda
                | Token::KwTry
                | Token::KwExcept
                | Token::KwFinally
                | Token::KwRaise
                | Token::KwWith
                | Token::KwYield
                | Token::KwAssert
                | Token::KwAsync
                | Token::KwAwait
        )
    }

    /// Check if this token is a comparison operator
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Token::Lt
                | Token::Gt
                | Token::LtEq
                | Token::GtEq
                | Token::EqEq
                | Token::NotEq
                | Token::NotEqOld
                | Token::KwIn
                | Token::KwIs
        )
    }

    /// Check if this token is an augmented-assignment operator (+=, -=, ...)
    pub fn is_augmented_assignment(&self) -> bool {
        matches!(
            self,
            Token::PlusEq
                | Token::MinusEq
                | Token::StarEq
                | Token::SlashEq
                | Token::SlashSlashEq
                | Token::PercentEq
                | Token::StarStarEq
                | Token::AmpEq
                | Token::PipeEq
                | Token::CaretEq
                | Token::LtLtEq
                | Token::GtGtEq
                | Token::AtEq
        )
    }

    /// Check if this token is a numeric literal
    pub fn is_numeric_literal(&self) -> bool {
        matches!(
            self,
            Token::BinaryLiteral
                | Token::OctalLiteral
                | Token::HexLiteral
                | Token::DecimalLiteral
                | Token::FloatLiteral
                | Token::FloatLeadingDot
                | Token::FloatExponent
                | Token::ImaginaryLiteral
        )
    }

    /// Check if this token is an integer (as opposed to float/imaginary) literal
    pub fn is_integer_literal(&self) -> bool {
        matches!(
            self,
            Token::BinaryLiteral
                | Token::OctalLiteral
                | Token::HexLiteral
                | Token::DecimalLiteral
        )
    }
}

/// Operator precedence levels, lowest binds loosest
///
/// Mirrors the Python expression grammar: `or` < `and` < `not` < comparison
/// < `|` < `^` < `&` < shifts < `+ -` < `* / // % @` < unary < `**`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i8)]
pub enum Precedence {
    Or = 1,
    And = 2,
    Not = 3,
    Comparison = 4,
    BitOr = 5,
    BitXor = 6,
    BitAnd = 7,
    Shift = 8,
    Sum = 9,
    Term = 10,
    Unary = 11,
    Power = 12,
}

impl Precedence {
    /// The loosest precedence, used as the entry point for full expressions
    pub const LOWEST: Precedence = Precedence::Or;

    /// The next-tighter level, for left-associative operators
    pub fn next_tighter(self) -> Precedence {
        match self {
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Not,
            Precedence::Not => Precedence::Comparison,
            Precedence::Comparison => Precedence::BitOr,
            Precedence::BitOr => Precedence::BitXor,
            Precedence::BitXor => Precedence::BitAnd,
            Precedence::BitAnd => Precedence::Shift,
            Precedence::Shift => Precedence::Sum,
            Precedence::Sum => Precedence::Term,
            Precedence::Term => Precedence::Unary,
            Precedence::Unary => Precedence::Power,
            Precedence::Power => Precedence::Power,
        }
    }
}

/// Operator associativity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Token {
    /// Get the precedence and associativity of a binary operator
    pub fn binary_precedence(&self) -> Option<(Precedence, Associativity)> {
        use Associativity::{Left, Right};
        use Precedence::*;

        Some(match self {
            Token::KwOr => (Or, Left),
            Token::KwAnd => (And, Left),

            // `not` only participates as the head of `not in`; the Pratt
            // loop checks for the following `in` before consuming it.
            Token::Lt
            | Token::Gt
            | Token::LtEq
            | Token::GtEq
            | Token::EqEq
            | Token::NotEq
            | Token::NotEqOld
            | Token::KwIn
            | Token::KwIs => (Comparison, Left),

            Token::Pipe => (BitOr, Left),
            Token::Caret => (BitXor, Left),
            Token::Amp => (BitAnd, Left),
            Token::LtLt | Token::GtGt => (Shift, Left),
            Token::Plus | Token::Minus => (Sum, Left),
            Token::Star | Token::Slash | Token::SlashSlash | Token::Percent | Token::At => {
                (Term, Left)
            }
            Token::StarStar => (Power, Right),

            _ => return None,
        })
    }

    /// Get the precedence of a prefix operator
    pub fn unary_precedence(&self) -> Option<Precedence> {
        match self {
            Token::Plus | Token::Minus | Token::Tilde => Some(Precedence::Unary),
            Token::KwNot => Some(Precedence::Not),
            _ => None,
        }
    }
}

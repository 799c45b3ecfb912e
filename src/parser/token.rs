//! Tokens produced by the lexer

use super::ast::SourceLocation;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    String,
    Word,
    Int,
    Real,
    Operator,
    ExtraStandard,
    /// Reserved for mangled names; the lexer currently reports `@name` as a `Word`.
    Special,
}

impl TokenKind {
    /// Label used in token dumps.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::Word => "WORD",
            TokenKind::Int => "INT",
            TokenKind::Real => "REAL",
            TokenKind::Operator => "OPER",
            TokenKind::ExtraStandard => "EXTRA",
            TokenKind::Special => "SPECIAL",
        }
    }
}

/// One classified piece of source text.
///
/// `text` is exactly what appeared in the source (string tokens keep their
/// quotes and escapes, numbers keep radix prefixes and type suffixes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub location: SourceLocation,
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(location: SourceLocation, kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            location,
            kind,
            text: text.into(),
        }
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Number of columns the token covers.
    pub fn width(&self) -> usize {
        self.text.len()
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    pub fn is_operator(&self, text: &str) -> bool {
        self.is(TokenKind::Operator, text)
    }

    pub fn is_word(&self, text: &str) -> bool {
        self.is(TokenKind::Word, text)
    }
}

impl fmt::Display for Token {
    /// Dump line: kind, 1-based `LINExCOL`, text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<7} {:>3}x{:>3} {}",
            self.kind.label(),
            self.location.line + 1,
            self.location.column + 1,
            self.text
        )
    }
}

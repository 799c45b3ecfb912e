//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and the helpers shared by the
//! grammar modules.
//!
//! # Parser Architecture
//!
//! The Parser is recursive descent over a [`TokenStream`] with one token of
//! lookahead:
//! - This module: Parser struct and token helpers
//! - `types`: type expressions (`map<string, int*[]> const`)
//! - `file`: the `executable`/`package` header every file starts with
//!
//! Parser methods are split across those files using `impl Parser` blocks,
//! each extending the Parser with related functionality while sharing its
//! state. The parser borrows the stream mutably, so tokens it leaves unread
//! stay available to whoever parses next.

use super::cursor::TokenStream;
use super::token::Token;
use crate::env::CompilationEnvironment;
use crate::errors::{Annotation, CompileError};

/// Recursive descent parser for Alpha
pub struct Parser<'a> {
    pub(crate) tokens: &'a mut TokenStream,
    pub(crate) env: &'a CompilationEnvironment,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a mut TokenStream, env: &'a CompilationEnvironment) -> Self {
        Self { tokens, env }
    }

    // ===== Helper methods =====

    /// Consume the next token. Running out is an end-of-file error naming
    /// what was `expected`.
    pub(crate) fn next_token(&mut self, expected: &str) -> Result<Token, CompileError> {
        self.tokens
            .next()
            .cloned()
            .ok_or_else(|| CompileError::UnexpectedEof {
                expected: expected.to_string(),
            })
    }

    pub(crate) fn check_operator(&self, text: &str) -> bool {
        self.tokens.peek().is_some_and(|token| token.is_operator(text))
    }

    pub(crate) fn match_operator(&mut self, text: &str) -> bool {
        if self.check_operator(text) {
            self.tokens.next();
            true
        } else {
            false
        }
    }

    /// "expected X", underlining `token`.
    pub(crate) fn expected_at(what: &str, token: &Token) -> CompileError {
        CompileError::Expected {
            what: what.to_string(),
            annotation: Annotation::At {
                location: token.location,
                width: token.width(),
            },
        }
    }

    /// "expected X", pointing at the token read before the current one.
    pub(crate) fn expected_after_last(&self, what: &str) -> CompileError {
        let location = self.tokens.last().map(Token::location).unwrap_or_default();
        CompileError::Expected {
            what: what.to_string(),
            annotation: Annotation::After { location },
        }
    }
}

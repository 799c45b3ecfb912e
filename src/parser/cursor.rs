//! Sequential reader over a lexed file
//!
//! [`TokenStream`] owns every token of one file and a read cursor. Parsers
//! pull tokens with [`next`](TokenStream::next), look one ahead with
//! [`peek`](TokenStream::peek), and use [`last`](TokenStream::last) to point
//! "expected X" diagnostics at the token before the one just read.

use super::token::Token;
use std::io::{self, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, cursor: 0 }
    }

    /// Token at the cursor, advancing past it.
    pub fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// The token read before the most recent [`next`](Self::next), if any.
    pub fn last(&self) -> Option<&Token> {
        self.cursor
            .checked_sub(2)
            .and_then(|index| self.tokens.get(index))
    }

    /// Turn a `>>` at the cursor into the `>` that remains after its first
    /// character has closed an inner generic argument list. The cursor does
    /// not move, so the outer list reads the remaining `>`.
    ///
    /// Returns `false`, changing nothing, when the cursor is not on `>>`.
    pub fn split_shift_right(&mut self) -> bool {
        match self.tokens.get_mut(self.cursor) {
            Some(token) if token.is_operator(">>") => {
                token.text.truncate(1);
                token.location = token.location.next_column();
                true
            }
            _ => false,
        }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Write every token, one dump line each.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for token in &self.tokens {
            writeln!(out, "{}", token)?;
        }
        Ok(())
    }
}

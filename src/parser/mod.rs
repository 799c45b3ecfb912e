//! Alpha source parser
//!
//! This module turns Alpha source text into tokens and type trees:
//! - [`lexer`]: Tokenization (source text → [`TokenStream`](cursor::TokenStream))
//! - [`cursor`]: next/peek/last access to the tokens
//! - [`parse`]: the [`Parser`](parse::Parser) and its helpers, extended by
//!   `types` (type expressions) and `file` (the file header)
//! - [`ast`]: type and header definitions
//! - [`lint`]: non-fatal checks run between lexing and parsing
//!
//! # Parser Implementation
//!
//! Hand-written scanners and a recursive descent parser.
//! No external parser generator dependencies.

pub mod ast;
pub mod collector;
pub mod cursor;
mod file;
pub mod keywords;
pub mod lexer;
pub mod lint;
pub mod parse;
pub mod primitives;
pub mod token;
mod types;

pub use cursor::TokenStream;
pub use lexer::tokenize;
pub use parse::Parser;
pub use token::{Token, TokenKind};

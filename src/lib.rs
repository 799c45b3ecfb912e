//! # Introduction
//!
//! `alco` is the front end of the Alpha compiler. It reads Alpha source
//! files, splits them into tokens, and parses type expressions and the file
//! header on top of that token stream.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → TokenStream → Parser → Type / SourceFile
//! ```
//!
//! 1. [`source`]: loads a file and indexes its lines.
//! 2. [`parser`]: the lexer, the token cursor, and the recursive descent
//!    parser for types and file headers.
//! 3. [`errors`]: the [`errors::CompileError`] every stage returns.
//! 4. [`diagnostics`]: renders errors and warnings with a source excerpt.
//! 5. [`env`]: target width and warning switches.
//!
//! Every stage stops at the first error and hands it back to the caller;
//! nothing in the library prints or exits.

pub mod diagnostics;
pub mod env;
pub mod errors;
pub mod parser;
pub mod source;

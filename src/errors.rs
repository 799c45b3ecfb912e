//! Compile error types for the Alpha front end
//!
//! This module defines [`CompileError`], which represents every failure the
//! scanner, the type parser and the driver can produce.
//!
//! All compile errors are fatal: the first one aborts the run.  Each variant
//! knows how it should be shown (see [`CompileError::annotation`]); the
//! [`Reporter`](crate::diagnostics::Reporter) turns that into the familiar
//! `FILE:LINE:COL: error:` form with a source excerpt.

use crate::parser::ast::SourceLocation;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Where to point in the source line when reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// Caret at `location`, underline across `width` columns.
    At {
        location: SourceLocation,
        width: usize,
    },
    /// Caret only; used for "expected X" after a previously read token.
    After { location: SourceLocation },
}

impl Annotation {
    pub fn location(&self) -> SourceLocation {
        match self {
            Annotation::At { location, .. } | Annotation::After { location } => *location,
        }
    }
}

#[derive(Debug)]
pub enum CompileError {
    /// File could not be opened or read
    Io { path: PathBuf, source: io::Error },

    /// Scratch buffer could not grow
    OutOfMemory { requested: usize },

    /// Byte that cannot start or continue the current token
    UnexpectedCharacter { ch: u8, location: SourceLocation },

    /// Digit too large for the literal's radix (`0o8`, `0o7a`)
    DigitOutOfRadix {
        ch: u8,
        radix: u32,
        location: SourceLocation,
    },

    /// `e`/`E` in a literal not followed by a sign or a digit
    MalformedExponent { location: SourceLocation },

    /// Alphanumeric character after a literal closed by `f`/`F`
    JunkAfterLiteral { ch: u8, location: SourceLocation },

    /// Extrastandard identifier not starting with `$$`
    ExtraStandardPrefix { ch: u8, location: SourceLocation },

    /// End of line before the closing quote
    UnterminatedString { location: SourceLocation },

    /// End of file inside `/* ... */`; `opened` is the innermost open comment
    UnterminatedComment { opened: SourceLocation },

    /// A specific token was required; `what` is its description
    Expected {
        what: String,
        annotation: Annotation,
    },

    /// Base type name longer than the name buffer allows
    TypeNameTooLong {
        location: SourceLocation,
        width: usize,
        max: usize,
    },

    /// Generic arguments given to a primitive
    ArgumentsOnPrimitive {
        name: String,
        location: SourceLocation,
    },

    /// Token stream ran out; `expected` says what was wanted
    UnexpectedEof { expected: String },

    /// Source file without a single token
    NoCode { file: String },

    /// Rendered pointer/array name does not fit the name buffer
    TypeNameOverflow { name: String },

    /// Driver invoked without any source file
    NoSources,

    /// Driver given a path that is neither `.al` nor `.o`
    UnknownSourceType { path: String },
}

impl CompileError {
    pub fn location(&self) -> Option<SourceLocation> {
        self.annotation().map(|annotation| annotation.location())
    }

    /// How to mark up the source line, or `None` for errors reported
    /// without a source excerpt.
    pub fn annotation(&self) -> Option<Annotation> {
        let at = |location: SourceLocation, width: usize| Some(Annotation::At { location, width });
        match self {
            CompileError::UnexpectedCharacter { location, .. }
            | CompileError::DigitOutOfRadix { location, .. }
            | CompileError::MalformedExponent { location }
            | CompileError::JunkAfterLiteral { location, .. }
            | CompileError::ExtraStandardPrefix { location, .. }
            | CompileError::UnterminatedString { location } => at(*location, 1),
            CompileError::Expected { annotation, .. } => Some(*annotation),
            CompileError::TypeNameTooLong {
                location, width, ..
            } => at(*location, *width),
            CompileError::ArgumentsOnPrimitive { name, location } => at(*location, name.len()),
            CompileError::Io { .. }
            | CompileError::OutOfMemory { .. }
            | CompileError::UnterminatedComment { .. }
            | CompileError::UnexpectedEof { .. }
            | CompileError::NoCode { .. }
            | CompileError::TypeNameOverflow { .. }
            | CompileError::NoSources
            | CompileError::UnknownSourceType { .. } => None,
        }
    }

    /// Errors reported as "unexpected end of file" with no source excerpt.
    pub fn is_end_of_file(&self) -> bool {
        matches!(
            self,
            CompileError::UnterminatedComment { .. } | CompileError::UnexpectedEof { .. }
        )
    }
}

/// Render a byte for a message: the character itself when printable,
/// a `\xNN` escape otherwise.
fn printable(ch: u8) -> String {
    if ch.is_ascii_graphic() || ch == b' ' {
        (ch as char).to_string()
    } else {
        format!("\\x{:02x}", ch)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            CompileError::OutOfMemory { requested } => {
                write!(f, "internal error: out of memory growing a buffer to {} bytes", requested)
            }
            CompileError::UnexpectedCharacter { ch, .. } => {
                write!(f, "unexpected character '{}'", printable(*ch))
            }
            CompileError::DigitOutOfRadix { ch, radix, .. } => {
                write!(f, "unexpected '{}' in base {}", printable(*ch), radix)
            }
            CompileError::MalformedExponent { .. } => {
                write!(f, "expected sign or digit in exponent")
            }
            CompileError::JunkAfterLiteral { ch, .. } => {
                write!(f, "junk '{}' after literal", printable(*ch))
            }
            CompileError::ExtraStandardPrefix { .. } => {
                write!(f, "extrastandard identifier must start with $$")
            }
            CompileError::UnterminatedString { .. } => {
                write!(f, "unexpected end of line while parsing string")
            }
            CompileError::UnterminatedComment { opened } => {
                write!(f, "comment started at {}", opened)
            }
            CompileError::Expected { what, .. } => write!(f, "expected {}", what),
            CompileError::TypeNameTooLong { max, .. } => {
                write!(f, "type name too long - maximum length is {}", max)
            }
            CompileError::ArgumentsOnPrimitive { .. } => {
                write!(f, "only object types may have arguments")
            }
            CompileError::UnexpectedEof { expected } => write!(f, "expected {}", expected),
            CompileError::NoCode { file } => write!(f, "no code in source file {}", file),
            CompileError::TypeNameOverflow { name } => write!(
                f,
                "internal error: type name '{}' is too long for name buffer - sorry...",
                name
            ),
            CompileError::NoSources => write!(f, "no sources to compile"),
            CompileError::UnknownSourceType { path } => {
                write!(f, "unknown source type: {}", path)
            }
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

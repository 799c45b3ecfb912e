//! Source loading
//!
//! A [`SourceText`] owns the complete bytes of one file with a trailing NUL
//! terminator appended, plus the byte offset of every line start.  The
//! terminator lets the scanner look ahead past the last character without
//! bounds checks, and the line index lets the diagnostic reporter pull out
//! "the text of line N" directly.

use crate::errors::CompileError;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SourceText {
    name: String,
    /// File contents followed by a single `0` byte.
    text: Vec<u8>,
    /// Offset of the first byte of each line. Never empty.
    line_starts: Vec<usize>,
}

impl SourceText {
    /// Read `path` completely into memory.
    pub fn load(path: &Path) -> Result<Self, CompileError> {
        let bytes = fs::read(path).map_err(|source| CompileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(path.display().to_string(), bytes))
    }

    pub fn from_bytes(name: impl Into<String>, mut text: Vec<u8>) -> Self {
        let len = text.len();
        text.push(0);

        let mut line_starts = vec![0];
        line_starts.extend(
            text[..len]
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .map(|(pos, _)| pos + 1),
        );

        SourceText {
            name: name.into(),
            text,
            line_starts,
        }
    }

    pub fn from_string(name: impl Into<String>, text: &str) -> Self {
        Self::from_bytes(name, text.as_bytes().to_vec())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical length; the terminator is not counted.
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte at `pos`, or `0` at and beyond the end of the text.
    pub fn byte(&self, pos: usize) -> u8 {
        self.text.get(pos).copied().unwrap_or(0)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of the zero-based line `line`, without its newline.
    pub fn line(&self, line: usize) -> Option<&[u8]> {
        let start = *self.line_starts.get(line)?;
        let rest = &self.text[start..self.len()];
        let end = rest
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

//! Diagnostic rendering
//!
//! Turns [`CompileError`]s and [`Warning`]s into the text printed on stderr:
//!
//! ```text
//! hello.al:3:9: error: unexpected character '#'
//! let x = #;
//!         ^
//! ```
//!
//! Rendering and emitting are separate so tests can inspect the exact text.
//! Only [`Reporter::emit_error`] and [`Reporter::emit_warning`] touch stderr,
//! and only they apply colour.

use crate::errors::{Annotation, CompileError};
use crate::source::SourceText;
use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;
use std::io;

const ERROR_COLOR: Color = Color::Rgb {
    r: 243,
    g: 139,
    b: 168,
};
const WARNING_COLOR: Color = Color::Rgb {
    r: 250,
    g: 179,
    b: 135,
};
const CARET_COLOR: Color = Color::Rgb {
    r: 166,
    g: 227,
    b: 161,
};

/// A non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub annotation: Option<Annotation>,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Warning {
            message: message.into(),
            annotation: None,
        }
    }

    pub fn at(message: impl Into<String>, annotation: Annotation) -> Self {
        Warning {
            message: message.into(),
            annotation: Some(annotation),
        }
    }
}

#[derive(Clone, Copy)]
enum Severity {
    Error,
    Warning,
}

/// Formats diagnostics for one program run, optionally tied to one source file.
pub struct Reporter<'a> {
    program: String,
    source: Option<&'a SourceText>,
    color: bool,
}

impl<'a> Reporter<'a> {
    /// Reporter for non-positional diagnostics. Colour is enabled when stderr
    /// is a terminal.
    pub fn new(program: impl Into<String>) -> Self {
        Reporter {
            program: program.into(),
            source: None,
            color: io::stderr().is_tty(),
        }
    }

    /// Same program and colour setting, reporting against `source`.
    pub fn for_source<'b>(&self, source: &'b SourceText) -> Reporter<'b> {
        Reporter {
            program: self.program.clone(),
            source: Some(source),
            color: self.color,
        }
    }

    pub fn render_error(&self, err: &CompileError) -> String {
        self.render_error_styled(err, false)
    }

    pub fn render_warning(&self, warning: &Warning) -> String {
        self.render_warning_styled(warning, false)
    }

    pub fn emit_error(&self, err: &CompileError) {
        eprintln!("{}", self.render_error_styled(err, self.color));
    }

    pub fn emit_warning(&self, warning: &Warning) {
        eprintln!("{}", self.render_warning_styled(warning, self.color));
    }

    fn render_error_styled(&self, err: &CompileError, color: bool) -> String {
        // Like perror: the message already names the path.
        if let CompileError::Io { .. } = err {
            return format!("{}: {}", self.program, err);
        }
        if err.is_end_of_file() {
            return format!("{}: unexpected end of file: {}", self.file_name(), err);
        }

        let message = err.to_string();
        match err.annotation() {
            Some(annotation) => {
                self.render_positional(Severity::Error, &message, annotation, color)
            }
            None => self.render_plain(Severity::Error, &message, color),
        }
    }

    fn render_warning_styled(&self, warning: &Warning, color: bool) -> String {
        match warning.annotation {
            Some(annotation) => {
                self.render_positional(Severity::Warning, &warning.message, annotation, color)
            }
            None => self.render_plain(Severity::Warning, &warning.message, color),
        }
    }

    fn file_name(&self) -> &str {
        self.source.map_or(self.program.as_str(), |source| source.name())
    }

    fn label(severity: Severity, color: bool) -> String {
        let (text, tint) = match severity {
            Severity::Error => ("error:", ERROR_COLOR),
            Severity::Warning => ("warning:", WARNING_COLOR),
        };
        if color {
            text.with(tint).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// `PROGRAM: error: MESSAGE`
    fn render_plain(&self, severity: Severity, message: &str, color: bool) -> String {
        format!(
            "{}: {} {}",
            self.program,
            Self::label(severity, color),
            message
        )
    }

    /// `FILE:LINE:COL: error: MESSAGE`, then the source line and the caret
    /// line when the source is available.
    fn render_positional(
        &self,
        severity: Severity,
        message: &str,
        annotation: Annotation,
        color: bool,
    ) -> String {
        let location = annotation.location();
        let mut out = format!(
            "{}:{}: {} {}",
            self.file_name(),
            location,
            Self::label(severity, color),
            message
        );

        let line = self.source.and_then(|source| source.line(location.line));
        if let Some(line) = line {
            let (start, stop) = match annotation {
                Annotation::At { location, width } => (location.column, location.column + width),
                Annotation::After { .. } => (0, 0),
            };
            let marks = annotate(line, location.column, start, stop);
            out.push('\n');
            out.push_str(&String::from_utf8_lossy(line));
            out.push('\n');
            if color {
                out.push_str(&marks.with(CARET_COLOR).to_string());
            } else {
                out.push_str(&marks);
            }
        }
        out
    }
}

/// Build the marker line for `line`: `^` at `col`, `~` over `[start, stop)`,
/// tabs copied through so the marks line up, spaces everywhere else.
fn annotate(line: &[u8], col: usize, start: usize, stop: usize) -> String {
    let width = line.len().max(col + 1);
    let mut marks = String::with_capacity(width);
    for i in 0..width {
        let is_tab = line.get(i) == Some(&b'\t');
        let mark = if i == col {
            '^'
        } else if is_tab {
            '\t'
        } else if i >= start && i < stop {
            '~'
        } else {
            ' '
        };
        marks.push(mark);
    }
    marks.truncate(marks.trim_end().len());
    marks
}

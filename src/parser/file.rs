//! File header parsing

use super::ast::SourceFile;
use super::keywords::is_keyword;
use super::parse::Parser;
use super::token::TokenKind;
use crate::errors::CompileError;

impl<'a> Parser<'a> {
    /// Parse the `executable NAME;` or `package NAME;` line. `file` names the
    /// source in the error for a file with no tokens at all.
    ///
    /// Everything after the `;` is left in the stream.
    pub fn parse_file(&mut self, file: &str) -> Result<SourceFile, CompileError> {
        let first = self
            .tokens
            .next()
            .cloned()
            .ok_or_else(|| CompileError::NoCode {
                file: file.to_string(),
            })?;

        let is_executable = if first.is_word("executable") {
            true
        } else if first.is_word("package") {
            false
        } else {
            return Err(Self::expected_at("'package' or 'executable'", &first));
        };

        let name = self.next_token("name")?;
        if name.kind != TokenKind::Word || is_keyword(&name.text, true) {
            return Err(Self::expected_at("name", &name));
        }

        let terminator = self.next_token(";")?;
        if !terminator.is_operator(";") {
            return Err(self.expected_after_last(";"));
        }

        Ok(SourceFile {
            name: name.text,
            is_executable,
            location: first.location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CompilationEnvironment;
    use crate::errors::Annotation;
    use crate::parser::ast::SourceLocation;
    use crate::parser::lexer::tokenize;
    use crate::source::SourceText;

    fn header(text: &str) -> Result<SourceFile, CompileError> {
        let mut stream = tokenize(&SourceText::from_string("t.al", text))?;
        let env = CompilationEnvironment::default();
        Parser::new(&mut stream, &env).parse_file("t.al")
    }

    #[test]
    fn test_executable_and_package() {
        let file = header("executable hello;").unwrap();
        assert!(file.is_executable);
        assert_eq!(file.name, "hello");
        assert_eq!(file.to_string(), "(executable \"hello\")");

        let file = header("// lib\npackage util ;").unwrap();
        assert!(!file.is_executable);
        assert_eq!(file.location, SourceLocation::new(1, 0));
    }

    #[test]
    fn test_rest_of_file_stays_in_stream() {
        let mut stream = tokenize(&SourceText::from_string("t.al", "package p; let")).unwrap();
        let env = CompilationEnvironment::default();
        Parser::new(&mut stream, &env).parse_file("t.al").unwrap();
        assert!(stream.peek().unwrap().is_word("let"));
    }

    #[test]
    fn test_empty_file() {
        let err = header("  /* nothing */ ").unwrap_err();
        assert!(matches!(err, CompileError::NoCode { ref file } if file == "t.al"));
        assert_eq!(err.to_string(), "no code in source file t.al");
    }

    #[test]
    fn test_bad_header_word() {
        let err = header("library x;").unwrap_err();
        assert_eq!(err.to_string(), "expected 'package' or 'executable'");
        assert_eq!(
            err.annotation(),
            Some(Annotation::At {
                location: SourceLocation::new(0, 0),
                width: 7
            })
        );
    }

    #[test]
    fn test_bad_name() {
        for text in ["package while;", "package int;", "package 12;", "package \"x\";"] {
            let err = header(text).unwrap_err();
            assert_eq!(err.to_string(), "expected name", "{}", text);
        }
        assert!(header("package").unwrap_err().is_end_of_file());
    }

    #[test]
    fn test_missing_semicolon() {
        let err = header("executable hello\nlet").unwrap_err();
        assert_eq!(err.to_string(), "expected ;");
        assert_eq!(
            err.annotation(),
            Some(Annotation::After {
                location: SourceLocation::new(0, 11)
            })
        );

        assert!(header("executable hello").unwrap_err().is_end_of_file());
    }
}

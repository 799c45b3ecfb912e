//! Lexer (tokenizer) for Alpha source code
//!
//! Converts a loaded [`SourceText`] into a [`TokenStream`] consumed by the
//! parser. The whole file is scanned up front; the first malformed token
//! ends the scan with a [`CompileError`] pointing at the offending byte.
//!
//! Token text is copied out of the source verbatim. Numbers keep their radix
//! prefix and type suffix, strings keep their quotes and escapes. Turning
//! that text into values is left to later stages.

use super::ast::SourceLocation;
use super::collector::Collector;
use super::cursor::TokenStream;
use super::token::{Token, TokenKind};
use crate::errors::CompileError;
use crate::source::SourceText;

/// Scan `source` completely.
pub fn tokenize(source: &SourceText) -> Result<TokenStream, CompileError> {
    Lexer::new(source).tokenize()
}

/// States of the numeric literal scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    PrePoint,
    PostPoint,
    Exponent,
    ExpoFirstDigit,
    ExpoMoreDigits,
    RadixIntOnly,
    TypeSuffix,
    MustStop,
}

/// Lexer for Alpha source code
pub struct Lexer<'a> {
    source: &'a SourceText,
    position: usize,
    line: usize,
    column: usize,
    collector: Collector,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a SourceText) -> Self {
        Self {
            source,
            position: 0,
            line: 0,
            column: 0,
            collector: Collector::new(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Result<TokenStream, CompileError> {
        while !self.is_at_end() {
            match self.peek() {
                b' ' | b'\t' | 0x0b | 0x0c | b'\r' | b'\n' => {
                    self.advance();
                }
                b'0'..=b'9' => self.number()?,
                b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'@' => self.word()?,
                b'$' => self.extrastandard()?,
                b'/' => self.operator_or_comment()?,
                b'"' => self.string()?,
                ch if is_operator_start(ch) => self.operator()?,
                ch => {
                    return Err(CompileError::UnexpectedCharacter {
                        ch,
                        location: self.current_location(),
                    })
                }
            }
        }

        Ok(TokenStream::new(self.tokens))
    }

    /// Numeric literal: decimal with optional fraction and exponent, or a
    /// `0x`/`0o` integer, optionally closed by `f` or a `:type` suffix.
    fn number(&mut self) -> Result<(), CompileError> {
        use NumberState::*;

        let start = self.current_location();
        let mut state = PrePoint;
        let mut radix = 10;
        let mut is_real = false;
        let mut suffix_len = 0;

        if self.peek() == b'0' {
            radix = match self.peek_ahead(1) {
                b'x' | b'X' => 16,
                b'o' | b'O' => 8,
                _ => 10,
            };
            if radix != 10 {
                self.take()?;
                self.take()?;
                state = RadixIntOnly;
            }
        }

        loop {
            let ch = self.peek();

            state = match state {
                PrePoint => match ch {
                    b'0'..=b'9' => PrePoint,
                    b'.' => {
                        is_real = true;
                        PostPoint
                    }
                    b'e' | b'E' => {
                        is_real = true;
                        Exponent
                    }
                    b'f' | b'F' => {
                        is_real = true;
                        MustStop
                    }
                    b':' => TypeSuffix,
                    _ => break,
                },
                PostPoint => match ch {
                    b'0'..=b'9' => PostPoint,
                    b'e' | b'E' => Exponent,
                    b'f' | b'F' => MustStop,
                    _ => break,
                },
                Exponent => match ch {
                    b'+' | b'-' => ExpoFirstDigit,
                    b'0'..=b'9' => ExpoMoreDigits,
                    _ => {
                        return Err(CompileError::MalformedExponent {
                            location: self.current_location(),
                        })
                    }
                },
                ExpoFirstDigit => match ch {
                    b'0'..=b'9' => ExpoMoreDigits,
                    _ => {
                        return Err(CompileError::MalformedExponent {
                            location: self.current_location(),
                        })
                    }
                },
                ExpoMoreDigits => match ch {
                    b'0'..=b'9' => ExpoMoreDigits,
                    b'f' | b'F' => MustStop,
                    b':' => TypeSuffix,
                    _ => break,
                },
                RadixIntOnly => match (ch as char).to_digit(16) {
                    Some(digit) if digit < radix => RadixIntOnly,
                    Some(_) => {
                        return Err(CompileError::DigitOutOfRadix {
                            ch,
                            radix,
                            location: self.current_location(),
                        })
                    }
                    None if ch == b':' => TypeSuffix,
                    None => break,
                },
                TypeSuffix => match ch {
                    b'f' | b'd' if suffix_len == 0 => {
                        is_real = true;
                        suffix_len += 1;
                        TypeSuffix
                    }
                    c if c.is_ascii_alphanumeric() => {
                        suffix_len += 1;
                        TypeSuffix
                    }
                    _ => break,
                },
                MustStop => {
                    if ch.is_ascii_alphanumeric() || ch == b'_' {
                        return Err(CompileError::JunkAfterLiteral {
                            ch,
                            location: self.current_location(),
                        });
                    }
                    break;
                }
            };
            self.take()?;
        }

        let kind = if is_real {
            TokenKind::Real
        } else {
            TokenKind::Int
        };
        self.emit(start, kind);
        Ok(())
    }

    /// Identifier, optionally marked with a leading `@`.
    fn word(&mut self) -> Result<(), CompileError> {
        let start = self.current_location();

        if self.peek() == b'@' {
            self.take()?;
            if self.peek().is_ascii_digit() {
                return Err(self.unexpected());
            }
        }

        loop {
            match self.peek() {
                b'@' => return Err(self.unexpected()),
                ch if ch.is_ascii_alphanumeric() || ch == b'_' => self.take()?,
                _ => break,
            }
        }

        self.emit(start, TokenKind::Word);
        Ok(())
    }

    /// `$$name`
    fn extrastandard(&mut self) -> Result<(), CompileError> {
        let start = self.current_location();

        for _ in 0..2 {
            let ch = self.peek();
            if ch != b'$' {
                return Err(CompileError::ExtraStandardPrefix {
                    ch,
                    location: self.current_location(),
                });
            }
            self.take()?;
        }

        if self.peek().is_ascii_digit() {
            return Err(self.unexpected());
        }
        while self.peek().is_ascii_alphanumeric() || self.peek() == b'_' {
            self.take()?;
        }

        self.emit(start, TokenKind::ExtraStandard);
        Ok(())
    }

    fn operator_or_comment(&mut self) -> Result<(), CompileError> {
        match self.peek_ahead(1) {
            b'/' => {
                self.skip_line_comment();
                Ok(())
            }
            b'*' => self.skip_block_comment(),
            _ => self.operator(),
        }
    }

    /// Skip single-line comment (// ...), leaving the newline
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != b'\n' {
            self.advance();
        }
    }

    /// Skip a block comment, including any nested inside it.
    ///
    /// If the file ends first, the error names the innermost comment still
    /// open at that point.
    fn skip_block_comment(&mut self) -> Result<(), CompileError> {
        let mut open = vec![self.current_location()];
        self.advance();
        self.advance();

        while let Some(&innermost) = open.last() {
            if self.is_at_end() {
                return Err(CompileError::UnterminatedComment { opened: innermost });
            }
            match (self.peek(), self.peek_ahead(1)) {
                (b'/', b'*') => {
                    open.push(self.current_location());
                    self.advance();
                    self.advance();
                }
                (b'*', b'/') => {
                    open.pop();
                    self.advance();
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
        Ok(())
    }

    /// Operator or punctuation, longest match first.
    fn operator(&mut self) -> Result<(), CompileError> {
        let start = self.current_location();
        let lexeme = match_operator(self.peek(), self.peek_ahead(1), self.peek_ahead(2))
            .ok_or_else(|| self.unexpected())?;

        self.collector.push_str(lexeme)?;
        for _ in 0..lexeme.len() {
            self.advance();
        }
        self.emit(start, TokenKind::Operator);
        Ok(())
    }

    /// String literal, quotes included. Strings end at the first `"` not
    /// preceded by an odd run of backslashes and may not cross a line.
    fn string(&mut self) -> Result<(), CompileError> {
        let start = self.current_location();
        self.take()?;

        let mut in_escape = false;
        loop {
            let ch = self.peek();
            if self.is_at_end() || ch == b'\n' {
                return Err(CompileError::UnterminatedString { location: start });
            }
            if !(b' '..=b'~').contains(&ch) {
                return Err(self.unexpected());
            }
            self.take()?;

            if ch == b'"' && !in_escape {
                break;
            }
            in_escape = ch == b'\\' && !in_escape;
        }

        self.emit(start, TokenKind::String);
        Ok(())
    }

    // ===== Helpers =====

    fn emit(&mut self, location: SourceLocation, kind: TokenKind) {
        let text = self.collector.snapshot();
        self.collector.clear();
        self.tokens.push(Token::new(location, kind, text));
    }

    /// Append the current byte to the token text and move past it.
    fn take(&mut self) -> Result<(), CompileError> {
        self.collector.push(self.peek())?;
        self.advance();
        Ok(())
    }

    fn unexpected(&self) -> CompileError {
        CompileError::UnexpectedCharacter {
            ch: self.peek(),
            location: self.current_location(),
        }
    }

    fn peek(&self) -> u8 {
        self.source.byte(self.position)
    }

    fn peek_ahead(&self, n: usize) -> u8 {
        self.source.byte(self.position + n)
    }

    fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        if self.peek() == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

fn is_operator_start(ch: u8) -> bool {
    matches!(
        ch,
        b'+' | b'-'
            | b'~'
            | b'*'
            | b'%'
            | b'<'
            | b'>'
            | b'&'
            | b'^'
            | b'|'
            | b'!'
            | b'='
            | b'('
            | b')'
            | b'['
            | b']'
            | b'{'
            | b'}'
            | b','
            | b';'
            | b':'
            | b'.'
            | b'?'
            | b'/'
    )
}

/// The longest operator spelled by the next three bytes.
fn match_operator(c1: u8, c2: u8, c3: u8) -> Option<&'static str> {
    let lexeme = match (c1, c2, c3) {
        (b'/', b'=', _) => "/=",
        (b'/', _, _) => "/",
        (b'+', b'+', _) => "++",
        (b'+', b'=', _) => "+=",
        (b'+', _, _) => "+",
        (b'-', b'-', _) => "--",
        (b'-', b'=', _) => "-=",
        (b'-', _, _) => "-",
        (b'~', _, _) => "~",
        (b'*', b'=', _) => "*=",
        (b'*', _, _) => "*",
        (b'%', b'%', b'=') => "%%=",
        (b'%', b'%', _) => "%%",
        (b'%', b'=', _) => "%=",
        (b'%', _, _) => "%",
        (b'<', b'<', b'=') => "<<=",
        (b'<', b'<', _) => "<<",
        (b'<', b'=', _) => "<=",
        (b'<', _, _) => "<",
        (b'>', b'>', b'=') => ">>=",
        (b'>', b'>', _) => ">>",
        (b'>', b'=', _) => ">=",
        (b'>', _, _) => ">",
        (b'&', b'&', _) => "&&",
        (b'&', b'=', _) => "&=",
        (b'&', _, _) => "&",
        (b'^', b'=', _) => "^=",
        (b'^', _, _) => "^",
        (b'|', b'|', _) => "||",
        (b'|', b'=', _) => "|=",
        (b'|', _, _) => "|",
        (b'!', b'=', b'=') => "!==",
        (b'!', b'=', _) => "!=",
        (b'!', _, _) => "!",
        (b'=', b'=', b'=') => "===",
        (b'=', b'=', _) => "==",
        (b'=', _, _) => "=",
        (b'(', _, _) => "(",
        (b')', _, _) => ")",
        (b'[', _, _) => "[",
        (b']', _, _) => "]",
        (b'{', _, _) => "{",
        (b'}', _, _) => "}",
        (b',', _, _) => ",",
        (b':', b'=', _) => ":=",
        (b':', _, _) => ":",
        (b';', _, _) => ";",
        (b'.', b'.', b'.') => "...",
        (b'.', _, _) => ".",
        (b'?', _, _) => "?",
        _ => return None,
    };
    Some(lexeme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(text: &str) -> Result<TokenStream, CompileError> {
        tokenize(&SourceText::from_string("test.al", text))
    }

    fn kinds_and_texts(text: &str) -> Vec<(TokenKind, String)> {
        lex(text)
            .unwrap()
            .tokens()
            .iter()
            .map(|t| (t.kind, t.text.clone()))
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let stream = lex("executable hello;\nlet x = 1;").unwrap();
        let tokens = stream.tokens();

        assert!(matches!(&tokens[0], t if t.is_word("executable")));
        assert!(matches!(&tokens[1], t if t.is_word("hello")));
        assert!(matches!(&tokens[2], t if t.is_operator(";")));
        assert!(matches!(&tokens[3], t if t.is_word("let")));
        assert!(matches!(&tokens[6], t if t.is(TokenKind::Int, "1")));
        assert_eq!(tokens.len(), 8);

        assert_eq!(tokens[0].location, SourceLocation::new(0, 0));
        assert_eq!(tokens[1].location, SourceLocation::new(0, 11));
        assert_eq!(tokens[3].location, SourceLocation::new(1, 0));
        assert_eq!(tokens[5].location, SourceLocation::new(1, 6));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds_and_texts("0x1A 0o17 42 0.5e-3f 1e9 2.5 7f 3:u32 4:f64 2e3:d"),
            vec![
                (TokenKind::Int, "0x1A".to_string()),
                (TokenKind::Int, "0o17".to_string()),
                (TokenKind::Int, "42".to_string()),
                (TokenKind::Real, "0.5e-3f".to_string()),
                (TokenKind::Real, "1e9".to_string()),
                (TokenKind::Real, "2.5".to_string()),
                (TokenKind::Real, "7f".to_string()),
                (TokenKind::Int, "3:u32".to_string()),
                (TokenKind::Real, "4:f64".to_string()),
                (TokenKind::Real, "2e3:d".to_string()),
            ]
        );
    }

    #[test]
    fn test_number_ends_at_terminator() {
        assert_eq!(
            kinds_and_texts("1.5:d x+1"),
            vec![
                (TokenKind::Real, "1.5".to_string()),
                (TokenKind::Operator, ":".to_string()),
                (TokenKind::Word, "d".to_string()),
                (TokenKind::Word, "x".to_string()),
                (TokenKind::Operator, "+".to_string()),
                (TokenKind::Int, "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_colon_always_opens_suffix() {
        assert_eq!(
            kinds_and_texts("7:2 0x1F:"),
            vec![
                (TokenKind::Int, "7:2".to_string()),
                (TokenKind::Int, "0x1F:".to_string()),
            ]
        );
        assert_eq!(
            kinds_and_texts("case 1:"),
            vec![
                (TokenKind::Word, "case".to_string()),
                (TokenKind::Int, "1:".to_string()),
            ]
        );
    }

    #[test]
    fn test_number_errors() {
        assert!(matches!(
            lex("3.2f9"),
            Err(CompileError::JunkAfterLiteral { ch: b'9', location }) if location.column == 4
        ));
        assert!(matches!(
            lex("0o78"),
            Err(CompileError::DigitOutOfRadix { ch: b'8', radix: 8, .. })
        ));
        assert!(matches!(
            lex("1e+x"),
            Err(CompileError::MalformedExponent { location }) if location.column == 3
        ));
        assert!(matches!(
            lex("1ex"),
            Err(CompileError::MalformedExponent { .. })
        ));
    }

    #[test]
    fn test_words() {
        assert_eq!(
            kinds_and_texts("@main _x9 abc"),
            vec![
                (TokenKind::Word, "@main".to_string()),
                (TokenKind::Word, "_x9".to_string()),
                (TokenKind::Word, "abc".to_string()),
            ]
        );
        assert!(matches!(
            lex("a@b"),
            Err(CompileError::UnexpectedCharacter { ch: b'@', location }) if location.column == 1
        ));
        assert!(matches!(
            lex("@1x"),
            Err(CompileError::UnexpectedCharacter { ch: b'1', .. })
        ));
    }

    #[test]
    fn test_extrastandard() {
        assert_eq!(
            kinds_and_texts("$$cos_2"),
            vec![(TokenKind::ExtraStandard, "$$cos_2".to_string())]
        );
        assert!(matches!(
            lex("$x"),
            Err(CompileError::ExtraStandardPrefix { ch: b'x', .. })
        ));
        assert!(matches!(
            lex("$$9"),
            Err(CompileError::UnexpectedCharacter { ch: b'9', .. })
        ));
    }

    #[test]
    fn test_operators_longest_match() {
        let texts: Vec<String> = kinds_and_texts("!== != ! >>= >> ... . %%= :=")
            .into_iter()
            .map(|(_, text)| text)
            .collect();
        assert_eq!(
            texts,
            vec!["!==", "!=", "!", ">>=", ">>", "...", ".", "%%=", ":="]
        );
    }

    #[test]
    fn test_comments() {
        let stream = lex("a // line\nb /* x /* nested */ y */ c").unwrap();
        let words: Vec<&str> = stream.tokens().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
        assert_eq!(stream.tokens()[1].location, SourceLocation::new(1, 0));

        assert!(lex("/* a /* b */ c */").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_comment_cites_innermost_opener() {
        assert!(matches!(
            lex("x /* a"),
            Err(CompileError::UnterminatedComment { opened }) if opened == SourceLocation::new(0, 2)
        ));
        assert!(matches!(
            lex("/* a\n  /* b */\n /* c"),
            Err(CompileError::UnterminatedComment { opened }) if opened == SourceLocation::new(2, 1)
        ));
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            kinds_and_texts(r#""a\"b" "c\\""#),
            vec![
                (TokenKind::String, r#""a\"b""#.to_string()),
                (TokenKind::String, r#""c\\""#.to_string()),
            ]
        );
        assert!(matches!(
            lex("x = \"abc\ny"),
            Err(CompileError::UnterminatedString { location }) if location.column == 4
        ));
        assert!(matches!(
            lex("\"abc"),
            Err(CompileError::UnterminatedString { .. })
        ));
        assert!(matches!(
            lex("\"a\tb\""),
            Err(CompileError::UnexpectedCharacter { ch: b'\t', .. })
        ));
    }

    #[test]
    fn test_unexpected_character() {
        assert!(matches!(
            lex("x\n  #"),
            Err(CompileError::UnexpectedCharacter { ch: b'#', location }) if location == SourceLocation::new(1, 2)
        ));
        assert!(matches!(
            lex("`"),
            Err(CompileError::UnexpectedCharacter { ch: b'`', .. })
        ));
    }
}

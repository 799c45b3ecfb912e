//! Non-fatal checks over a lexed file

use super::cursor::TokenStream;
use super::token::{Token, TokenKind};
use crate::diagnostics::Warning;
use crate::env::WarningFlags;
use crate::errors::Annotation;

/// Warnings for every enabled check, in source order.
pub fn check_tokens(tokens: &TokenStream, flags: &WarningFlags) -> Vec<Warning> {
    if !flags.octalish {
        return Vec::new();
    }
    tokens
        .tokens()
        .iter()
        .filter(|token| looks_octal(token))
        .map(octalish_warning)
        .collect()
}

/// `0` followed by more decimal digits, like `0755`.
fn looks_octal(token: &Token) -> bool {
    token.kind == TokenKind::Int
        && token.text.len() > 1
        && token.text.starts_with('0')
        && token.text.bytes().all(|b| b.is_ascii_digit())
}

fn octalish_warning(token: &Token) -> Warning {
    let digits = token.text.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    Warning::at(
        format!(
            "'{}' looks octal but is decimal in Alpha; use 0o{} for octal",
            token.text, digits
        ),
        Annotation::At {
            location: token.location,
            width: token.width(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;
    use crate::source::SourceText;

    fn warnings(text: &str, octalish: bool) -> Vec<Warning> {
        let stream = tokenize(&SourceText::from_string("t.al", text)).unwrap();
        check_tokens(&stream, &WarningFlags { octalish })
    }

    #[test]
    fn test_octal_looking_literal() {
        let found = warnings("x = 0755 + 0 + 10 + 0o17 + 0.5;", true);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].message,
            "'0755' looks octal but is decimal in Alpha; use 0o755 for octal"
        );
        assert!(matches!(
            found[0].annotation,
            Some(Annotation::At { width: 4, location }) if location.column == 4
        ));
    }

    #[test]
    fn test_disabled() {
        assert!(warnings("x = 0755;", false).is_empty());
    }
}

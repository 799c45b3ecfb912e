// Integration tests for the Alpha lexer

use alco::errors::CompileError;
use alco::parser::{tokenize, TokenKind, TokenStream};
use alco::source::SourceText;
use proptest::prelude::*;
use rstest::rstest;

fn lex(text: &str) -> Result<TokenStream, CompileError> {
    tokenize(&SourceText::from_string("test.al", text))
}

fn single(text: &str) -> (TokenKind, String) {
    let stream = lex(text).unwrap_or_else(|e| panic!("{:?} failed to lex: {}", text, e));
    assert_eq!(stream.len(), 1, "{:?} gave {:?}", text, stream.tokens());
    let token = &stream.tokens()[0];
    (token.kind, token.text.clone())
}

#[rstest]
#[case("/")]
#[case("/=")]
#[case("++")]
#[case("-=")]
#[case("~")]
#[case("*=")]
#[case("%%")]
#[case("%%=")]
#[case("<<=")]
#[case("<=")]
#[case(">>")]
#[case(">>=")]
#[case("&&")]
#[case("^=")]
#[case("||")]
#[case("|=")]
#[case("!")]
#[case("!==")]
#[case("===")]
#[case(":=")]
#[case("...")]
#[case("?")]
fn test_single_operator(#[case] op: &str) {
    assert_eq!(single(op), (TokenKind::Operator, op.to_string()));
}

#[rstest]
#[case("<<<", &["<<", "<"])]
#[case("!===", &["!==", "="])]
#[case("..", &[".", "."])]
#[case("+++", &["++", "+"])]
#[case("a>>=b", &["a", ">>=", "b"])]
#[case("x/y", &["x", "/", "y"])]
fn test_maximal_munch(#[case] text: &str, #[case] expected: &[&str]) {
    let stream = lex(text).unwrap();
    let texts: Vec<&str> = stream.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, expected);
}

#[rstest]
#[case("0x1A", TokenKind::Int)]
#[case("0XfF", TokenKind::Int)]
#[case("0o755", TokenKind::Int)]
#[case("0.5e-3f", TokenKind::Real)]
#[case("12E+4", TokenKind::Real)]
#[case("9:u8", TokenKind::Int)]
#[case("9:f32", TokenKind::Real)]
#[case("0x10:u64", TokenKind::Int)]
#[case("7:2", TokenKind::Int)]
#[case("1:", TokenKind::Int)]
#[case("1e5:", TokenKind::Real)]
fn test_number_kinds(#[case] text: &str, #[case] kind: TokenKind) {
    assert_eq!(single(text), (kind, text.to_string()));
}

#[test]
fn test_junk_after_stopped_literal() {
    assert!(matches!(
        lex("3.2f9"),
        Err(CompileError::JunkAfterLiteral { ch: b'9', .. })
    ));
}

#[test]
fn test_nested_comment_balanced() {
    assert!(lex("/* a /* b */ c */").unwrap().is_empty());
}

#[test]
fn test_escaped_quote_in_string() {
    assert_eq!(
        single(r#""a\"b""#),
        (TokenKind::String, r#""a\"b""#.to_string())
    );
}

#[test]
fn test_single_dollar_is_error() {
    assert!(matches!(
        lex("$"),
        Err(CompileError::ExtraStandardPrefix { .. })
    ));
    assert!(matches!(
        lex("$x"),
        Err(CompileError::ExtraStandardPrefix { ch: b'x', .. })
    ));
}

#[test]
fn test_positions_across_lines() {
    let stream = lex("a\n\n   bb /* x\n y */ c").unwrap();
    let positions: Vec<(usize, usize)> = stream
        .tokens()
        .iter()
        .map(|t| (t.location.line, t.location.column))
        .collect();
    assert_eq!(positions, vec![(0, 0), (2, 3), (3, 6)]);
}

fn decimal_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}(f|:[a-z0-9]{0,4})?",
        "[0-9]{1,6}\\.[0-9]{1,4}f?",
        "[0-9]{1,6}(\\.[0-9]{1,4})?[eE][+-]?[0-9]{1,3}(f|:[a-z0-9]{0,4})?",
    ]
}

fn radix_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        "0[xX][0-9a-fA-F]{1,6}(:[a-z][a-z0-9]{0,3})?",
        "0[oO][0-7]{1,6}(:[a-z][a-z0-9]{0,3})?",
    ]
}

proptest! {
    #[test]
    fn prop_identifier_is_one_word(word in "@?[A-Za-z_][A-Za-z0-9_]{0,20}") {
        let (kind, text) = single(&word);
        prop_assert_eq!(kind, TokenKind::Word);
        prop_assert_eq!(text, word);
    }

    #[test]
    fn prop_extrastandard_is_one_token(word in "\\$\\$[A-Za-z_][A-Za-z0-9_]{0,20}") {
        let (kind, text) = single(&word);
        prop_assert_eq!(kind, TokenKind::ExtraStandard);
        prop_assert_eq!(text, word);
    }

    #[test]
    fn prop_number_rescan_is_identical(literal in prop_oneof![decimal_literal(), radix_literal()]) {
        let first = single(&literal);
        prop_assert_eq!(&first.1, &literal);

        let again = single(&first.1);
        prop_assert_eq!(again, first);
    }

    #[test]
    fn prop_words_separated_by_spaces(words in prop::collection::vec("[a-z_][a-z0-9_]{0,8}", 1..10)) {
        let text = words.join("  ");
        let stream = lex(&text).unwrap();
        let texts: Vec<String> = stream.tokens().iter().map(|t| t.text.clone()).collect();
        prop_assert_eq!(texts, words);
    }
}

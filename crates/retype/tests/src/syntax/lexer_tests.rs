use super::*;

fn lex(input: &str) -> Vec<(SyntaxKind, &str)> {
    Lexer::new(input).collect()
}

#[test]
fn test_keywords() {
    let input = "type struct func";
    let tokens = lex(input);
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::KwType, "type"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::KwStruct, "struct"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::KwFunc, "func"),
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = lex("structure mapping");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Ident, "structure"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Ident, "mapping"),
        ]
    );
}

#[test]
fn test_punctuation() {
    let input = "{ } ( ) [ ] ; ...";
    let tokens = lex(input);
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::LBrace, "{"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::RBrace, "}"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::LParen, "("),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::RParen, ")"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::LBracket, "["),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::RBracket, "]"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Semicolon, ";"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Ellipsis, "..."),
        ]
    );
}

#[test]
fn test_identifiers_and_literals() {
    let input = "main 123 3.14 2i 'x' \"hello\"";
    let tokens = lex(input);
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Ident, "main"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Integer, "123"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Float, "3.14"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Imaginary, "2i"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Rune, "'x'"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::String, "\"hello\""),
        ]
    );
}

#[test]
fn test_raw_string_spans_lines() {
    let tokens = lex("`json:\"a\"\nb`");
    assert_eq!(tokens, vec![(SyntaxKind::RawString, "`json:\"a\"\nb`")]);
}

#[test]
fn test_unicode_identifier() {
    let tokens = lex("größe");
    assert_eq!(tokens, vec![(SyntaxKind::Ident, "größe")]);
}

#[test]
fn test_operators() {
    let input = "a := <-ch &^ b";
    let tokens = lex(input);
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Ident, "a"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Define, ":="),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Arrow, "<-"),
            (SyntaxKind::Ident, "ch"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::AmpCaret, "&^"),
            (SyntaxKind::Whitespace, " "),
            (SyntaxKind::Ident, "b"),
        ]
    );
}

#[test]
fn test_comments() {
    let tokens = lex("// line\n/* block */");
    assert_eq!(
        tokens,
        vec![
            (SyntaxKind::Comment, "// line"),
            (SyntaxKind::Whitespace, "\n"),
            (SyntaxKind::Comment, "/* block */"),
        ]
    );
}

#[test]
fn test_error() {
    let input = "$";
    let tokens = lex(input);
    assert_eq!(tokens, vec![(SyntaxKind::Error, "$")]);
}

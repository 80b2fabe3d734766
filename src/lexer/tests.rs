//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - Single- and two-character operators
//! - Illegal characters and the end-of-input tail

use super::{
    lexer::Lexer,
    tokens::{lookup_identifier, TokenKind},
};

fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let mut lexer = Lexer::new(source);

    for (i, (kind, value)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "token {} of {:?}", i, source);
        assert_eq!(token.value, *value, "token {} of {:?}", i, source);
    }

    let tail = lexer.next_token();
    assert_eq!(tail.kind, TokenKind::EOF, "tail of {:?}", source);
    assert_eq!(tail.value, "");
}

#[test]
fn test_next_token_representative_program() {
    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
  return true;
} else {
  return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
"#;

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Number, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Number, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Number, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Number, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Number, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Number, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Number, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Number, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Number, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Number, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Number, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Number, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::String, "foobar"),
        (TokenKind::String, "foo bar"),
        (TokenKind::OpenBracket, "["),
        (TokenKind::Number, "1"),
        (TokenKind::Comma, ","),
        (TokenKind::Number, "2"),
        (TokenKind::CloseBracket, "]"),
        (TokenKind::Semicolon, ";"),
    ];

    assert_tokens(source, &expected);
}

#[test]
fn test_single_character_operators() {
    assert_tokens(
        "+-*/<>(){}[],;",
        &[
            (TokenKind::Plus, "+"),
            (TokenKind::Dash, "-"),
            (TokenKind::Star, "*"),
            (TokenKind::Slash, "/"),
            (TokenKind::Less, "<"),
            (TokenKind::Greater, ">"),
            (TokenKind::OpenParen, "("),
            (TokenKind::CloseParen, ")"),
            (TokenKind::OpenCurly, "{"),
            (TokenKind::CloseCurly, "}"),
            (TokenKind::OpenBracket, "["),
            (TokenKind::CloseBracket, "]"),
            (TokenKind::Comma, ","),
            (TokenKind::Semicolon, ";"),
        ],
    );
}

#[test]
fn test_two_character_operators_match_greedily() {
    assert_tokens("==", &[(TokenKind::Equals, "==")]);
    assert_tokens("!=", &[(TokenKind::NotEquals, "!=")]);
    assert_tokens("=", &[(TokenKind::Assignment, "=")]);
    assert_tokens("!", &[(TokenKind::Not, "!")]);

    // A separating space defeats the greedy match.
    assert_tokens(
        "= =",
        &[
            (TokenKind::Assignment, "="),
            (TokenKind::Assignment, "="),
        ],
    );
    assert_tokens(
        "==!=",
        &[(TokenKind::Equals, "=="), (TokenKind::NotEquals, "!=")],
    );
    assert_tokens(
        "===",
        &[(TokenKind::Equals, "=="), (TokenKind::Assignment, "=")],
    );
    assert_tokens(
        "!==",
        &[(TokenKind::NotEquals, "!="), (TokenKind::Assignment, "=")],
    );
}

#[test]
fn test_eof_tail_is_idempotent() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_empty_input_yields_eof() {
    assert_tokens("", &[]);
    assert_tokens("   \t\r\n  ", &[]);
}

#[test]
fn test_keywords_and_identifiers() {
    assert_tokens(
        "fn let if else true false return",
        &[
            (TokenKind::Fn, "fn"),
            (TokenKind::Let, "let"),
            (TokenKind::If, "if"),
            (TokenKind::Else, "else"),
            (TokenKind::True, "true"),
            (TokenKind::False, "false"),
            (TokenKind::Return, "return"),
        ],
    );

    // Near-keywords stay plain identifiers.
    assert_tokens(
        "lets fnord truthy _private iff",
        &[
            (TokenKind::Identifier, "lets"),
            (TokenKind::Identifier, "fnord"),
            (TokenKind::Identifier, "truthy"),
            (TokenKind::Identifier, "_private"),
            (TokenKind::Identifier, "iff"),
        ],
    );
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("fn"), TokenKind::Fn);
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("foobar"), TokenKind::Identifier);
    assert_eq!(lookup_identifier(""), TokenKind::Identifier);
}

#[test]
fn test_string_literals() {
    assert_tokens("\"foobar\"", &[(TokenKind::String, "foobar")]);
    assert_tokens("\"foo bar\"", &[(TokenKind::String, "foo bar")]);
    assert_tokens("\"\"", &[(TokenKind::String, "")]);

    // No escape processing: the backslash is kept verbatim.
    assert_tokens("\"a\\nb\"", &[(TokenKind::String, "a\\nb")]);
}

#[test]
fn test_unterminated_string_runs_to_end_of_input() {
    assert_tokens("\"abc", &[(TokenKind::String, "abc")]);

    let mut lexer = Lexer::new("\"abc");
    lexer.next_token();
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_number_runs_end_at_non_digits() {
    assert_tokens(
        "123abc",
        &[(TokenKind::Number, "123"), (TokenKind::Identifier, "abc")],
    );
    assert_tokens("007", &[(TokenKind::Number, "007")]);
    assert_tokens(
        "-5",
        &[(TokenKind::Dash, "-"), (TokenKind::Number, "5")],
    );
}

#[test]
fn test_illegal_characters() {
    assert_tokens(
        "@ #",
        &[(TokenKind::Illegal, "@"), (TokenKind::Illegal, "#")],
    );
    assert_tokens(
        "let x = ?;",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Assignment, "="),
            (TokenKind::Illegal, "?"),
            (TokenKind::Semicolon, ";"),
        ],
    );
}

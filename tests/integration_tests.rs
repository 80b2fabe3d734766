//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser to canonical program text, plus the REPL loop and
//! parse independence across threads.

use std::io::Cursor;
use std::thread;

use brook::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::{parse, Parser},
    repl,
};

#[test]
fn test_lexer_parser_pipeline() {
    let lexer = Lexer::new("let x = 5; return x; x;");
    let mut parser = Parser::new(lexer);

    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 3);
    assert_eq!(program.to_string(), "let x = 5;return x;x");
}

#[test]
fn test_canonical_text_round_trips() {
    // Block-carrying forms are excluded: their canonical text drops the
    // braces and is not meant to reparse.
    let sources = [
        "let x = 5;",
        "a + b * c;",
        "1 + (2 + 3) + 4;",
        "add(1, 2 * 3, 4 + 5);",
        "[1, 2, 3][1 + 1];",
        "!-a;",
        "\"hello\";",
    ];

    // Reparsing a program's canonical text must render the same text again.
    for source in sources {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "{:?}: {:?}", source, errors);

        let first = program.to_string();
        let (reparsed, errors) = parse(&first);
        assert!(errors.is_empty(), "{:?}: {:?}", first, errors);
        assert_eq!(reparsed.to_string(), first, "source: {:?}", source);
    }
}

#[test]
fn test_program_returned_despite_errors() {
    let (program, errors) = parse("let x 5; let y = 10; + ;");

    assert!(!errors.is_empty());
    assert_eq!(program.to_string(), "let y = 10;");
}

#[test]
fn test_lexer_eof_is_stable_across_many_calls() {
    let mut lexer = Lexer::new("1 + 2");

    for _ in 0..3 {
        lexer.next_token();
    }
    for _ in 0..100 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_repl_prints_canonical_text() {
    let input = Cursor::new("let x = 5 + 5;\n");
    let mut output = Vec::new();

    repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, ">> let x = (5 + 5);\n>> ");
}

#[test]
fn test_repl_prints_tab_indented_errors() {
    let input = Cursor::new("let x 5;\nx;\n");
    let mut output = Vec::new();

    repl::start(input, &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(
        output.contains("\tParser error: expected=Assignment, but got=Number\n"),
        "unexpected output: {:?}",
        output
    );
    // The loop keeps going after an error.
    assert!(output.contains("x\n"), "unexpected output: {:?}", output);
}

#[test]
fn test_parses_are_independent_across_threads() {
    let sources = ["let x = 1;", "a * b + c;", "if (a < b) { a }", "let x 5;"];

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| {
            thread::spawn(move || {
                let (program, errors) = parse(source);
                (program.to_string(), errors.len())
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results[0], (String::from("let x = 1;"), 0));
    assert_eq!(results[1], (String::from("((a * b) + c)"), 0));
    assert_eq!(results[2], (String::from("if(a < b) a"), 0));
    assert_eq!(results[3].1, 1);
}

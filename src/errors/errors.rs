use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A single parse diagnostic.
///
/// The `Display` text is the human-readable message the parser accumulates;
/// no variant aborts the parse. Callers inspect the parser's error list
/// after `parse_program` to decide whether the tree can be trusted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parser error: expected={expected}, but got={got}")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String },
}

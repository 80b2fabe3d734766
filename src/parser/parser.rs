//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! on demand from the lexer through a two-token `current`/`peek` window
//! and uses a Pratt approach for expressions: per-token prefix and infix
//! handlers selected through the fixed lookups in [`super::lookups`].
//!
//! Errors never abort the whole parse. Each failed statement records one
//! diagnostic and the parser resumes at the next statement boundary, so a
//! single pass can report several independent problems.

use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// Holds the lexer, the two-token lookahead window, and the ordered list
/// of diagnostics accumulated so far. Not safe for concurrent use; one
/// parser per source unit.
pub struct Parser {
    /// Token source, pulled one token at a time
    lexer: Lexer,
    /// The token under consideration
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics accumulated across the whole parse, in source order
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a new Parser, pumping the first two tokens into the window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances the window by one token and returns the consumed token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Expects the current token to be of the given kind and consumes it.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        if self.current.kind != expected {
            return Err(ParseError::UnexpectedToken {
                expected,
                got: self.current.kind,
            });
        }

        Ok(self.advance())
    }

    /// Records a diagnostic without interrupting the parse.
    pub fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// The diagnostics accumulated so far, in source order. Empty when the
    /// parse succeeded cleanly.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses statements until end of input.
    ///
    /// Always returns a Program, possibly with zero statements. Failed
    /// statements are dropped from the statement list while their error
    /// stays in [`Parser::errors`], so the two counts may diverge.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.current_token_kind() != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                    // A `}` here has no enclosing block; it must be dropped
                    // or the loop would re-dispatch it forever.
                    if self.current_token_kind() == TokenKind::CloseCurly {
                        self.advance();
                    }
                }
            }
        }

        Program { statements }
    }

    /// Skips to the next statement boundary after a failure: everything up
    /// to and including the next `;`. Stops short of `}` and end of input
    /// so block and program loops keep their own termination.
    pub fn synchronize(&mut self) {
        self.skip_to_stmt_boundary();
        if self.current_token_kind() == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Like [`Parser::synchronize`], but leaves the terminating `;` in
    /// place for the caller to consume.
    pub fn skip_to_stmt_boundary(&mut self) {
        while !matches!(
            self.current_token_kind(),
            TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF
        ) {
            self.advance();
        }
    }
}

/// Parses a source string into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It wires a fresh lexer and
/// parser together, parses every statement until end of input, and hands
/// back the Program together with the accumulated diagnostics.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);

    let program = parser.parse_program();

    (program, parser.errors)
}

//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization with a single character of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Greedy matching of two-character operators (`==`, `!=`)
//! - Whitespace skipping and end-of-input handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

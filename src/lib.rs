//! Front end for a small expression-oriented scripting language.
//!
//! Source text flows through the [`lexer`] (an on-demand token stream) into
//! the [`parser`] (a Pratt parser with per-token prefix/infix handlers),
//! producing a [`ast::ast::Program`] plus an ordered list of parse errors.
//! Evaluation and compilation are deliberately out of scope; the only
//! consumer shipped here is the line-oriented [`repl`].

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod repl;

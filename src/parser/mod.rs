//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token
//! stream into an Abstract Syntax Tree. It uses a Pratt parser for
//! expressions with proper operator precedence and handles:
//!
//! - Statement parsing (let bindings, returns, expression statements)
//! - Expression parsing (binary ops, calls, indexing, literals)
//! - Error accumulation with recovery at statement boundaries
//!
//! Expression parsing dispatches through fixed prefix/infix handler
//! lookups keyed on the token kind, with binding powers for precedence.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

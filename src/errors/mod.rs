//! Error types for the front end.
//!
//! This module defines the diagnostics the parser accumulates while it
//! recovers from malformed input. It includes:
//!
//! - Specific error variants for each syntactic failure
//! - Error formatting and display functionality
//!
//! The lexer contributes no variants here: unrecognised input becomes an
//! `Illegal` token and surfaces through the parser.

pub mod errors;

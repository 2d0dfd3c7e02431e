//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization over a byte cursor
//! - Recognition of keywords, identifiers, literals, and operators
//! - Two-character operator disambiguation (`==`, `!=`)
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;

//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for a parser. It handles:
//!
//! - Incremental, one-token-at-a-time scanning over a byte cursor
//! - Recognition of keywords, identifiers, integer and float literals
//! - Two-character operators (`==`, `!=`, `<=`, `>=`)
//! - Line/column tracking through whitespace
//! - Illegal characters, which become tokens rather than errors

pub mod lexer;
pub mod tokens;

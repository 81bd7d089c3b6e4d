//! Thin consumers of the lexer: an interactive loop printing the tokens of
//! every line typed, and a one-shot mode doing the same for a file.

pub mod repl;

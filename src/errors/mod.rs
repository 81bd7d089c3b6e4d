//! Diagnostics for the interpreter front end.
//!
//! The lexer itself never fails: anything it cannot classify comes out as
//! an illegal token. This module turns such tokens into errors carrying
//! source position information, a short name and a tip for display.

pub mod errors;

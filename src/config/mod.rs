//! Command-line options and the settings derived from them.

pub mod config;

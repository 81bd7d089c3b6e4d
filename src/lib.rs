#![allow(clippy::module_inception)]

use std::io::{self, Write};

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod repl;

extern crate regex;

/// Line and column a token starts at, as tracked by the lexer cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Position { line, col }
    }
}

/// Byte range `[start, end)` of a token in its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Finds the line containing byte `position` of `content`.
///
/// Returns the 1-based line number, the text of the line and the byte offset
/// of `position` within it. A position at the very end of the content maps
/// onto the last line.
pub fn get_line_at_position(content: &str, position: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return (line_number, line.to_string(), position - start);
        }

        start = end;
        line_number += 1;
    }

    // Past the last character: point just after the final line.
    let last = content.rsplit('\n').next().unwrap_or("");
    (
        content.matches('\n').count() + 1,
        last.to_string(),
        last.len(),
    )
}

pub fn display_error(
    error: &Error,
    content: &str,
    source_name: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    /*
        error: message
        -> shell
           |
         1 | let a = #;
           | --------^
    */

    let span = error.get_span();
    let (line, line_text, line_pos) = get_line_at_position(content, span.start);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(out, "-> {}", source_name)?;
    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    // The caret is placed by characters, not bytes.
    let arrows = line_text
        .get(removed_whitespace..line_pos)
        .map_or(0, |before| before.chars().count())
        + 1;

    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .bytes()
        .take_while(|c| *c == b' ' || *c == b'\t')
        .count();

    (String::from(&string[start..]), start)
}

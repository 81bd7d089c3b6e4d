use std::{
    env, fs,
    io::{BufRead, Write},
    path::Path,
};

use anyhow::{Context, Result};
use log::debug;

use crate::{
    config::config::ReplConfig,
    display_error,
    errors::errors::Error,
    lexer::lexer::Lexer,
};

const REPL_SOURCE_NAME: &str = "shell";

pub fn start(config: &ReplConfig, input: impl BufRead, mut output: impl Write) -> Result<()> {
    if config.greeting {
        writeln!(output, "Hello {}! This is the REPL", current_user())?;
        writeln!(output, "Start typing commands!")?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("Failed to read from input")?;

        debug!("Lexing line of {} bytes", line.len());
        print_tokens(&line, REPL_SOURCE_NAME, &mut output)?;
    }
}

/// Tokenizes the whole of the file at `path` as a single buffer.
pub fn lex_file(path: &Path, mut output: impl Write) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    debug!("Lexing {} ({} bytes)", path.display(), contents.len());
    print_tokens(&contents, &name, &mut output)
}

/// Prints every token of `source` up to the end of input, then a
/// diagnostic for each illegal one.
pub fn print_tokens(source: &str, source_name: &str, output: &mut impl Write) -> Result<()> {
    let mut errors = vec![];

    for token in Lexer::new(source) {
        writeln!(output, "{}", token)?;

        if let Some(error) = Error::from_token(&token) {
            errors.push(error);
        }
    }

    for error in errors.iter() {
        display_error(error, source, source_name, output)?;
    }

    Ok(())
}

fn current_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("there"))
}

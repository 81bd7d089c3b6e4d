use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PROMPT: &str = ">>> ";

#[derive(Debug, Parser)]
#[command(about = "Prints the tokens of each line typed, or of a whole file")]
pub struct Options {
    /// File to tokenize instead of starting the REPL
    pub file: Option<PathBuf>,
    /// Prompt printed before each line is read
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,
    /// Log verbosity: 0 errors, 1 warnings, 2 info, 3 debug, 4 trace
    #[arg(short, long, default_value_t = 1)]
    pub verbose: usize,
    /// Do not print the greeting
    #[arg(short, long)]
    pub quiet: bool,
}

/// What the REPL needs to know about how it was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub greeting: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from(DEFAULT_PROMPT),
            greeting: true,
        }
    }
}

impl From<&Options> for ReplConfig {
    fn from(options: &Options) -> Self {
        ReplConfig {
            prompt: options.prompt.clone(),
            greeting: !options.quiet,
        }
    }
}

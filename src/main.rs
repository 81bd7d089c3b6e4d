use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser;
use log::info;

use interpreter::{
    config::config::{Options, ReplConfig},
    repl::repl::{lex_file, start},
};

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.verbose)
        .init()?;

    match &options.file {
        Some(path) => {
            info!("Tokenizing {}", path.display());
            lex_file(path, stdout().lock())
        }
        None => start(&ReplConfig::from(&options), stdin().lock(), stdout().lock()),
    }
}

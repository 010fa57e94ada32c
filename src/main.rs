//! CLI entry point for the bingo card generator

use bingocard::io::cli::{BatchProcessor, Cli};
use clap::Parser;
use std::process::ExitCode;

// Allow print for reporting the fatal error before exiting
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);

    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}, exiting...");
            ExitCode::FAILURE
        }
    }
}

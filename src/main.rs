//! # Tabby Entry Point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Initialise env_logger (stderr, -v / RUST_LOG)
//!   └─> cli::run
//!       ├─> load table
//!       ├─> replace / impute
//!       ├─> print -d / -l reports
//!       └─> print grid, or write the -o file
//! ```
//!
//! ```bash
//! tabby cities.csv -d -l
//! tabby cities.csv -c "City name" Adelaide AdelaideX -n -o cities.xlsx
//! ```
//!
//! Any failure prints `Error: ...` on stderr and exits with status 1.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stderr)] // Allow eprintln! in main binary

mod cli;

use clap::Parser as _;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(err) = tabby::logging::init(cli.verbose) {
        eprintln!("Warning: logging unavailable: {err}");
    }

    match cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

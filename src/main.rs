//! # hugo-multiversion CLI
//!
//! This is the binary entry point for the `hugo-multiversion` command-line tool.
//!
//! Its primary responsibilities are:
//! - Installing the logger before anything else can fail.
//! - Parsing command-line arguments using `clap`.
//! - Running the build and translating the outcome into an exit code:
//!   `0` on success, `1` on any failure, `2` if logging cannot be set up.
//!
//! The core application logic is defined in the `lib.rs` library crate, ensuring
//! that the binary is a thin wrapper around the reusable library functionality.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::error;

fn main() -> ExitCode {
    if hugo_multiversion::logging::init().is_err() {
        return ExitCode::from(2);
    }

    let cli = cli::Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to run: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

//! cfgconvwrap CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse flags, validate the three
//! positional arguments, start the converter, and map failures to stderr and a
//! non-zero exit status. For programmatic use, prefer the library API
//! (`cfgconvwrap::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

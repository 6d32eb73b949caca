//! Command Line Interface (CLI) layer for cfgconvwrap.
//!
//! This module defines argument parsing (`args`), CLI-only error types
//! (`errors`), and the orchestration logic (`runner`). It wires the
//! user-provided flags to the library exposed via `cfgconvwrap::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

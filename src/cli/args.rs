use std::ffi::OsString;

use clap::Parser;

use cfgconvwrap::{ExtensionStrategy, LaunchOptions};

#[derive(Parser, Debug)]
#[command(
    name = "cfgconvwrap",
    version,
    about = "Launch an external config converter for a .bin or .cpp file",
    override_usage = "cfgconvwrap [OPTIONS] <TOOL> <MODE> <SOURCE>"
)]
pub struct CliArgs {
    /// Wait for the converter to finish and exit with its exit code
    #[arg(long, default_value_t = false)]
    pub wait: bool,

    /// Print the converter command line instead of running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the validated request as JSON and exit without launching
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Replace the first occurrence of the source extension anywhere in the path
    /// (legacy behavior) instead of only the file's own extension
    #[arg(long, default_value_t = false)]
    pub literal_replace: bool,

    /// Enable logging on stderr (level taken from RUST_LOG, debug by default)
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Converter path, mode (-b2c or -c2b) and source file, in that order.
    /// Options must come before these.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

impl CliArgs {
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            wait: self.wait,
            dry_run: self.dry_run,
            strategy: if self.literal_replace {
                ExtensionStrategy::FirstOccurrence
            } else {
                ExtensionStrategy::Trailing
            },
        }
    }
}

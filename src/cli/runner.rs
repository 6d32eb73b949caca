use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cfgconvwrap::{ConversionRequest, LaunchOutcome};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Process exit status for a converter that was waited on.
///
/// Codes that do not fit in `1..=255` still have to read as a failure.
pub fn exit_status_for(code: Option<i32>) -> Result<u8, AppError> {
    match code {
        Some(0) => Ok(0),
        Some(code) => Ok(u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)),
        None => Err(AppError::ToolTerminated),
    }
}

/// Run the CLI and return the process exit status.
pub fn run(args: CliArgs) -> Result<u8, AppError> {
    if args.log {
        init_logging();
    }

    let options = args.launch_options();

    if args.json {
        let request = ConversionRequest::parse_with(args.args.as_slice(), options.strategy)?;
        let json = serde_json::to_string_pretty(&request).map_err(cfgconvwrap::Error::from)?;
        println!("{}", json);
        return Ok(0);
    }

    let (request, outcome) = cfgconvwrap::launch_from_args(args.args.as_slice(), &options)?;

    match outcome {
        LaunchOutcome::DryRun { command_line } => {
            println!("{}", command_line);
            Ok(0)
        }
        LaunchOutcome::Detached { pid } => {
            info!(
                "Started converter (pid {}) for {:?}",
                pid,
                request.source_path()
            );
            Ok(0)
        }
        LaunchOutcome::Exited { code } => {
            match code {
                Some(0) => info!(
                    "Successfully converted: {:?} -> {:?}",
                    request.source_path(),
                    request.destination_path()
                ),
                Some(code) => warn!("Converter failed with exit code {}", code),
                None => warn!("Converter was terminated by a signal"),
            }
            exit_status_for(code)
        }
    }
}

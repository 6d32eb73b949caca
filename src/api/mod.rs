//! High-level library API: validate the raw arguments and start the converter in
//! one call. Both binaries go through here; prefer it over the `core` modules
//! when embedding the launcher.
use std::ffi::OsStr;

use tracing::debug;

use crate::core::launch::{LaunchOptions, LaunchOutcome, run};
use crate::core::request::ConversionRequest;
use crate::error::Result;

/// Validate `[tool, mode, source]` and launch the converter.
pub fn launch_from_args<S: AsRef<OsStr>>(
    args: &[S],
    options: &LaunchOptions,
) -> Result<(ConversionRequest, LaunchOutcome)> {
    let request = ConversionRequest::parse_with(args, options.strategy)?;
    debug!("{}", request);
    let outcome = run(&request, options)?;
    Ok((request, outcome))
}

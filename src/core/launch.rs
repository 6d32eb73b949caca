use std::process::{Command, Stdio};

use tracing::{info, warn};

use crate::core::request::ConversionRequest;
use crate::error::{Error, Result};
use crate::types::ExtensionStrategy;

/// Launch behavior selected by CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Wait for the converter and report its exit code instead of detaching
    pub wait: bool,
    /// Only render the command line, never start the converter
    pub dry_run: bool,
    pub strategy: ExtensionStrategy,
}

/// What happened after `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The converter was started and left running on its own.
    Detached { pid: u32 },
    /// The converter was awaited. `code` is `None` when it was killed by a signal.
    Exited { code: Option<i32> },
    DryRun { command_line: String },
}

/// Converter arguments in order: `<flag> -dst <destination> <source>`.
pub fn tool_arguments(request: &ConversionRequest) -> Vec<std::ffi::OsString> {
    vec![
        request.mode_option().into(),
        "-dst".into(),
        request.destination_path().as_os_str().to_owned(),
        request.source_path().as_os_str().to_owned(),
    ]
}

/// Human-readable invocation, e.g. `tool -txt -dst "a.cpp" "a.bin"`.
pub fn command_line(request: &ConversionRequest) -> String {
    format!(
        "{} {} -dst \"{}\" \"{}\"",
        request.tool_path().display(),
        request.mode_option(),
        request.destination_path().display(),
        request.source_path().display()
    )
}

/// Start the converter for `request`.
pub fn run(request: &ConversionRequest, options: &LaunchOptions) -> Result<LaunchOutcome> {
    let line = command_line(request);
    if options.dry_run {
        info!("Dry run: {}", line);
        return Ok(LaunchOutcome::DryRun { command_line: line });
    }

    info!("Launching: {}", line);

    let mut command = Command::new(request.tool_path());
    command.args(tool_arguments(request));

    let launch_error = |source: std::io::Error| Error::Launch {
        tool: request.tool_path().to_path_buf(),
        source,
    };

    if options.wait {
        let status = command.status().map_err(launch_error)?;
        if !status.success() {
            warn!("Converter exited with {}", status);
        }
        return Ok(LaunchOutcome::Exited {
            code: status.code(),
        });
    }

    // Detached: the child keeps running after the launcher exits.
    let child = command
        .stdin(Stdio::null())
        .spawn()
        .map_err(launch_error)?;
    let pid = child.id();
    info!("Converter started with pid {}", pid);
    Ok(LaunchOutcome::Detached { pid })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;

    fn request_in(dir: &std::path::Path) -> ConversionRequest {
        let tool = dir.join("cfgconv.exe");
        let src = dir.join("settings.bin");
        File::create(&tool).unwrap();
        File::create(&src).unwrap();
        ConversionRequest::parse(&[tool.to_str().unwrap(), "-b2c", src.to_str().unwrap()])
            .unwrap()
    }

    #[test]
    fn command_line_quotes_paths() {
        let dir = tempfile::tempdir().unwrap();
        let req = request_in(dir.path());
        let expected = format!(
            "{} -txt -dst \"{}\" \"{}\"",
            dir.path().join("cfgconv.exe").display(),
            dir.path().join("settings.cpp").display(),
            dir.path().join("settings.bin").display()
        );
        assert_eq!(command_line(&req), expected);
    }

    #[test]
    fn dry_run_does_not_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let req = request_in(dir.path());
        let options = LaunchOptions {
            dry_run: true,
            ..Default::default()
        };
        // The tool is an empty, non-executable file; spawning it would fail.
        match run(&req, &options).unwrap() {
            LaunchOutcome::DryRun { command_line: line } => {
                assert!(line.contains(" -txt -dst "));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_tool_is_an_unclassified_failure() {
        let dir = tempfile::tempdir().unwrap();
        let req = request_in(dir.path());
        let err = run(&req, &LaunchOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
        assert_eq!(err.kind(), crate::error::ErrorKind::Other);
    }

    #[test]
    fn arguments_follow_flag_dst_destination_source() {
        let dir = tempfile::tempdir().unwrap();
        let req = request_in(dir.path());
        let args = tool_arguments(&req);
        assert_eq!(args[0], "-txt");
        assert_eq!(args[1], "-dst");
        assert_eq!(args[2], dir.path().join("settings.cpp").into_os_string());
        assert_eq!(args[3], dir.path().join("settings.bin").into_os_string());
    }
}

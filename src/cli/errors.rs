use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Converter was terminated without an exit code")]
    ToolTerminated,

    #[error(transparent)]
    Launcher(#[from] cfgconvwrap::Error),
}

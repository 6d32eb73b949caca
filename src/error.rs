//! Crate-level error type and `Result` alias.
//! Argument and file-existence failures get their own variants; anything that
//! goes wrong while starting the converter is reported as an unclassified failure.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Need 3 Parameters. Ex: [ExePath] [Mode ('-b2c', '-c2b')] [SourcePath]")]
    InvalidArgumentCount { count: usize },

    #[error("Invalid args. Mode = empty")]
    EmptyMode,

    #[error("Invalid args. Mode = '{value}'")]
    InvalidMode { value: String },

    #[error("Source was not '{expected}'")]
    ExtensionMismatch {
        expected: &'static str,
        actual: String,
    },

    #[error("'{}' was not found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to start '{}': {source}", tool.display())]
    Launch {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// Wrong argument count, unknown mode token, or source extension not matching the mode.
    Argument,
    /// Tool or source path does not name an existing file.
    FileNotFound,
    /// Anything else, e.g. the OS refusing to start the tool.
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgumentCount { .. }
            | Error::EmptyMode
            | Error::InvalidMode { .. }
            | Error::ExtensionMismatch { .. } => ErrorKind::Argument,
            Error::FileNotFound { .. } => ErrorKind::FileNotFound,
            Error::Launch { .. } | Error::Io(_) | Error::Serialization(_) => ErrorKind::Other,
        }
    }
}

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ConversionMode, ExtensionStrategy};

/// A validated conversion job, built once from the three raw command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    tool_path: PathBuf,
    mode: ConversionMode,
    source_path: PathBuf,
    destination_ext: &'static str,
    destination_path: PathBuf,
}

impl ConversionRequest {
    /// Build a request from `[tool, mode, source]` using trailing-extension replacement.
    pub fn parse<S: AsRef<OsStr>>(args: &[S]) -> Result<Self> {
        Self::parse_with(args, ExtensionStrategy::default())
    }

    /// Build a request with an explicit destination-path strategy.
    ///
    /// Arguments are taken as OS strings so file names that are not valid UTF-8
    /// survive. Either every check passes and a complete request is returned, or
    /// the first failing check is returned as the error.
    pub fn parse_with<S: AsRef<OsStr>>(args: &[S], strategy: ExtensionStrategy) -> Result<Self> {
        if args.len() != 3 {
            return Err(Error::InvalidArgumentCount { count: args.len() });
        }

        let tool_path = resolve_existing_file(args[0].as_ref())?;
        let mode = ConversionMode::from_os_token(args[1].as_ref())?;
        let source_path = resolve_existing_file(args[2].as_ref())?;
        let destination_ext = mode.destination_extension();

        check_source_extension(&source_path, mode)?;
        let destination_path = destination_path_for(&source_path, mode, strategy);

        debug!(
            "Resolved request: tool={:?} mode={} source={:?} destination={:?} strategy={}",
            tool_path, mode, source_path, destination_path, strategy
        );

        Ok(Self {
            tool_path,
            mode,
            source_path,
            destination_ext,
            destination_path,
        })
    }

    pub fn tool_path(&self) -> &Path {
        &self.tool_path
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn destination_ext(&self) -> &'static str {
        self.destination_ext
    }

    pub fn destination_path(&self) -> &Path {
        &self.destination_path
    }

    /// Flag passed to the converter: `-txt` or `-bin`.
    pub fn mode_option(&self) -> &'static str {
        self.mode.mode_option()
    }
}

impl std::fmt::Display for ConversionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ExePath = '{}', Mode = '{}', SourcePath = '{}', DestinationExt = '{}', DestinationPath = '{}'",
            self.tool_path.display(),
            self.mode,
            self.source_path.display(),
            self.destination_ext,
            self.destination_path.display()
        )
    }
}

/// Strip every `"` from `raw`, make it absolute and require an existing regular file.
pub fn resolve_existing_file(raw: &OsStr) -> Result<PathBuf> {
    let cleaned = strip_quotes(raw);
    if cleaned.is_empty() {
        return Err(Error::FileNotFound {
            path: PathBuf::new(),
        });
    }

    let full = std::path::absolute(&cleaned)?;
    if !full.is_file() {
        return Err(Error::FileNotFound { path: full });
    }
    Ok(full)
}

fn strip_quotes(raw: &OsStr) -> OsString {
    let bytes: Vec<u8> = raw
        .as_encoded_bytes()
        .iter()
        .copied()
        .filter(|b| *b != b'"')
        .collect();
    // SAFETY: the input is split only around the ASCII `"` and the pieces are
    // rejoined in order, which keeps the platform encoding valid.
    unsafe { OsString::from_encoded_bytes_unchecked(bytes) }
}

/// A file named only `.bin` (no stem) counts as having that extension.
fn dot_name_extension(path: &Path) -> Option<&OsStr> {
    if path.extension().is_some() {
        return None;
    }
    let name = path.file_name()?;
    let bytes = name.as_encoded_bytes();
    let is_dot_name = bytes.len() > 1 && bytes[0] == b'.' && !bytes[1..].contains(&b'.');
    is_dot_name.then_some(name)
}

/// Extension of the final path segment including its dot, or an empty string.
pub fn source_extension_of(path: &Path) -> String {
    if let Some(name) = dot_name_extension(path) {
        return name.to_string_lossy().into_owned();
    }
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy()),
        _ => String::new(),
    }
}

fn check_source_extension(source: &Path, mode: ConversionMode) -> Result<()> {
    let actual = source_extension_of(source);
    let expected = mode.source_extension();
    if !actual.eq_ignore_ascii_case(expected) {
        return Err(Error::ExtensionMismatch { expected, actual });
    }
    Ok(())
}

/// Replace the first occurrence of the ASCII `from` in `haystack` with `to`.
fn replace_first_ascii(haystack: &OsStr, from: &str, to: &str) -> OsString {
    let bytes = haystack.as_encoded_bytes();
    let needle = from.as_bytes();
    let Some(at) = bytes.windows(needle.len()).position(|w| w == needle) else {
        return haystack.to_os_string();
    };

    let mut out = Vec::with_capacity(bytes.len() + to.len());
    out.extend_from_slice(&bytes[..at]);
    out.extend_from_slice(to.as_bytes());
    out.extend_from_slice(&bytes[at + needle.len()..]);
    // SAFETY: `from` and `to` are ASCII, so this splits the input around a valid
    // UTF-8 substring and splices in valid UTF-8.
    unsafe { OsString::from_encoded_bytes_unchecked(out) }
}

/// Derive the output path for `source` under `mode`.
pub fn destination_path_for(
    source: &Path,
    mode: ConversionMode,
    strategy: ExtensionStrategy,
) -> PathBuf {
    let dest_ext = mode.destination_extension();
    let ext = source_extension_of(source);
    match strategy {
        ExtensionStrategy::Trailing => {
            if dot_name_extension(source).is_some() {
                source.with_file_name(dest_ext)
            } else {
                source.with_extension(dest_ext.trim_start_matches('.'))
            }
        }
        ExtensionStrategy::FirstOccurrence if ext.is_empty() || !ext.is_ascii() => {
            source.with_extension(dest_ext.trim_start_matches('.'))
        }
        ExtensionStrategy::FirstOccurrence => {
            PathBuf::from(replace_first_ascii(source.as_os_str(), &ext, dest_ext))
        }
    }
}

//! Shared types and enums used across cfgconvwrap.
//! Includes `ConversionMode` and `ExtensionStrategy`.
use std::ffi::OsStr;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Direction of a conversion.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub enum ConversionMode {
    /// `-b2c`: binary `.bin` to text `.cpp`
    BinToText,
    /// `-c2b`: text `.cpp` to binary `.bin`
    TextToBin,
}

impl ConversionMode {
    /// Parse a mode token. Matching ignores ASCII case, so `-C2B` is accepted.
    pub fn from_token(token: &str) -> Result<Self, Error> {
        if token.is_empty() {
            return Err(Error::EmptyMode);
        }
        match token.to_ascii_lowercase().as_str() {
            "-b2c" => Ok(ConversionMode::BinToText),
            "-c2b" => Ok(ConversionMode::TextToBin),
            _ => Err(Error::InvalidMode {
                value: token.to_string(),
            }),
        }
    }

    /// Same as [`ConversionMode::from_token`] for a raw argument. A token that is
    /// not valid UTF-8 can never be a mode and is reported lossily.
    pub fn from_os_token(token: &OsStr) -> Result<Self, Error> {
        match token.to_str() {
            Some(token) => ConversionMode::from_token(token),
            None => Err(Error::InvalidMode {
                value: token.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Flag handed to the external converter.
    pub fn mode_option(self) -> &'static str {
        match self {
            ConversionMode::BinToText => "-txt",
            ConversionMode::TextToBin => "-bin",
        }
    }

    /// Extension the source file must carry (compared case-insensitively).
    pub fn source_extension(self) -> &'static str {
        match self {
            ConversionMode::BinToText => ".bin",
            ConversionMode::TextToBin => ".cpp",
        }
    }

    pub fn destination_extension(self) -> &'static str {
        match self {
            ConversionMode::BinToText => ".cpp",
            ConversionMode::TextToBin => ".bin",
        }
    }
}

impl FromStr for ConversionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConversionMode::from_token(s)
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionMode::BinToText => write!(f, "BinToText"),
            ConversionMode::TextToBin => write!(f, "TextToBin"),
        }
    }
}

/// How the destination path is derived from the source path.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ExtensionStrategy {
    /// Replace the extension of the final path segment only.
    #[default]
    Trailing,
    /// Replace the first textual occurrence of the source extension anywhere in
    /// the full path, close to the legacy wrapper; a directory such as
    /// `.bin-archive` earlier in the path gets rewritten instead. The legacy
    /// wrapper replaced every occurrence, this replaces only the first.
    FirstOccurrence,
}

impl std::fmt::Display for ExtensionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionStrategy::Trailing => write!(f, "Trailing"),
            ExtensionStrategy::FirstOccurrence => write!(f, "FirstOccurrence"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_case_insensitive() {
        assert_eq!(
            ConversionMode::from_token("-b2c").unwrap(),
            ConversionMode::BinToText
        );
        assert_eq!(
            ConversionMode::from_token("-C2B").unwrap(),
            ConversionMode::TextToBin
        );
        assert_eq!(
            "-B2c".parse::<ConversionMode>().unwrap(),
            ConversionMode::BinToText
        );
    }

    #[test]
    fn empty_and_unknown_tokens_are_rejected() {
        assert!(matches!(
            ConversionMode::from_token(""),
            Err(Error::EmptyMode)
        ));
        match ConversionMode::from_token("b2c") {
            Err(Error::InvalidMode { value }) => assert_eq!(value, "b2c"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            ConversionMode::from_os_token(OsStr::new("")),
            Err(Error::EmptyMode)
        ));
    }

    #[test]
    fn os_tokens_match_like_str_tokens() {
        assert_eq!(
            ConversionMode::from_os_token(OsStr::new("-C2b")).unwrap(),
            ConversionMode::TextToBin
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_token_is_an_invalid_mode() {
        use std::os::unix::ffi::OsStrExt;

        let err = ConversionMode::from_os_token(OsStr::from_bytes(b"-b2\xff")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Argument);
        assert!(matches!(err, Error::InvalidMode { .. }));
    }

    #[test]
    fn lookup_tables() {
        let m = ConversionMode::BinToText;
        assert_eq!(m.mode_option(), "-txt");
        assert_eq!(m.source_extension(), ".bin");
        assert_eq!(m.destination_extension(), ".cpp");

        let m = ConversionMode::TextToBin;
        assert_eq!(m.mode_option(), "-bin");
        assert_eq!(m.source_extension(), ".cpp");
        assert_eq!(m.destination_extension(), ".bin");
    }
}

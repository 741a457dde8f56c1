use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the loading, formatting, and path-parsing entry points.
///
/// Building a tree and reading from it never fail; only the steps that
/// touch raw input do.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Io {
        /// The file that was being opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The input is not a well-formed JSON document.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
    /// Text handed to the pretty formatter is not well-formed JSON.
    #[error("syntax error: {0}")]
    Syntax(#[source] serde_json::Error),
    /// Bytes handed to the pretty formatter are not UTF-8.
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// A path string could not be parsed.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The rejected path string.
        path: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl Error {
    /// The one-based line of the input at which decoding failed, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Decode(e) | Self::Syntax(e) if e.line() > 0 => Some(e.line()),
            _ => None,
        }
    }

    /// The one-based column of the input at which decoding failed, if known.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Decode(e) | Self::Syntax(e) if e.line() > 0 => Some(e.column()),
            _ => None,
        }
    }

    /// Returns `true` if decoding stopped because the input ended early.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        match self {
            Self::Decode(e) | Self::Syntax(e) => e.is_eof(),
            _ => false,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

//! Error types for the table pipeline.
//!
//! Every stage reports failures through [`TabbyError`]. The variants follow the
//! categories a user can act on:
//!
//! - [`TabbyError::UnsupportedFormat`]: the file extension is not one of
//!   `csv`, `tsv`, `xls` or `xlsx`
//! - [`TabbyError::FileAccess`] / [`TabbyError::Io`]: missing, unreadable or
//!   unwritable files
//! - [`TabbyError::Parse`]: the file is not a rectangular table
//! - [`TabbyError::ColumnNotFound`]: a replacement names a column the table
//!   does not have
//!
//! ```
//! use tabby::error::TabbyError;
//!
//! fn describe(err: &TabbyError) -> &'static str {
//!     match err {
//!         TabbyError::UnsupportedFormat(_) => "pick a csv, tsv, xls or xlsx file",
//!         TabbyError::ColumnNotFound(_) => "check the column name with --list-columns",
//!         _ => "see the error message",
//!     }
//! }
//! ```
//!
//! The `?` operator converts errors from the `csv`, `calamine`,
//! `rust_xlsxwriter` and `serde_json` crates automatically.

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for tabby operations.
#[derive(Debug)]
pub enum TabbyError {
    /// Extension not recognised on an input or output path
    UnsupportedFormat(String),

    /// A file could not be opened, read or created
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O errors raised mid-stream, after the file was opened
    Io(std::io::Error),

    /// Malformed tabular structure
    Parse(String),

    /// Replacement targets a column the table does not have
    ColumnNotFound(String),

    /// Errors reported by the spreadsheet reader or writer
    Spreadsheet(String),

    /// Invalid settings file
    Config(String),

    /// Generic error with context
    Other(String),
}

impl TabbyError {
    /// Build a [`TabbyError::FileAccess`] for `path`.
    pub fn file_access(path: &Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for TabbyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat(msg) => write!(f, "Unsupported file format: {msg}"),
            // The io::Error is reported through `source()`
            Self::FileAccess { path, .. } => write!(f, "Cannot access file {}", path.display()),
            Self::Io(_) => write!(f, "I/O error"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::ColumnNotFound(name) => write!(f, "Column not found: '{name}'"),
            Self::Spreadsheet(msg) => write!(f, "Spreadsheet error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for TabbyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TabbyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TabbyError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => {
                let line = pos.map_or(0, |p| p.line());
                Self::Parse(format!(
                    "line {line} has {len} fields but the header has {expected_len}"
                ))
            }
            _ => Self::Parse(message),
        }
    }
}

impl From<calamine::Error> for TabbyError {
    fn from(err: calamine::Error) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for TabbyError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}

impl From<serde_json::Error> for TabbyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for tabby operations.
pub type Result<T> = std::result::Result<T, TabbyError>;

/// Extension trait to add context to results.
///
/// Unlike wrapping into a generic error, the category of the original error
/// is kept so callers can still match on it.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<TabbyError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| prefix(e.into(), &msg.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| prefix(e.into(), &f()))
    }
}

fn prefix(err: TabbyError, msg: &str) -> TabbyError {
    match err {
        TabbyError::UnsupportedFormat(inner) => {
            TabbyError::UnsupportedFormat(format!("{msg}: {inner}"))
        }
        TabbyError::Parse(inner) => TabbyError::Parse(format!("{msg}: {inner}")),
        TabbyError::Spreadsheet(inner) => TabbyError::Spreadsheet(format!("{msg}: {inner}")),
        TabbyError::Config(inner) => TabbyError::Config(format!("{msg}: {inner}")),
        TabbyError::Other(inner) => TabbyError::Other(format!("{msg}: {inner}")),
        // Structured variants carry their own detail
        other @ (TabbyError::FileAccess { .. }
        | TabbyError::Io(_)
        | TabbyError::ColumnNotFound(_)) => other,
    }
}

use crate::error::{Result, TabbyError};
use std::fmt;
use std::path::Path;

/// Supported file formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Tsv,
    Xls,
    Xlsx,
}

impl FileFormat {
    pub const ALL: [Self; 4] = [Self::Csv, Self::Tsv, Self::Xls, Self::Xlsx];

    /// Detect the format of `path` from its extension (case-insensitive).
    ///
    /// Only the name is inspected; the file itself is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`TabbyError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self::from_extension(&ext).ok_or_else(|| {
            TabbyError::UnsupportedFormat(format!(
                "{} (expected one of .csv, .tsv, .xls, .xlsx)",
                path.display()
            ))
        })
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
        }
    }

    /// Field delimiter for text formats, `None` for spreadsheets.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            Self::Csv => Some(b','),
            Self::Tsv => Some(b'\t'),
            Self::Xls | Self::Xlsx => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

use crate::error::{Result, ResultExt as _, TabbyError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How missing cells are filled in columns that hold no numbers at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextImputation {
    /// Leave the column unchanged
    #[default]
    None,
    /// Use the most common present value
    Mode,
}

/// Run settings, read from a JSON file passed with `--config` or `TABBY_CONFIG`.
///
/// ```json
/// {
///   "missing_markers": ["", "NaN", "N/A"],
///   "mean_precision": 2,
///   "text_imputation": "mode"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Raw cell text treated as a missing value when loading
    pub missing_markers: Vec<String>,
    /// Decimal places the imputed mean is rounded to (full precision when unset)
    pub mean_precision: Option<u32>,
    pub text_imputation: TextImputation,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            missing_markers: ["", "NaN", "nan", "None"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            mean_precision: None,
            text_imputation: TextImputation::None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`TabbyError::FileAccess`] if the file cannot be read and
    /// [`TabbyError::Config`] if it is not valid settings JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TabbyError::file_access(path, e))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Parse settings from a JSON string. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TabbyError::Config`] on malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Whether `raw` is one of the configured missing-value markers.
    pub fn is_missing_marker(&self, raw: &str) -> bool {
        self.missing_markers.iter().any(|m| m == raw)
    }
}

use crate::config::Settings;
use crate::error::{Result, TabbyError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single table value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Finite numeric value
    Number(f64),
    Text(String),
    /// Missing value; keeps the marker it was read with (`""`, `"NaN"`, ...)
    Missing(String),
}

impl Cell {
    /// Coerce raw field text into a cell.
    ///
    /// Missing markers become [`Cell::Missing`], text that parses as a finite
    /// number becomes [`Cell::Number`] and anything else stays [`Cell::Text`].
    /// A literal not-a-number (`"nan"`, `"NaN"`, ...) is always missing.
    pub fn from_raw(raw: &str, settings: &Settings) -> Self {
        if settings.is_missing_marker(raw) {
            return Self::Missing(raw.to_owned());
        }

        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            Ok(value) if value.is_nan() => Self::Missing(raw.to_owned()),
            _ => Self::Text(raw.to_owned()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Missing(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Number(_) | Self::Missing(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) | Self::Missing(text) => f.write_str(text),
        }
    }
}

/// Inferred column type, reported by `--list-columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory rectangular table.
///
/// Column names are unique and every row holds exactly one cell per column.
/// Both properties are checked on construction; rows can be edited in place
/// but never resized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given header.
    ///
    /// # Errors
    ///
    /// Returns [`TabbyError::Parse`] if the header is empty or a name repeats.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(TabbyError::Parse("missing header row".to_owned()));
        }

        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(TabbyError::Parse(format!("duplicate column name '{name}'")));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Build a table from a header and rows in one go.
    ///
    /// # Errors
    ///
    /// Same as [`Table::new`] and [`Table::push_row`].
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a data row.
    ///
    /// # Errors
    ///
    /// Returns [`TabbyError::Parse`] if the row width differs from the header.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(TabbyError::Parse(format!(
                "row {} has {} fields but the header has {}",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Mutable access to the rows. The slice cannot grow or shrink, and
    /// callers must not resize individual rows.
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<Cell>] {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`, header excluded.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of the column at `index`, top to bottom.
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}

use super::types::{Cell, ColumnKind, Table};
use serde::Serialize;

/// Row and column counts of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    /// Data rows, header excluded
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    /// Rows as they appear in the file, header included.
    pub fn rows_with_header(&self) -> usize {
        self.rows + 1
    }

    pub fn as_pair(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: ColumnKind,
}

pub fn dimensions(table: &Table) -> Dimensions {
    let (rows, columns) = table.dimensions();
    Dimensions { rows, columns }
}

/// Column names in table order, each with its inferred kind.
pub fn list_columns(table: &Table) -> Vec<ColumnInfo> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| ColumnInfo {
            name: name.clone(),
            kind: infer_kind(table.column_cells(index)),
        })
        .collect()
}

/// A column is numeric when it has at least one number and every present
/// cell is a number. Missing cells do not count either way.
pub fn infer_kind<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> ColumnKind {
    let mut saw_number = false;
    for cell in cells {
        match cell {
            Cell::Number(_) => saw_number = true,
            Cell::Text(_) => return ColumnKind::Text,
            Cell::Missing(_) => {}
        }
    }

    if saw_number {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

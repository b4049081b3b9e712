//! Text grids for the terminal.
//!
//! Every report is drawn the same way: `+`/`-` rules above and below the
//! header and at the bottom, `|` between columns, each column padded to its
//! widest cell. Numbers are right-aligned, everything else left-aligned.
//!
//! ```text
//! +-----------+------+
//! | City name | Area |
//! +-----------+------+
//! | Adelaide  | 1295 |
//! | Brisbane  | 5905 |
//! +-----------+------+
//! ```

use super::profiling::{ColumnInfo, Dimensions};
use super::types::{Cell, Table};
use prettytable::format;
use prettytable::{Cell as GridCell, Row as GridRow, Table as Grid};

fn new_grid<S: AsRef<str>>(titles: &[S]) -> Grid {
    let mut grid = Grid::new();
    grid.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    grid.set_titles(GridRow::new(
        titles.iter().map(|t| GridCell::new(t.as_ref())).collect(),
    ));
    grid
}

fn grid_cell(cell: &Cell) -> GridCell {
    let text = cell.to_string();
    match cell {
        Cell::Number(_) => GridCell::new(&text).style_spec("r"),
        Cell::Text(_) | Cell::Missing(_) => GridCell::new(&text),
    }
}

/// Render the whole table.
pub fn render_table(table: &Table) -> String {
    let mut grid = new_grid(table.columns());
    for row in table.rows() {
        grid.add_row(GridRow::new(row.iter().map(grid_cell).collect()));
    }
    grid.to_string()
}

pub fn render_dimensions(dimensions: &Dimensions) -> String {
    let mut grid = new_grid(&[
        "Number of rows with header",
        "Number of rows",
        "Number of columns",
    ]);
    grid.add_row(GridRow::new(
        [
            dimensions.rows_with_header(),
            dimensions.rows,
            dimensions.columns,
        ]
        .iter()
        .map(|n| GridCell::new(&n.to_string()).style_spec("r"))
        .collect(),
    ));
    grid.to_string()
}

pub fn render_columns(columns: &[ColumnInfo]) -> String {
    let mut grid = new_grid(&["Column name", "Column type"]);
    for info in columns {
        grid.add_row(GridRow::new(vec![
            GridCell::new(&info.name),
            GridCell::new(info.kind.as_str()),
        ]));
    }
    grid.to_string()
}

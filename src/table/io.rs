use super::format::FileFormat;
use super::types::{Cell, Table};
use crate::config::Settings;
use crate::error::{Result, ResultExt as _, TabbyError};
use calamine::{Data, Reader as _, open_workbook_auto_from_rs};
use rust_xlsxwriter::{ColNum, RowNum, Workbook};
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

/// Load a table from `path`, picking the parser from the file extension.
///
/// The first row is the header. Numeric-looking fields become numbers,
/// configured missing markers become missing cells and the rest stay text.
/// For spreadsheets only the first worksheet is read.
///
/// # Errors
///
/// - [`TabbyError::UnsupportedFormat`] before the file is opened
/// - [`TabbyError::FileAccess`] if the file cannot be opened
/// - [`TabbyError::Parse`] if a row is wider or narrower than the header
pub fn load_table(path: &Path, settings: &Settings) -> Result<Table> {
    let format = FileFormat::from_path(path)?;
    log::debug!("Loading {} as {format}", path.display());

    let table = match format.delimiter() {
        Some(delimiter) => read_delimited(path, delimiter, settings),
        None => read_spreadsheet(path, settings),
    }
    .with_context(|| format!("Failed to read {}", path.display()))?;

    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );
    Ok(table)
}

/// Write `table` to `path` in the format implied by its extension.
///
/// Files ending in `.xls` are written in the Open XML workbook layout; the
/// loader recognises them by content, so they load back unchanged.
///
/// # Errors
///
/// - [`TabbyError::UnsupportedFormat`] before anything is created
/// - [`TabbyError::FileAccess`] if the file cannot be created or written
pub fn save_table(table: &Table, path: &Path) -> Result<()> {
    let format = FileFormat::from_path(path)?;

    match format.delimiter() {
        Some(delimiter) => write_delimited(table, path, delimiter)?,
        None => write_spreadsheet(table, path)?,
    }

    log::info!(
        "Wrote {} rows x {} columns to {} ({format})",
        table.row_count(),
        table.column_count(),
        path.display()
    );
    Ok(())
}

fn read_delimited(path: &Path, delimiter: u8, settings: &Settings) -> Result<Table> {
    let file = File::open(path).map_err(|e| TabbyError::file_access(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let header = reader
        .headers()?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let mut table = Table::new(header)?;

    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(|f| Cell::from_raw(f, settings)).collect())?;
    }

    Ok(table)
}

fn write_delimited(table: &Table, path: &Path, delimiter: u8) -> Result<()> {
    let file = File::create(path).map_err(|e| TabbyError::file_access(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(file);

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer
        .flush()
        .map_err(|e| TabbyError::file_access(path, e))?;
    Ok(())
}

fn read_spreadsheet(path: &Path, settings: &Settings) -> Result<Table> {
    // Sniff the workbook layout from the bytes: `.xls` files may hold either
    // the legacy binary format or Open XML.
    let bytes = std::fs::read(path).map_err(|e| TabbyError::file_access(path, e))?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TabbyError::Parse("workbook has no worksheets".to_owned()))??;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| TabbyError::Parse("missing header row".to_owned()))?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    let mut table = Table::new(header)?;

    for row in rows {
        table.push_row(row.iter().map(|d| cell_from_data(d, settings)).collect())?;
    }

    Ok(table)
}

/// Convert a literal spreadsheet value. Formulas are never evaluated; the
/// cached value stored in the file is what gets read.
fn cell_from_data(data: &Data, settings: &Settings) -> Cell {
    match data {
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) if v.is_finite() => Cell::Number(*v),
        Data::Float(v) if v.is_nan() => Cell::Missing("NaN".to_owned()),
        Data::String(s) => Cell::from_raw(s, settings),
        Data::Empty => Cell::Missing(String::new()),
        Data::Error(_) => Cell::Missing(data.to_string()),
        other => Cell::from_raw(&other.to_string(), settings),
    }
}

fn write_spreadsheet(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string(0, col_num(col)?, name.as_str())?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let r = row_num(row_idx + 1)?;
        for (col, cell) in row.iter().enumerate() {
            let c = col_num(col)?;
            match cell {
                Cell::Number(value) => {
                    worksheet.write_number(r, c, *value)?;
                }
                Cell::Text(text) => {
                    worksheet.write_string(r, c, text.as_str())?;
                }
                // Blank cells stay unwritten
                Cell::Missing(marker) if marker.is_empty() => {}
                Cell::Missing(marker) => {
                    worksheet.write_string(r, c, marker.as_str())?;
                }
            }
        }
    }

    let buffer = workbook.save_to_buffer()?;
    std::fs::write(path, buffer).map_err(|e| TabbyError::file_access(path, e))
}

fn row_num(index: usize) -> Result<RowNum> {
    RowNum::try_from(index)
        .map_err(|_| TabbyError::Spreadsheet(format!("row {index} exceeds the worksheet limit")))
}

fn col_num(index: usize) -> Result<ColNum> {
    ColNum::try_from(index).map_err(|_| {
        TabbyError::Spreadsheet(format!("column {index} exceeds the worksheet limit"))
    })
}

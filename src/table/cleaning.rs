use super::types::{Cell, Table};
use crate::config::{Settings, TextImputation};
use crate::error::{Result, TabbyError};

/// Result of a [`impute_missing`] pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImputeOutcome {
    /// Number of cells that were filled
    pub filled: usize,
    /// Columns that still have missing cells because no fill value exists
    pub skipped: Vec<String>,
}

/// Replace every cell in `column` equal to `old` with `new`.
///
/// Equality is by value: `"10"` matches a cell read as `10.0`. Returns the
/// number of changed cells; zero matches is not an error.
///
/// # Errors
///
/// Returns [`TabbyError::ColumnNotFound`] if `column` is absent, leaving the
/// table untouched.
pub fn replace_in_column(table: &mut Table, column: &str, old: &Cell, new: &Cell) -> Result<usize> {
    let index = table
        .column_index(column)
        .ok_or_else(|| TabbyError::ColumnNotFound(column.to_owned()))?;

    let mut changed = 0;
    for cell in table.rows_mut().iter_mut().filter_map(|row| row.get_mut(index)) {
        if cell == old {
            *cell = new.clone();
            changed += 1;
        }
    }

    log::debug!("Replaced {changed} cells in '{column}'");
    Ok(changed)
}

/// Replace every cell equal to `old` with `new`, in all columns.
pub fn replace_everywhere(table: &mut Table, old: &Cell, new: &Cell) -> usize {
    let mut changed = 0;
    for cell in table.rows_mut().iter_mut().flat_map(|row| row.iter_mut()) {
        if cell == old {
            *cell = new.clone();
            changed += 1;
        }
    }

    log::debug!("Replaced {changed} cells across all columns");
    changed
}

/// Arithmetic mean of the numeric cells in the column at `index`.
///
/// `None` when the column holds no numbers. The result is always finite.
pub fn column_mean(table: &Table, index: usize) -> Option<f64> {
    let numbers = || table.column_cells(index).filter_map(Cell::as_number);
    let (sum, count) = numbers().fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return None;
    }

    let mean = sum / count as f64;
    if mean.is_finite() {
        return Some(mean);
    }

    // The sum overflowed; an incremental mean never leaves the value range
    let mut mean = 0.0;
    for (seen, v) in numbers().enumerate() {
        let n = (seen + 1) as f64;
        mean += v / n - mean / n;
    }
    Some(mean)
}

/// Most common text value in the column at `index`; ties go to the value
/// seen first.
pub fn column_mode(table: &Table, index: usize) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for text in table.column_cells(index).filter_map(Cell::as_text) {
        match counts.iter_mut().find(|(value, _)| *value == text) {
            Some((_, count)) => *count += 1,
            None => counts.push((text, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_owned())
}

/// Fill missing cells, column by column.
///
/// Columns holding at least one number get the mean of their numbers
/// (rounded to `settings.mean_precision` places when set). Columns without
/// any number are left unchanged, unless `settings.text_imputation` asks
/// for the most common value. Cells holding text are never touched.
///
/// Running this twice gives the same table as running it once.
pub fn impute_missing(table: &mut Table, settings: &Settings) -> ImputeOutcome {
    let mut outcome = ImputeOutcome::default();

    for index in 0..table.column_count() {
        let fill = match column_mean(table, index) {
            Some(mean) => Some(Cell::Number(round_to(mean, settings.mean_precision))),
            None => match settings.text_imputation {
                TextImputation::Mode => column_mode(table, index).map(Cell::Text),
                TextImputation::None => None,
            },
        };

        let name = table.columns().get(index).cloned().unwrap_or_default();
        let Some(fill) = fill else {
            if table.column_cells(index).any(Cell::is_missing) {
                log::warn!("Column '{name}' has no values to impute from; left unchanged");
                outcome.skipped.push(name);
            }
            continue;
        };

        let mut filled = 0;
        for cell in table.rows_mut().iter_mut().filter_map(|row| row.get_mut(index)) {
            if cell.is_missing() {
                *cell = fill.clone();
                filled += 1;
            }
        }

        if filled > 0 {
            log::debug!("Imputed {filled} cells in '{name}' with {fill}");
        }
        outcome.filled += filled;
    }

    outcome
}

fn round_to(value: f64, places: Option<u32>) -> f64 {
    match places {
        Some(places) => {
            let factor = 10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
            let rounded = (value * factor).round() / factor;
            if rounded.is_finite() { rounded } else { value }
        }
        None => value,
    }
}

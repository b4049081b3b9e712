//! Pipeline execution engine.
//!
//! Validates a spec against the loaded table, then applies its steps in
//! phase order and reports what changed.

use super::spec::{PipelineSpec, ReplaceTarget, Step};
use super::validation::validate_pipeline;
use crate::config::Settings;
use crate::error::{Result, TabbyError};
use crate::table::{self, Cell, Table};

/// Report generated after pipeline execution
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub rows: usize,
    pub columns: usize,

    /// Number of steps applied
    pub steps_applied: usize,

    pub cells_replaced: usize,
    pub cells_imputed: usize,

    /// Columns imputation could not fill
    pub skipped_columns: Vec<String>,

    /// Time taken for execution
    pub duration: std::time::Duration,
}

impl RunReport {
    /// Create a summary message
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Pipeline completed: {} rows x {} columns, {} steps, {} cells replaced, {} cells imputed, {:.3}s",
            self.rows,
            self.columns,
            self.steps_applied,
            self.cells_replaced,
            self.cells_imputed,
            self.duration.as_secs_f64()
        );
        if !self.skipped_columns.is_empty() {
            summary.push_str(&format!(
                " (left unchanged: {})",
                self.skipped_columns.join(", ")
            ));
        }
        summary
    }
}

/// Execute a pipeline spec on a loaded table.
///
/// # Errors
///
/// Returns [`TabbyError::ColumnNotFound`] if a replacement names a column the
/// table lacks. Validation happens first, so on error the table is unchanged.
pub fn run_pipeline(spec: &PipelineSpec, table: &mut Table, settings: &Settings) -> Result<RunReport> {
    let start = std::time::Instant::now();

    if let Some(err) = validate_pipeline(spec, table).into_iter().next() {
        log::debug!("Pipeline validation failed: {err}");
        return Err(TabbyError::from(err));
    }

    if log::log_enabled!(log::Level::Trace) {
        log::trace!("Running pipeline {}", spec.to_json()?);
    }

    let mut report = RunReport::default();

    for step in spec.ordered_steps() {
        match step {
            Step::Replace { target, old, new } => {
                let old = Cell::from_raw(old, settings);
                let new = Cell::from_raw(new, settings);
                let changed = match target {
                    ReplaceTarget::Column(column) => {
                        table::replace_in_column(table, column, &old, &new)?
                    }
                    ReplaceTarget::AllColumns => table::replace_everywhere(table, &old, &new),
                };
                log::info!("Replaced '{old}' with '{new}' in {changed} cells");
                report.cells_replaced += changed;
            }
            Step::ImputeMissing => {
                let outcome = table::impute_missing(table, settings);
                log::info!("Imputed {} missing cells", outcome.filled);
                report.cells_imputed += outcome.filled;
                report.skipped_columns.extend(outcome.skipped);
            }
        }
        report.steps_applied += 1;
    }

    report.rows = table.row_count();
    report.columns = table.column_count();
    report.duration = start.elapsed();
    Ok(report)
}

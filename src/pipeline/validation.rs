//! Pipeline validation against a loaded table.
//!
//! Validation runs before any step is applied, so a pipeline that names an
//! unknown column fails without touching the table.

use super::spec::{PipelineSpec, ReplaceTarget, Step};
use crate::error::TabbyError;
use crate::table::Table;

/// Validation error with step index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub step_index: usize,
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    ColumnNotFound(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ValidationErrorKind::ColumnNotFound(name) => {
                write!(f, "Step {}: column '{name}' not found", self.step_index + 1)
            }
        }
    }
}

impl From<ValidationError> for TabbyError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ValidationErrorKind::ColumnNotFound(name) => Self::ColumnNotFound(name),
        }
    }
}

/// Check every step against the table's columns.
pub fn validate_pipeline(spec: &PipelineSpec, table: &Table) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (step_index, step) in spec.steps.iter().enumerate() {
        match step {
            Step::Replace {
                target: ReplaceTarget::Column(column),
                ..
            } => {
                if table.column_index(column).is_none() {
                    errors.push(ValidationError {
                        step_index,
                        kind: ValidationErrorKind::ColumnNotFound(column.clone()),
                    });
                }
            }
            Step::Replace {
                target: ReplaceTarget::AllColumns,
                ..
            }
            | Step::ImputeMissing => {}
        }
    }

    errors
}

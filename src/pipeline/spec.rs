//! Pipeline specification data structures.
//!
//! A [`PipelineSpec`] is the ordered list of edits requested for one run.
//! Steps always execute in phase order: every replacement first, then
//! imputation, whatever order they were added in.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Which cells a replacement looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope", content = "column")]
pub enum ReplaceTarget {
    /// A single named column
    Column(String),
    /// Every column
    AllColumns,
}

/// Individual transformation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Replace cells equal to `old` with `new`. Both are raw text, coerced
    /// the same way as loaded cells.
    Replace {
        target: ReplaceTarget,
        old: String,
        new: String,
    },

    /// Fill missing cells with the column mean
    ImputeMissing,
}

impl Step {
    /// Execution phase; lower runs first.
    pub fn phase(&self) -> u8 {
        match self {
            Self::Replace { .. } => 0,
            Self::ImputeMissing => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Replace { .. } => "replace",
            Self::ImputeMissing => "impute_missing",
        }
    }
}

/// Root pipeline specification structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    pub steps: Vec<Step>,
}

impl PipelineSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a replacement limited to `column`.
    #[must_use]
    pub fn replace(
        mut self,
        column: impl Into<String>,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        self.steps.push(Step::Replace {
            target: ReplaceTarget::Column(column.into()),
            old: old.into(),
            new: new.into(),
        });
        self
    }

    /// Add a replacement across every column.
    #[must_use]
    pub fn replace_all(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.steps.push(Step::Replace {
            target: ReplaceTarget::AllColumns,
            old: old.into(),
            new: new.into(),
        });
        self
    }

    #[must_use]
    pub fn impute_missing(mut self) -> Self {
        if !self.steps.contains(&Step::ImputeMissing) {
            self.steps.push(Step::ImputeMissing);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in execution order. Steps of the same phase keep the order
    /// they were added in.
    pub fn ordered_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.phase());
        steps
    }

    /// Serialize pipeline spec to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a pipeline spec from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

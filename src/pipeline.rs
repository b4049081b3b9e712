//! Transformation pipeline applied between loading and output.
//!
//! The pipeline holds the edits requested for one run. It has two kinds of
//! step:
//! - **Replace**: value substitution in one column or in every column
//! - **Impute missing**: fill empty / `NaN` cells with the column mean
//!
//! Replacements always run before imputation, so a replacement can turn a
//! placeholder such as `-` into a missing marker that imputation then fills.
//!
//! # Example
//!
//! ```no_run
//! use tabby::config::Settings;
//! use tabby::pipeline::{PipelineSpec, run_pipeline};
//! use tabby::table::load_table;
//! use std::path::Path;
//!
//! let settings = Settings::default();
//! let mut table = load_table(Path::new("cities.csv"), &settings)?;
//!
//! let spec = PipelineSpec::new()
//!     .replace("Annual Rainfall", "-", "NaN")
//!     .impute_missing();
//!
//! let report = run_pipeline(&spec, &mut table, &settings)?;
//! println!("{}", report.summary());
//! # Ok::<(), tabby::error::TabbyError>(())
//! ```

pub mod executor;
pub mod spec;
pub mod validation;

pub use executor::{RunReport, run_pipeline};
pub use spec::{PipelineSpec, ReplaceTarget, Step};
pub use validation::{ValidationError, ValidationErrorKind, validate_pipeline};

//! # Tabby - Simple Table Manipulator
//!
//! Tabby reads a CSV, TSV, XLS or XLSX file into memory, applies a few
//! in-place edits, and either prints the table as a text grid or writes it to
//! another file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tabby::config::Settings;
//! use tabby::table::{self, load_table, save_table};
//! use std::path::Path;
//!
//! let settings = Settings::default();
//! let mut data = load_table(Path::new("cities.csv"), &settings)?;
//!
//! let outcome = table::impute_missing(&mut data, &settings);
//! println!("filled {} cells", outcome.filled);
//!
//! print!("{}", table::render_table(&data));
//! save_table(&data, Path::new("cities.xlsx"))?;
//! # Ok::<(), tabby::error::TabbyError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`table`]: the in-memory table, loading/saving, cleaning, profiling and
//!   rendering
//! - [`pipeline`]: ordered edits requested for a run, with validation
//! - [`config`]: JSON settings (missing markers, rounding, text imputation)
//! - [`error`]: error types
//! - [`logging`]: `env_logger` setup for the binary
//!
//! ## Formats
//!
//! The format is picked from the file extension, for input and output alike:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.csv`    | comma-separated, header row first |
//! | `.tsv`    | tab-separated, header row first |
//! | `.xls`    | spreadsheet, first sheet, first row is the header |
//! | `.xlsx`   | spreadsheet, first sheet, first row is the header |

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod table;

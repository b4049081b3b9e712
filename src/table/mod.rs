pub mod cleaning;
pub mod format;
pub mod io;
pub mod profiling;
pub mod render;
pub mod types;

pub use cleaning::{
    ImputeOutcome, column_mean, column_mode, impute_missing, replace_everywhere,
    replace_in_column,
};
pub use format::FileFormat;
pub use io::{load_table, save_table};
pub use profiling::{ColumnInfo, Dimensions, dimensions, infer_kind, list_columns};
pub use render::{render_columns, render_dimensions, render_table};
pub use types::{Cell, ColumnKind, Table};

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tabby::config::Settings;
use tabby::pipeline::{PipelineSpec, run_pipeline};
use tabby::table::{self, FileFormat, load_table, save_table};

#[derive(Parser, Debug)]
#[command(
    name = "tabby",
    version,
    about = "Simple table manipulator: view, clean and convert CSV, TSV, XLS and XLSX files"
)]
pub struct Cli {
    /// Path to the input file (.csv, .tsv, .xls or .xlsx)
    pub filename: PathBuf,

    /// Path to the output file. The format follows its extension and the
    /// table is not printed.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Change values in a column. May be given more than once.
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["COLUMN", "OLD", "NEW"],
        allow_hyphen_values = true
    )]
    pub change: Option<Vec<String>>,

    /// Change values in every column
    #[arg(long, num_args = 2, value_names = ["OLD", "NEW"], allow_hyphen_values = true)]
    pub change_all: Option<Vec<String>>,

    /// Replace NaN or empty cells with the column mean
    #[arg(short, long)]
    pub nan: bool,

    /// Display table dimensions
    #[arg(short, long)]
    pub dimensions: bool,

    /// Display the list of columns in the table
    #[arg(short, long)]
    pub list_columns: bool,

    /// Path to a JSON settings file
    #[arg(long, env = "TABBY_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Edits requested on the command line, in execution order.
    pub fn pipeline(&self) -> PipelineSpec {
        let mut spec = PipelineSpec::new();

        for change in self.change.iter().flat_map(|values| values.chunks_exact(3)) {
            if let [column, old, new] = change {
                spec = spec.replace(column, old, new);
            }
        }
        for change in self.change_all.iter().flat_map(|values| values.chunks_exact(2)) {
            if let [old, new] = change {
                spec = spec.replace_all(old, new);
            }
        }
        if self.nan {
            spec = spec.impute_missing();
        }

        spec
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;

    // Fail on a bad output name before doing any work
    if let Some(output) = &cli.output {
        FileFormat::from_path(output)?;
    }

    let mut data = load_table(&cli.filename, &settings)?;

    let spec = cli.pipeline();
    if !spec.is_empty() {
        let report = run_pipeline(&spec, &mut data, &settings)?;
        log::info!("{}", report.summary());
    }

    let mut out = std::io::stdout().lock();

    if cli.dimensions {
        write!(out, "{}", table::render_dimensions(&table::dimensions(&data)))?;
    }
    if cli.list_columns {
        write!(out, "{}", table::render_columns(&table::list_columns(&data)))?;
    }

    match &cli.output {
        Some(output) => save_table(&data, output)?,
        None => write!(out, "{}", table::render_table(&data))?,
    }

    out.flush()?;
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            log::debug!("Loading settings from {}", path.display());
            Settings::from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))
        }
        None => Ok(Settings::default()),
    }
}

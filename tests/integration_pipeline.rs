//! Integration tests for the full load, edit, output workflow
//!
//! The first half drives the library on fixture files; the second half runs
//! the `tabby` binary and checks its stdout, stderr and exit status.

#![expect(clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tabby::config::Settings;
use tabby::error::TabbyError;
use tabby::pipeline::{PipelineSpec, run_pipeline};
use tabby::table::{Cell, load_table, save_table};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

fn tabby(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tabby"))
        .args(args)
        .env_remove("TABBY_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_clean_and_convert_to_xlsx() {
    let settings = Settings::default();
    let mut table = load_table(&fixture("missing_values.csv"), &settings).unwrap();

    let spec = PipelineSpec::new()
        .replace("department", "Sales", "Retail")
        .impute_missing();
    let report = run_pipeline(&spec, &mut table, &settings).unwrap();

    assert_eq!(report.cells_replaced, 2);
    // age and salary each have two gaps; name and department are text
    assert_eq!(report.cells_imputed, 4);
    assert_eq!(report.skipped_columns, ["name", "department"]);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("clean.xlsx");
    save_table(&table, &out).unwrap();

    let reloaded = load_table(&out, &settings).unwrap();
    assert_eq!(reloaded, table);
    assert_eq!(reloaded.cell(0, "department"), Some(&Cell::Text("Retail".to_owned())));
    assert_eq!(reloaded.cell(1, "age"), Some(&Cell::Number(104.0 / 3.0)));
}

#[test]
fn test_unknown_column_fails_before_output() {
    let settings = Settings::default();
    let mut table = load_table(&fixture("cities.csv"), &settings).unwrap();

    let spec = PipelineSpec::new().replace("Country", "AU", "Australia");
    let err = run_pipeline(&spec, &mut table, &settings).unwrap_err();

    assert!(matches!(err, TabbyError::ColumnNotFound(ref name) if name == "Country"));
    assert_eq!(err.to_string(), "Column not found: 'Country'");
}

#[test]
fn test_cli_help() {
    let output = tabby(&["--help"]);
    assert!(output.status.success(), "--help should exit 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--change"));
    assert!(stdout.contains("--list-columns"));
}

#[test]
fn test_cli_prints_grid() {
    let path = fixture("cities.csv");
    let output = tabby(&[path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("+-"));
    assert!(stdout.contains("| City name "));
    assert!(stdout.contains("| Perth "));
    assert!(output.stderr.is_empty(), "no log output by default");
}

#[test]
fn test_cli_dimensions_and_columns() {
    let path = fixture("cities.csv");
    let output = tabby(&[path.to_str().unwrap(), "-d", "-l"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Number of rows with header"));
    // Counts are right-aligned under their titles
    assert!(stdout.contains(" 8 | "));
    assert!(stdout.contains(" 7 | "));
    assert!(stdout.contains(" 4 |\n"));
    assert!(stdout.contains("Column name"));
    assert!(stdout.contains("| Annual Rainfall | numeric "));

    // The reports come before the table itself
    let report_end = stdout.find("Column type").unwrap();
    let table_start = stdout.find("| Adelaide ").unwrap();
    assert!(report_end < table_start);
}

#[test]
fn test_cli_change_and_write_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cities.tsv");
    let path = fixture("cities.csv");

    let output = tabby(&[
        path.to_str().unwrap(),
        "-c",
        "City name",
        "Adelaide",
        "AdelaideX",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "table is not printed with -o");

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("City name\tArea\tPopulation\tAnnual Rainfall\n"));
    assert!(written.contains("AdelaideX\t1295\t1158259\t600.5\n"));
    assert!(!written.contains("\nAdelaide\t"));
}

#[test]
fn test_cli_unsupported_input() {
    let output = tabby(&["data.txt"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains(".txt"));
}

#[test]
fn test_cli_unsupported_output_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cities.json");
    let path = fixture("cities.csv");

    let output = tabby(&[path.to_str().unwrap(), "-o", out.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!out.exists());
}

#[test]
fn test_cli_missing_column() {
    let path = fixture("cities.csv");
    let output = tabby(&[path.to_str().unwrap(), "-c", "Country", "AU", "Australia"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Column not found: 'Country'"));
}

#[test]
fn test_cli_version() {
    let output = tabby(&["-V"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("tabby {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_impute_fills_numeric_gaps() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("filled.csv");
    let path = fixture("missing_values.csv");

    let output = tabby(&[path.to_str().unwrap(), "-n", "-o", out.to_str().unwrap()]);
    assert!(output.status.success());

    // Text columns keep their gaps
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        "id,name,age,salary,department\n\
         1,Alice,34,52000,Sales\n\
         2,Bob,34.666666666666664,48000,\n\
         3,Carol,29,53666.666666666664,Engineering\n\
         4,,41,61000,Engineering\n\
         5,Eve,34.666666666666664,53666.666666666664,Sales\n"
    );
}

#[test]
fn test_cli_impute_shows_means_in_grid() {
    let path = fixture("missing_values.csv");
    let output = tabby(&[path.to_str().unwrap(), "--nan"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" 34.666666666666664 |"));
    assert!(stdout.contains(" 53666.666666666664 |"));
    assert!(!stdout.contains("NaN"));
}

#[test]
fn test_cli_change_all_columns() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("renamed.csv");
    let path = fixture("missing_values.csv");

    let output = tabby(&[
        path.to_str().unwrap(),
        "--change-all",
        "Sales",
        "Retail",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(!written.contains("Sales"));
    assert_eq!(written.matches(",Retail\n").count(), 2);
}

fn write_rain(dir: &Path) -> PathBuf {
    let path = dir.join("rain.csv");
    std::fs::write(&path, "city,rain\nAdelaide,10\nBrisbane,-\nDarwin,40\n").unwrap();
    path
}

#[test]
fn test_cli_config_sets_missing_markers() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rain(dir.path());
    let config = dir.path().join("settings.json");
    std::fs::write(&config, r#"{"missing_markers": ["-"]}"#).unwrap();
    let out = dir.path().join("out.csv");

    let output = tabby(&[
        input.to_str().unwrap(),
        "-n",
        "--config",
        config.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(std::fs::read_to_string(&out).unwrap().contains("Brisbane,25\n"));

    // Without the settings file "-" is plain text and stays put
    let output = tabby(&[input.to_str().unwrap(), "-n", "-o", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(std::fs::read_to_string(&out).unwrap().contains("Brisbane,-\n"));
}

#[test]
fn test_cli_config_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_rain(dir.path());
    let config = dir.path().join("settings.json");
    std::fs::write(&config, r#"{"missing_markers": ["-"], "mean_precision": 0}"#).unwrap();
    let out = dir.path().join("out.csv");

    let output = Command::new(env!("CARGO_BIN_EXE_tabby"))
        .args([input.to_str().unwrap(), "-n", "-o", out.to_str().unwrap()])
        .env("TABBY_CONFIG", &config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(std::fs::read_to_string(&out).unwrap().contains("Brisbane,25\n"));
}

#[test]
fn test_cli_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.json");
    std::fs::write(&config, r#"{"missing": ["-"]}"#).unwrap();
    let path = fixture("cities.csv");

    let output = tabby(&[path.to_str().unwrap(), "--config", config.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "stderr was {stderr}");
    assert!(stderr.contains("settings.json"));

    let missing = dir.path().join("absent.json");
    let output = tabby(&[path.to_str().unwrap(), "--config", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

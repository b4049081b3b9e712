//! Diagnostic logging for the command-line tool.
//!
//! Logs go to stderr through `env_logger` so that stdout only carries the
//! rendered table and reports. The default level follows the number of
//! `-v` flags and `RUST_LOG` overrides it:
//!
//! ```bash
//! tabby data.csv -n -v          # info: rows loaded, cells imputed, ...
//! RUST_LOG=debug tabby data.csv # everything
//! ```

use env_logger::{Builder, Env};

/// Default filter for a given verbosity (number of `-v` flags).
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Initializes the global logger.
///
/// # Errors
///
/// Returns error if a logger was already installed.
pub fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)))
        .format_timestamp(None)
        .format_target(false)
        .try_init()?;

    log::debug!("Logging initialized at verbosity {verbosity}");
    Ok(())
}

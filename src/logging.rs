//! Logging initialization for the `fx` CLI.
//!
//! Diagnostics go to stderr so stdout stays clean for command output
//! (and for `--json` consumers).

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `-v`/`-vv`/`-vvv` raise the default level; `-q` drops to errors only.
/// A `RUST_LOG` value overrides both.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), String> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}

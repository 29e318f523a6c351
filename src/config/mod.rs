//! Configuration for the `fx` CLI.
//!
//! Only one knob today: where the durable store lives. Resolution order
//! is `--data-dir` flag (backed by the `FIXIT_DATA_DIR` env var via
//! clap), then a `fixit.yaml` in the working directory, then `.fixit`.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Default on-disk location for the durable store.
pub const DEFAULT_DATA_DIR: &str = ".fixit";

/// Workspace config file name.
pub const CONFIG_FILE: &str = "fixit.yaml";

/// Configuration resolution failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    data_dir: Option<PathBuf>,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve the effective configuration.
    ///
    /// `flag` already carries the env-var value when the flag itself was
    /// not given (clap's `env` feature).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `fixit.yaml` exists but cannot be read
    /// or parsed. A missing file is not an error.
    pub fn resolve(flag: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(data_dir) = flag {
            return Ok(Self { data_dir });
        }

        let path = PathBuf::from(CONFIG_FILE);
        if path.exists() {
            let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let file: FileConfig =
                serde_yaml::from_str(&text).map_err(|e| ConfigError::Parse {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            if let Some(data_dir) = file.data_dir {
                return Ok(Self { data_dir });
            }
        }

        Ok(Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        })
    }
}

//! Resolution of API settings from the command line, environment, and an
//! optional YAML file.
//!
//! Precedence is CLI flag or environment variable first, then the file,
//! then the built-in default. The API key has no default; it must come from
//! one of the first two sources.
//!
//! ```yaml
//! api_key: "..."
//! endpoint: "https://newsapi.org/v2/everything"
//! timeout_secs: 10
//! ```

use crate::api::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::cli::Cli;
use crate::error::SearchError;
use crate::models::ApiKey;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;
use tracing::{info, instrument};

/// Contents of the YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Load a [`FileConfig`] from `path`.
#[instrument(level = "info")]
pub fn load_file_config(path: &str) -> Result<FileConfig, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config: FileConfig = serde_yaml::from_str(&raw)?;
    info!(
        has_api_key = config.api_key.is_some(),
        endpoint = ?config.endpoint,
        "Loaded configuration"
    );
    Ok(config)
}

/// Settings used to build the client and session.
#[derive(Debug)]
pub struct Settings {
    pub api_key: ApiKey,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Settings {
    /// Merge CLI values over file values over defaults.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingCredential`] without a non-blank key, and
    /// [`SearchError::InvalidConfig`] for a zero timeout.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, SearchError> {
        let api_key = ApiKey::new(cli.api_key.clone().or(file.api_key).unwrap_or_default())?;
        let endpoint = cli
            .endpoint
            .clone()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let timeout = match cli.timeout_secs.or(file.timeout_secs) {
            Some(0) => {
                return Err(SearchError::InvalidConfig(
                    "timeout_secs must be greater than zero".to_string(),
                ));
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            endpoint,
            timeout,
        })
    }

    /// Read the file named by `--config`, if any, and resolve.
    pub fn load(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let file = match &cli.config {
            Some(path) => load_file_config(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(cli, file)?)
    }
}

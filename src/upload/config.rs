//! Analyzer endpoint configuration.
//!
//! Settings can come from an `analyzer.toml` file; omitted fields fall back
//! to defaults. Environment overrides are applied by the binary, not here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default submission timeout: 30 seconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for the analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Full URL of the analysis endpoint.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Cancellation window for one submission, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint_url() -> String {
    "http://localhost:8000/analyze".to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Errors loading configuration from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no analyzer.toml found in standard locations")]
    NotFound,
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `analyzer.toml` in the current directory, then the
    /// parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("analyzer.toml"),
            PathBuf::from("../analyzer.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }
}

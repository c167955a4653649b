//! Service configuration loaded from `metatag.toml`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::DEFAULT_TABLE_NAME;

/// Config file name looked up by embedders
pub const CONFIG_FILE_NAME: &str = "metatag.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("Config I/O error on '{path}': {source}")]
    Io {
        /// File involved
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The content does not parse or holds an unusable value
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tagging service configuration.
///
/// # Example
///
/// ```toml
/// table_name = "MetaTable"
/// id_length = 32
/// scan_timeout_ms = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggerConfig {
    /// Name of the table holding tag records.
    #[serde(default = "default_table_name")]
    pub table_name: String,
    /// Length of generated record ids.
    #[serde(default = "default_id_length")]
    pub id_length: usize,
    /// Upper bound on draining a query's row stream, in milliseconds.
    #[serde(default = "default_scan_timeout_ms")]
    pub scan_timeout_ms: u64,
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_id_length() -> usize {
    32
}

fn default_scan_timeout_ms() -> u64 {
    5000
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            table_name: default_table_name(),
            id_length: default_id_length(),
            scan_timeout_ms: default_scan_timeout_ms(),
        }
    }
}

impl TaggerConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for an empty table name or a zero length/timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_name.is_empty() {
            return Err(ConfigError::Invalid("table_name must not be empty".to_string()));
        }
        if self.id_length == 0 {
            return Err(ConfigError::Invalid("id_length must be greater than 0".to_string()));
        }
        if self.scan_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "scan_timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Scan bound as a `Duration`
    pub fn scan_timeout(&self) -> Duration {
        Duration::from_millis(self.scan_timeout_ms)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Metatag service configuration
#
# Table holding tag records (default: "MetaTable")
table_name = "MetaTable"

# Length of generated record ids (default: 32)
id_length = 32

# Upper bound in milliseconds on waiting for a query's rows (default: 5000)
scan_timeout_ms = 5000
"#
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: TaggerConfig = toml::from_str(&content).map_err(|e| {
            ConfigError::Invalid(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

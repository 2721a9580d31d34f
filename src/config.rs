//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file: `--config <path>`
//! 3. Environment variables: `RAILCALL_ADDEND`, `RAILCALL_LOG`
//! 4. CLI flags
//!
//! # Example Config
//!
//! ```toml
//! addend = 5
//! values = [8, 6]
//! log_filter = "info"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::ConfigError;

const ENV_ADDEND: &str = "RAILCALL_ADDEND";
const ENV_LOG: &str = "RAILCALL_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdderConfig {
    /// Value captured by the adder closure.
    pub addend: i64,
    /// Values passed to the closure, one call each.
    pub values: Vec<i64>,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AdderConfig {
    fn default() -> Self {
        Self {
            addend: 5,
            values: vec![8, 6],
            log_filter: "info".to_string(),
        }
    }
}

impl AdderConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `TomlParseFailed` if the document is not valid TOML or has
    /// mistyped keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::toml_parse_failed(e.to_string()))
    }

    /// Load a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `FileReadFailed` if the file cannot be read, or
    /// `TomlParseFailed` if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::file_read_failed(path, e.to_string()))?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::TomlParseFailed { reason } => {
                ConfigError::toml_parse_failed(format!("{}: {reason}", path.display()))
            }
            other => other,
        })
    }

    /// Apply `RAILCALL_*` overrides. `lookup` is `std::env::var` in
    /// production and a map in tests.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `RAILCALL_ADDEND` is not an integer.
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addend) = lookup(ENV_ADDEND) {
            self.addend = addend.trim().parse().map_err(|e| {
                ConfigError::invalid_config(format!("Invalid {ENV_ADDEND} value: {e}"))
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Apply command-line flags. Positional values replace the configured
    /// list only when at least one is given.
    #[must_use]
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(addend) = cli.addend {
            self.addend = addend;
        }
        if !cli.values.is_empty() {
            self.values.clone_from(&cli.values);
        }
        if let Some(filter) = &cli.log {
            self.log_filter.clone_from(filter);
        }
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` if the log filter is empty.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::invalid_config("log_filter cannot be empty"));
        }
        Ok(self)
    }

    /// Render the configuration back to TOML.
    ///
    /// # Errors
    ///
    /// Returns `TomlSerializeFailed` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::TomlSerializeFailed {
            reason: e.to_string(),
        })
    }
}

/// Build the effective configuration for a CLI invocation.
///
/// # Errors
///
/// Propagates any file, parse, environment or validation error.
pub fn load_config(cli: &Cli) -> Result<AdderConfig, ConfigError> {
    cli.config
        .as_deref()
        .map_or_else(|| Ok(AdderConfig::default()), AdderConfig::from_file)?
        .apply_env_overrides(|key| std::env::var(key).ok())
        .map(|config| config.apply_cli(cli))
        .and_then(AdderConfig::validate)
}

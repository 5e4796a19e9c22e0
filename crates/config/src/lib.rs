#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for auto-patch
//!
//! Configuration is layered: built-in defaults, then each TOML file in the
//! order given (later files override earlier ones key by key), then
//! environment variable overrides, then command line flags applied by the
//! caller.

pub mod constants;
pub mod flag;
pub mod mail;
pub mod sections;

pub use flag::parse_flag;
pub use mail::{expand_template, MailReportConfig, MailSettings};
pub use sections::{LoggingConfig, RetryConfig, ZypperConfig};

use autopatch_errors::{ConfigError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete auto-patch configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub mailreport: MailReportConfig,
    #[serde(default)]
    pub zypper: ZypperConfig,
}

impl Config {
    /// Configuration files to read when none are given on the command line
    ///
    /// Taken from `AUTO_PATCH_CFG` (colon-separated) if set, otherwise the
    /// system-wide default.
    #[must_use]
    pub fn default_paths() -> Vec<PathBuf> {
        match std::env::var(constants::CONFIG_PATH_ENV) {
            Ok(value) if !value.trim().is_empty() => value
                .split(':')
                .filter(|part| !part.is_empty())
                .map(PathBuf::from)
                .collect(),
            _ => vec![PathBuf::from(constants::DEFAULT_CONFIG_PATH)],
        }
    }

    /// Load and merge configuration files
    ///
    /// Files that do not exist are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read, is not valid
    /// TOML, or holds a value of the wrong type.
    pub fn load(paths: &[PathBuf]) -> Result<Self, Error> {
        let mut merged = toml::Table::new();
        for path in paths {
            match std::fs::read_to_string(path) {
                Ok(contents) => {
                    let table = parse_table(path, &contents)?;
                    tracing::debug!(path = %path.display(), "read configuration file");
                    merge_tables(&mut merged, table);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "configuration file not found, skipping");
                }
                Err(e) => {
                    return Err(ConfigError::ReadError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    }
                    .into());
                }
            }
        }
        Self::from_table(merged)
    }

    /// Parse a single TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or holds a value
    /// of the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self, Error> {
        let table = parse_table(Path::new("<string>"), contents)?;
        Self::from_table(table)
    }

    fn from_table(table: toml::Table) -> Result<Self, Error> {
        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::from(e).into())
    }

    /// Apply `AUTO_PATCH_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override is set to an unparseable value.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        if let Ok(value) = std::env::var(constants::ENV_RETRY_MAX) {
            self.retry.max = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: constants::ENV_RETRY_MAX.to_string(),
                value: value.clone(),
            })?;
        }

        if let Ok(value) = std::env::var(constants::ENV_RETRY_WAIT) {
            self.retry.wait = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: constants::ENV_RETRY_WAIT.to_string(),
                value: value.clone(),
            })?;
        }

        if let Ok(value) = std::env::var(constants::ENV_MAILREPORT) {
            self.mailreport.report = parse_flag(&value).ok_or_else(|| ConfigError::InvalidValue {
                field: constants::ENV_MAILREPORT.to_string(),
                value: value.clone(),
            })?;
        }

        if let Ok(value) = std::env::var(constants::ENV_MAILTO) {
            if !value.trim().is_empty() {
                self.mailreport.mailto = value;
            }
        }

        Ok(())
    }

    /// Validate values that parse but make no sense
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if self.retry.max == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry.max".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        if self.zypper.binary.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                message: "zypper.binary must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn parse_table(path: &Path, contents: &str) -> Result<toml::Table, Error> {
    toml::from_str(contents).map_err(|e: toml::de::Error| {
        ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Merge `overlay` into `base`, descending into nested tables
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::merge_tables;

    #[test]
    fn test_merge_tables_per_key() {
        let mut base: toml::Table = toml::from_str("[retry]\nmax = 5\nwait = 10\n").unwrap();
        let overlay: toml::Table = toml::from_str("[retry]\nwait = 0\n").unwrap();
        merge_tables(&mut base, overlay);

        let retry = base["retry"].as_table().unwrap();
        assert_eq!(retry["max"].as_integer(), Some(5));
        assert_eq!(retry["wait"].as_integer(), Some(0));
    }
}

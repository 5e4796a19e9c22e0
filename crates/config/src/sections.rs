//! Retry, logging and zypper sections

use autopatch_types::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_ZYPPER;

/// Retry policy for transient zypper failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max")]
    pub max: u32,
    #[serde(default = "default_wait")]
    pub wait: u64, // seconds
}

impl RetryConfig {
    #[must_use]
    pub fn wait_duration(&self) -> Duration {
        Duration::from_secs(self.wait)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max: default_max(),
            wait: default_wait(),
        }
    }
}

/// Minimum severities for the three log sinks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_journal_level")]
    pub journal_level: Severity,
    #[serde(default = "default_stderr_level")]
    pub stderr_level: Severity,
    #[serde(default = "default_report_level")]
    pub report_level: Severity,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            journal_level: default_journal_level(),
            stderr_level: default_stderr_level(),
            report_level: default_report_level(),
        }
    }
}

/// Location of the zypper binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZypperConfig {
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
}

impl Default for ZypperConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

// Default value functions for serde
fn default_max() -> u32 {
    30
}

fn default_wait() -> u64 {
    60
}

fn default_journal_level() -> Severity {
    Severity::Info
}

fn default_stderr_level() -> Severity {
    Severity::Debug
}

fn default_report_level() -> Severity {
    Severity::Warning
}

fn default_binary() -> PathBuf {
    PathBuf::from(DEFAULT_ZYPPER)
}

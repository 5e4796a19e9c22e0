use autopatch_types::{Severity, Subcommand};
use serde::{Deserialize, Serialize};

/// Events around a single zypper invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZypperEvent {
    /// About to spawn zypper
    CommandStarted {
        subcommand: Subcommand,
        command: String,
    },

    /// Zypper exited normally
    CommandFinished {
        subcommand: Subcommand,
        exit_code: i32,
    },

    /// Zypper wrote to standard error
    CommandStderr {
        subcommand: Subcommand,
        stderr: String,
    },
}

impl ZypperEvent {
    #[must_use]
    pub fn level(&self) -> Severity {
        match self {
            Self::CommandStarted { .. }
            | Self::CommandFinished { .. }
            | Self::CommandStderr { .. } => Severity::Debug,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::CommandStarted { command, .. } => format!("run: {command}"),
            Self::CommandFinished { exit_code, .. } => {
                format!("return code from zypper: {exit_code}")
            }
            Self::CommandStderr { subcommand, stderr } => {
                format!("zypper {subcommand} stderr: {}", stderr.trim_end())
            }
        }
    }
}

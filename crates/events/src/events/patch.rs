use autopatch_types::{FailureClass, Outcome, Severity};
use serde::{Deserialize, Serialize};

/// Progress and failures of the patch state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatchEvent {
    NoPatchesNeeded,

    /// Patches are needed; `summary` is the "N patches needed" line when
    /// zypper printed one
    PatchesNeeded { summary: Option<String> },

    PatchesInstalled,

    /// The package manager itself was updated and check must run again
    RestartRequired,

    RebootRequired,

    /// A transient failure will be retried after `wait_secs`
    Retrying {
        outcome: Outcome,
        attempt: u32,
        max_attempts: u32,
        wait_secs: u64,
    },

    /// The retry budget is exhausted
    GaveUp { outcome: Outcome, attempts: u32 },

    /// A zypper call failed with a non-retryable outcome
    Failed {
        outcome: Outcome,
        command: String,
        stderr: String,
    },

    /// A failure that carries no zypper exit code
    InternalError { message: String },
}

impl PatchEvent {
    #[must_use]
    pub fn level(&self) -> Severity {
        match self {
            Self::NoPatchesNeeded => Severity::Debug,
            Self::PatchesNeeded { .. } | Self::PatchesInstalled | Self::RestartRequired => {
                Severity::Info
            }
            Self::RebootRequired | Self::Retrying { .. } => Severity::Warning,
            Self::GaveUp { .. } => Severity::Error,
            Self::Failed { outcome, .. } => match outcome.failure_class() {
                Some(FailureClass::Internal) => Severity::Critical,
                _ => Severity::Error,
            },
            Self::InternalError { .. } => Severity::Critical,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoPatchesNeeded => "no patches needed".to_string(),
            Self::PatchesNeeded { summary } => summary
                .clone()
                .unwrap_or_else(|| "patches are needed".to_string()),
            Self::PatchesInstalled => "patches successfully installed".to_string(),
            Self::RestartRequired => {
                "patch requires restart to check again for more patches".to_string()
            }
            Self::RebootRequired => "reboot is required after installing patches".to_string(),
            Self::Retrying { outcome, .. } => format!("{outcome}.  Will try again ..."),
            Self::GaveUp { outcome, attempts } => {
                format!("{outcome}.  Giving up after {attempts} tries.")
            }
            Self::Failed {
                outcome,
                command,
                stderr,
            } => {
                let code = outcome.exit_code().unwrap_or_default();
                if matches!(outcome.failure_class(), Some(FailureClass::Internal)) {
                    let stderr = stderr.trim_end();
                    if stderr.is_empty() {
                        format!("Internal error: {outcome} (exit code {code}) from {command}")
                    } else {
                        format!(
                            "Internal error: {outcome} (exit code {code}) from {command}\n{stderr}"
                        )
                    }
                } else {
                    format!("{outcome} (exit code {code})")
                }
            }
            Self::InternalError { message } => format!("Internal error: {message}"),
        }
    }
}

//! Zypper invocation error types

use std::borrow::Cow;

use crate::UserFacingError;
use autopatch_types::{exit_code, FailureClass, Outcome, Subcommand};
use thiserror::Error;

/// Failure of a single zypper invocation
///
/// `Exit` carries the classified outcome so callers never have to look at
/// the raw exit code again.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ZypperError {
    #[error("{outcome}")]
    Exit {
        subcommand: Subcommand,
        outcome: Outcome,
        exit_code: i32,
        command: String,
        stderr: String,
    },

    #[error("failed to execute {command}: {message}")]
    SpawnFailed { command: String, message: String },

    #[error("{command} was terminated by a signal")]
    Terminated { command: String },
}

impl ZypperError {
    /// Classified outcome of a failing exit, `None` if zypper never exited
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Exit { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// Raw zypper exit code, if zypper exited normally
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    /// Command line of the failed invocation
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::Exit { command, .. }
            | Self::SpawnFailed { command, .. }
            | Self::Terminated { command } => command,
        }
    }
}

impl UserFacingError for ZypperError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Exit { exit_code, .. } => match *exit_code {
                exit_code::PRIVILEGES => Some("Run auto-patch as root."),
                exit_code::NO_REPOS => {
                    Some("Add at least one repository with `zypper addrepo`.")
                }
                exit_code::LOCKED => Some(
                    "Another process holds the ZYPP lock; the next scheduled run will try again.",
                ),
                exit_code::REPOS_SKIPPED => {
                    Some("Check network access to the configured repositories.")
                }
                exit_code::RPM_SCRIPT_FAILED | exit_code::COMMIT => {
                    Some("Inspect the report and the zypper log in /var/log/zypper.log.")
                }
                _ => None,
            },
            Self::SpawnFailed { .. } => {
                Some("Check the zypper binary configured in the [zypper] section.")
            }
            Self::Terminated { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        self.outcome().is_some_and(Outcome::is_transient)
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::Exit { outcome, .. } => match outcome.failure_class() {
                Some(FailureClass::Transient) => "zypper.transient",
                Some(FailureClass::Operational) => "zypper.operational",
                Some(FailureClass::Reportable) => "zypper.commit_failed",
                Some(FailureClass::Internal) | None => "zypper.internal",
            },
            Self::SpawnFailed { .. } => "zypper.spawn_failed",
            Self::Terminated { .. } => "zypper.terminated",
        };
        Some(code)
    }
}

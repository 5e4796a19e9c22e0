//! Domain outcomes of a single zypper invocation

use crate::exit_code::{self, describe_exit_code, FailureClass};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a zypper exit code means for the subcommand that produced it
///
/// Outcomes are only ever produced by the classifier; everything above it
/// switches on these values and never on raw exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "code", rename_all = "snake_case")]
pub enum Outcome {
    NoPatchesNeeded,
    PatchesAvailable,
    SecurityPatchesAvailable,
    /// `list-patches` completed
    Listed,
    AppliedOk,
    AppliedRebootNeeded,
    /// The package manager patched itself and must be invoked again
    AppliedRestartManagerNeeded,
    PostCheckOk,
    PostCheckRebootNeeded,
    /// The ZYPP library is locked by another process
    Locked,
    /// A repository could not be refreshed and was skipped
    ReposSkipped,
    /// Any exit code not accepted for the subcommand
    HardFailure(i32),
}

impl Outcome {
    /// Whether this outcome terminates the invocation with an error
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Locked | Self::ReposSkipped | Self::HardFailure(_))
    }

    /// Whether retrying the whole run later is likely to succeed
    #[must_use]
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Locked | Self::ReposSkipped)
    }

    /// Failure class, `None` for non-error outcomes
    #[must_use]
    pub fn failure_class(self) -> Option<FailureClass> {
        match self {
            Self::Locked | Self::ReposSkipped => Some(FailureClass::Transient),
            Self::HardFailure(code) => Some(FailureClass::of(code)),
            _ => None,
        }
    }

    /// Whether a run ending in this outcome still delivers its report
    #[must_use]
    pub fn is_reportable_failure(self) -> bool {
        self.failure_class() == Some(FailureClass::Reportable)
    }

    /// The zypper exit code a run ending here propagates, `None` on success
    #[must_use]
    pub fn exit_code(self) -> Option<i32> {
        match self {
            Self::Locked => Some(exit_code::LOCKED),
            Self::ReposSkipped => Some(exit_code::REPOS_SKIPPED),
            Self::HardFailure(code) => Some(code),
            _ => None,
        }
    }

    /// Short human-readable description
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::NoPatchesNeeded => "No patches needed",
            Self::PatchesAvailable => describe_exit_code(exit_code::PATCHES_AVAILABLE),
            Self::SecurityPatchesAvailable => {
                describe_exit_code(exit_code::SECURITY_PATCHES_AVAILABLE)
            }
            Self::Listed => "Patches listed",
            Self::AppliedOk => "Patches successfully installed",
            Self::AppliedRebootNeeded | Self::PostCheckRebootNeeded => {
                describe_exit_code(exit_code::REBOOT_NEEDED)
            }
            Self::AppliedRestartManagerNeeded => describe_exit_code(exit_code::RESTART_NEEDED),
            Self::PostCheckOk => "No reboot required",
            Self::Locked => describe_exit_code(exit_code::LOCKED),
            Self::ReposSkipped => describe_exit_code(exit_code::REPOS_SKIPPED),
            Self::HardFailure(code) => describe_exit_code(code),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

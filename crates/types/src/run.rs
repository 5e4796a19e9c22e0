//! Result of a complete patch run

use crate::exit_code::INTERNAL_ERROR;
use crate::Outcome;
use serde::{Deserialize, Serialize};

/// Terminal state of one auto-patch run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Whether any `patch-check` in this run reported patches
    pub patches_were_found: bool,
    /// The outcome that ended the run
    pub terminal_outcome: Outcome,
    /// Process exit code: 0, or the zypper exit code that ended the run
    pub exit_code: i32,
    /// Number of attempts made by the retry loop
    pub attempts: u32,
    /// Whether zypper reported that a reboot is required
    pub reboot_required: bool,
}

impl RunResult {
    /// A run that reached its end without a failing invocation
    #[must_use]
    pub fn completed(
        patches_were_found: bool,
        terminal_outcome: Outcome,
        attempts: u32,
        reboot_required: bool,
    ) -> Self {
        Self {
            patches_were_found,
            terminal_outcome,
            exit_code: 0,
            attempts,
            reboot_required,
        }
    }

    /// A run terminated by a failing invocation
    #[must_use]
    pub fn failed(
        patches_were_found: bool,
        terminal_outcome: Outcome,
        attempts: u32,
        reboot_required: bool,
    ) -> Self {
        Self {
            patches_were_found,
            terminal_outcome,
            exit_code: terminal_outcome.exit_code().unwrap_or(INTERNAL_ERROR),
            attempts,
            reboot_required,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Whether the run produced anything worth mailing
    ///
    /// True when patches were found, or when the run ended in a failure
    /// whose partial output is still actionable.
    #[must_use]
    pub fn has_reportable_content(&self) -> bool {
        self.patches_were_found || self.terminal_outcome.is_reportable_failure()
    }
}

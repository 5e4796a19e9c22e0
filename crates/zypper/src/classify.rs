//! Exit code classification
//!
//! One table maps each subcommand's accepted exit codes to outcomes. Lock
//! and repository-skip codes are accepted everywhere as transient; every
//! other code is a hard failure.

use autopatch_types::exit_code::{
    LOCKED, OK, PATCHES_AVAILABLE, REBOOT_NEEDED, REPOS_SKIPPED, RESTART_NEEDED,
    SECURITY_PATCHES_AVAILABLE,
};
use autopatch_types::{Outcome, Subcommand};

type Row = &'static [(i32, Outcome)];

const CHECK: Row = &[
    (OK, Outcome::NoPatchesNeeded),
    (PATCHES_AVAILABLE, Outcome::PatchesAvailable),
    (SECURITY_PATCHES_AVAILABLE, Outcome::SecurityPatchesAvailable),
];

const LIST: Row = &[(OK, Outcome::Listed)];

const APPLY: Row = &[
    (OK, Outcome::AppliedOk),
    (REBOOT_NEEDED, Outcome::AppliedRebootNeeded),
    (RESTART_NEEDED, Outcome::AppliedRestartManagerNeeded),
];

const POST_CHECK: Row = &[
    (OK, Outcome::PostCheckOk),
    (REBOOT_NEEDED, Outcome::PostCheckRebootNeeded),
];

const TRANSIENT: Row = &[(LOCKED, Outcome::Locked), (REPOS_SKIPPED, Outcome::ReposSkipped)];

fn row(subcommand: Subcommand) -> Row {
    match subcommand {
        Subcommand::Check => CHECK,
        Subcommand::List => LIST,
        Subcommand::Apply => APPLY,
        Subcommand::PostCheck => POST_CHECK,
    }
}

/// Map a subcommand's exit code to its outcome
#[must_use]
pub fn classify(subcommand: Subcommand, exit_code: i32) -> Outcome {
    row(subcommand)
        .iter()
        .chain(TRANSIENT)
        .find(|(code, _)| *code == exit_code)
        .map_or(Outcome::HardFailure(exit_code), |(_, outcome)| *outcome)
}

/// Exit codes that count as success for `subcommand`
#[must_use]
pub fn accepted_codes(subcommand: Subcommand) -> Vec<i32> {
    row(subcommand).iter().map(|(code, _)| *code).collect()
}

/// Whether `exit_code` completes `subcommand` without failing the call
#[must_use]
pub fn is_accepted(subcommand: Subcommand, exit_code: i32) -> bool {
    row(subcommand).iter().any(|(code, _)| *code == exit_code)
}

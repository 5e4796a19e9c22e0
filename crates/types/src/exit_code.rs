//! Zypper exit codes and their meaning
//!
//! Descriptions follow the EXIT CODES section of zypper(8).

use serde::{Deserialize, Serialize};

pub const OK: i32 = 0;
pub const BUG: i32 = 1;
pub const SYNTAX: i32 = 2;
pub const INVALID_ARGS: i32 = 3;
pub const LIBRARY: i32 = 4;
pub const PRIVILEGES: i32 = 5;
pub const NO_REPOS: i32 = 6;
pub const LOCKED: i32 = 7;
pub const COMMIT: i32 = 8;
pub const PATCHES_AVAILABLE: i32 = 100;
pub const SECURITY_PATCHES_AVAILABLE: i32 = 101;
pub const REBOOT_NEEDED: i32 = 102;
pub const RESTART_NEEDED: i32 = 103;
pub const CAPABILITY_NOT_FOUND: i32 = 104;
pub const SIGNAL: i32 = 105;
pub const REPOS_SKIPPED: i32 = 106;
pub const RPM_SCRIPT_FAILED: i32 = 107;

/// Process exit code for failures that carry no zypper exit code
pub const INTERNAL_ERROR: i32 = -1;

/// Human-readable meaning of a zypper exit code
#[must_use]
pub fn describe_exit_code(code: i32) -> &'static str {
    match code {
        OK => "Success",
        BUG => "Unexpected situation, probably a bug in zypper",
        SYNTAX => "Syntax error in the zypper call",
        INVALID_ARGS => "Invalid arguments in the zypper call",
        LIBRARY => "Problem reported by ZYPP library",
        PRIVILEGES => "Insufficient privileges calling zypper",
        NO_REPOS => "No repositories defined in zypper",
        LOCKED => "ZYPP library is locked",
        COMMIT => "Error during installation or removal of packages",
        PATCHES_AVAILABLE => "Patches available for installation",
        SECURITY_PATCHES_AVAILABLE => "Security patches available for installation",
        REBOOT_NEEDED => "Installation of a patch requires reboot",
        RESTART_NEEDED => "Installation of a patch requires restart of package manager",
        CAPABILITY_NOT_FOUND => {
            "Arguments does not match available or installed package names or capabilities"
        }
        SIGNAL => "Exit of zypper after receiving a SIGINT or SIGTERM",
        REPOS_SKIPPED => "Some repo temporarily disabled because of failure to refresh",
        RPM_SCRIPT_FAILED => "Some packages install script returned an error",
        _ => "Unknown zypper exit code",
    }
}

/// How a failing exit code is handled by a patch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    /// Lock held elsewhere or repositories skipped; retried after a delay
    Transient,
    /// Environment problem on this host; the run stops without a report
    /// unless patches were already found
    Operational,
    /// Failure while patches were being committed; the run stops and the
    /// partial report is still delivered
    Reportable,
    /// Zypper was called in a way it did not expect; logged as critical
    Internal,
}

impl FailureClass {
    /// Classify a failing zypper exit code
    #[must_use]
    pub fn of(code: i32) -> Self {
        match code {
            LOCKED | REPOS_SKIPPED => Self::Transient,
            PRIVILEGES | NO_REPOS => Self::Operational,
            COMMIT | SIGNAL | RPM_SCRIPT_FAILED => Self::Reportable,
            _ => Self::Internal,
        }
    }
}

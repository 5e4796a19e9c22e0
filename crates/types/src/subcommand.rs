//! The fixed set of zypper subcommands driven by a patch run

use serde::{Deserialize, Serialize};
use std::fmt;

/// A zypper subcommand together with its fixed, non-interactive flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subcommand {
    /// `zypper patch-check`
    Check,
    /// `zypper list-patches`
    List,
    /// `zypper patch --skip-interactive`
    Apply,
    /// `zypper ps`
    PostCheck,
}

impl Subcommand {
    /// All subcommands in the order a successful run invokes them
    pub const ALL: [Self; 4] = [Self::Check, Self::List, Self::Apply, Self::PostCheck];

    /// Arguments passed to zypper for this subcommand
    ///
    /// No caller-supplied arguments are ever added; every invocation is
    /// quiet and non-interactive.
    #[must_use]
    pub fn args(self) -> &'static [&'static str] {
        match self {
            Self::Check => &["--quiet", "--non-interactive", "patch-check"],
            Self::List => &["--quiet", "--non-interactive", "list-patches"],
            Self::Apply => &[
                "--quiet",
                "--non-interactive",
                "patch",
                "--skip-interactive",
            ],
            Self::PostCheck => &["--quiet", "ps"],
        }
    }

    /// Zypper's own name for the subcommand
    #[must_use]
    pub fn zypper_name(self) -> &'static str {
        match self {
            Self::Check => "patch-check",
            Self::List => "list-patches",
            Self::Apply => "patch",
            Self::PostCheck => "ps",
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.zypper_name())
    }
}

//! Zypper command line construction

use autopatch_types::Subcommand;
use std::path::{Path, PathBuf};

/// Locale forced on every zypper child so its output stays parseable
pub const CHILD_ENV: [(&str, &str); 2] = [("LANG", "POSIX"), ("LC_CTYPE", "en_US.UTF-8")];

/// A fully specified zypper invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZypperCommand {
    program: PathBuf,
    subcommand: Subcommand,
}

impl ZypperCommand {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, subcommand: Subcommand) -> Self {
        Self {
            program: program.into(),
            subcommand,
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn subcommand(&self) -> Subcommand {
        self.subcommand
    }

    #[must_use]
    pub fn args(&self) -> &'static [&'static str] {
        self.subcommand.args()
    }

    /// Environment variables set on the child in addition to the inherited ones
    #[must_use]
    pub fn envs(&self) -> &'static [(&'static str, &'static str)] {
        &CHILD_ENV
    }

    /// Command line as logged, e.g. `/usr/bin/zypper --quiet ps`
    #[must_use]
    pub fn display(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in self.args() {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cmd = ZypperCommand::new("/usr/bin/zypper", Subcommand::Apply);
        assert_eq!(
            cmd.display(),
            "/usr/bin/zypper --quiet --non-interactive patch --skip-interactive"
        );
        assert_eq!(cmd.envs()[0], ("LANG", "POSIX"));
    }
}

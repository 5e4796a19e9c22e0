//! Process execution behind an injectable trait

use std::process::{Command, Stdio};

use autopatch_errors::ZypperError;

use crate::command::ZypperCommand;

/// Captured result of running a child to completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    /// `None` if the child was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RawOutput {
    #[must_use]
    pub fn exited(exit_code: i32, stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }
}

/// Abstract command execution, so tests can script zypper's behavior
pub trait CommandRunner {
    /// Run `command` to completion and capture its output
    ///
    /// A non-zero exit status is not an error at this level.
    ///
    /// # Errors
    ///
    /// Returns `ZypperError::SpawnFailed` if the program cannot be started
    /// or waited for.
    fn run(&self, command: &ZypperCommand) -> Result<RawOutput, ZypperError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &ZypperCommand) -> Result<RawOutput, ZypperError> {
        (**self).run(command)
    }
}

/// Real command runner backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &ZypperCommand) -> Result<RawOutput, ZypperError> {
        let output = Command::new(command.program())
            .args(command.args())
            .envs(command.envs().iter().copied())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ZypperError::SpawnFailed {
                command: command.display(),
                message: e.to_string(),
            })?;

        Ok(RawOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autopatch_types::Subcommand;

    #[test]
    fn test_missing_binary_is_spawn_failure() {
        let cmd = ZypperCommand::new("/nonexistent/zypper", Subcommand::Check);
        let err = SystemCommandRunner.run(&cmd).unwrap_err();
        assert!(matches!(err, ZypperError::SpawnFailed { .. }));
        assert_eq!(err.command(), cmd.display());
    }
}

#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Zypper invocation for auto-patch
//!
//! [`Zypper`] runs one subcommand at a time through a [`CommandRunner`],
//! appends its standard output to an [`OutputSink`] and classifies the exit
//! code. Codes a subcommand does not accept come back as
//! `ZypperError::Exit` carrying the classified outcome.

pub mod classify;
pub mod command;
pub mod output;
pub mod runner;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use classify::{accepted_codes, classify, is_accepted};
pub use command::{ZypperCommand, CHILD_ENV};
pub use output::{OutputSink, OutputSpan};
pub use runner::{CommandRunner, RawOutput, SystemCommandRunner};

use autopatch_errors::ZypperError;
use autopatch_types::{Outcome, Subcommand};
use std::path::PathBuf;

/// Record of a completed, accepted invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub subcommand: Subcommand,
    pub command: String,
    pub exit_code: i32,
    pub outcome: Outcome,
    /// Where the invocation's standard output landed in the sink
    pub stdout: OutputSpan,
    pub stderr: String,
}

/// Zypper facade over an injectable runner
#[derive(Debug)]
pub struct Zypper<R> {
    runner: R,
    binary: PathBuf,
}

impl<R: CommandRunner> Zypper<R> {
    #[must_use]
    pub fn new(runner: R, binary: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            binary: binary.into(),
        }
    }

    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    #[must_use]
    pub fn command(&self, subcommand: Subcommand) -> ZypperCommand {
        ZypperCommand::new(&self.binary, subcommand)
    }

    /// Run `subcommand`, writing its standard output to `sink`
    ///
    /// Output is written before the exit code is judged, so the output of
    /// a failing call still ends up in the sink.
    ///
    /// # Errors
    ///
    /// Returns `ZypperError::Exit` if the exit code is not accepted for the
    /// subcommand, `ZypperError::Terminated` if zypper was killed by a
    /// signal, and `ZypperError::SpawnFailed` if it could not be run.
    pub fn invoke(
        &self,
        subcommand: Subcommand,
        sink: &mut impl OutputSink,
    ) -> Result<Invocation, ZypperError> {
        let command = self.command(subcommand);
        let raw = self.runner.run(&command)?;

        let offset = sink.position();
        sink.write_output(&raw.stdout);
        let stdout = OutputSpan {
            offset,
            len: sink.position() - offset,
        };

        let Some(exit_code) = raw.exit_code else {
            return Err(ZypperError::Terminated {
                command: command.display(),
            });
        };

        let outcome = classify(subcommand, exit_code);
        if !is_accepted(subcommand, exit_code) {
            return Err(ZypperError::Exit {
                subcommand,
                outcome,
                exit_code,
                command: command.display(),
                stderr: raw.stderr,
            });
        }

        Ok(Invocation {
            subcommand,
            command: command.display(),
            exit_code,
            outcome,
            stdout,
            stderr: raw.stderr,
        })
    }
}

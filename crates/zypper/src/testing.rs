//! Scripted zypper for tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use autopatch_errors::ZypperError;
use autopatch_types::Subcommand;

use crate::command::ZypperCommand;
use crate::runner::{CommandRunner, RawOutput};

/// Runner that replays a per-subcommand script
///
/// Each call pops the next step; the last step repeats once the script is
/// down to one entry. Subcommands without a script exit 0 silently.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    scripts: RefCell<HashMap<Subcommand, VecDeque<RawOutput>>>,
    calls: RefCell<Vec<Subcommand>>,
}

impl ScriptedRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `subcommand` with full outputs
    #[must_use]
    pub fn script(self, subcommand: Subcommand, steps: impl IntoIterator<Item = RawOutput>) -> Self {
        self.scripts
            .borrow_mut()
            .insert(subcommand, steps.into_iter().collect());
        self
    }

    /// Script `subcommand` with exit codes and no output
    #[must_use]
    pub fn codes(self, subcommand: Subcommand, codes: &[i32]) -> Self {
        self.script(
            subcommand,
            codes.iter().map(|code| RawOutput::exited(*code, "")),
        )
    }

    /// Script `subcommand` with `(exit code, stdout)` pairs
    #[must_use]
    pub fn outputs(self, subcommand: Subcommand, steps: &[(i32, &str)]) -> Self {
        self.script(
            subcommand,
            steps
                .iter()
                .map(|(code, stdout)| RawOutput::exited(*code, *stdout)),
        )
    }

    /// Subcommands in the order they were run
    #[must_use]
    pub fn calls(&self) -> Vec<Subcommand> {
        self.calls.borrow().clone()
    }

    /// Number of times `subcommand` was run
    #[must_use]
    pub fn count(&self, subcommand: Subcommand) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == subcommand)
            .count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &ZypperCommand) -> Result<RawOutput, ZypperError> {
        let subcommand = command.subcommand();
        self.calls.borrow_mut().push(subcommand);

        let mut scripts = self.scripts.borrow_mut();
        let step = match scripts.get_mut(&subcommand) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(step.unwrap_or_else(|| RawOutput::exited(0, "")))
    }
}

/// Runner whose program can never be started
#[derive(Debug, Default, Clone, Copy)]
pub struct UnspawnableRunner;

impl CommandRunner for UnspawnableRunner {
    fn run(&self, command: &ZypperCommand) -> Result<RawOutput, ZypperError> {
        Err(ZypperError::SpawnFailed {
            command: command.display(),
            message: "No such file or directory (os error 2)".to_string(),
        })
    }
}

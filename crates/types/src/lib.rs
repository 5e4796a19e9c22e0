#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for auto-patch
//!
//! This crate provides the domain vocabulary shared by every other crate:
//! the zypper subcommands we drive, the outcomes their exit codes map to,
//! log severities, and the result of a patch run.

pub mod exit_code;
pub mod outcome;
pub mod run;
pub mod severity;
pub mod subcommand;

// Re-export commonly used types
pub use exit_code::{describe_exit_code, FailureClass, INTERNAL_ERROR};
pub use outcome::Outcome;
pub use run::RunResult;
pub use severity::Severity;
pub use subcommand::Subcommand;

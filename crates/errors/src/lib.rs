#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for auto-patch
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone so they can be logged and still returned.

use std::borrow::Cow;

use autopatch_types::INTERNAL_ERROR;
use thiserror::Error;

pub mod config;
pub mod notify;
pub mod zypper;

// Re-export all error types at the root
pub use config::ConfigError;
pub use notify::NotifyError;
pub use zypper::ZypperError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("zypper error: {0}")]
    Zypper(#[from] ZypperError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("report delivery error: {0}")]
    Notify(#[from] NotifyError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an internal error with a message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Exit code the process should terminate with for this error
    ///
    /// Zypper failures propagate zypper's own exit code so operators can
    /// tell a privilege problem from a bug; everything else is internal.
    #[must_use]
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Error::Zypper(err) => err.exit_code().unwrap_or(INTERNAL_ERROR),
            _ => INTERNAL_ERROR,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Internal(format!("invalid pattern: {err}"))
    }
}

/// Minimal interface for rendering user-facing error information without
/// requiring heavyweight envelopes.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Whether retrying the same operation is likely to succeed.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Stable error code for analytics / structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Zypper(err) => err.user_message(),
            Error::Config(err) => err.user_message(),
            Error::Notify(err) => err.user_message(),
            Error::Internal(_) => Cow::Owned(self.to_string()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Zypper(err) => err.user_hint(),
            Error::Config(err) => err.user_hint(),
            Error::Notify(err) => err.user_hint(),
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Error::Zypper(err) => err.is_retryable(),
            Error::Notify(err) => err.is_retryable(),
            _ => false,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Zypper(err) => err.user_code(),
            Error::Config(err) => err.user_code(),
            Error::Notify(err) => err.user_code(),
            Error::Internal(_) => Some("error.internal"),
        }
    }
}

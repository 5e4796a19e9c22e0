//! CLI error handling

use std::fmt;

use autopatch_errors::UserFacingError;
use autopatch_types::INTERNAL_ERROR;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded
    Config(autopatch_errors::Error),
    /// The patch run failed without a zypper exit code
    Ops(autopatch_errors::Error),
}

impl CliError {
    /// Process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => INTERNAL_ERROR,
            CliError::Ops(e) => e.process_exit_code(),
        }
    }

    /// The underlying domain error
    #[must_use]
    pub fn inner(&self) -> &autopatch_errors::Error {
        match self {
            CliError::Config(e) | CliError::Ops(e) => e,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = match self {
            CliError::Config(e) => {
                write!(f, "Configuration error: ")?;
                e
            }
            CliError::Ops(e) => e,
        };
        write!(f, "{}", e.user_message())?;
        if let Some(hint) = e.user_hint() {
            write!(f, "\n  Hint: {hint}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) | CliError::Ops(e) => Some(e),
        }
    }
}

impl From<autopatch_errors::Error> for CliError {
    fn from(e: autopatch_errors::Error) -> Self {
        CliError::Ops(e)
    }
}

//! Report delivery error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum NotifyError {
    #[error("invalid mail address {address}: {message}")]
    InvalidAddress { address: String, message: String },

    #[error("failed to compose report mail: {message}")]
    Compose { message: String },

    #[error("failed to deliver report via {mailhost}: {message}")]
    Delivery { mailhost: String, message: String },
}

impl UserFacingError for NotifyError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidAddress { .. } => {
                Some("Fix mailfrom/mailto in the [mailreport] section.")
            }
            Self::Delivery { .. } => {
                Some("Check that the mailhost accepts unauthenticated SMTP on port 25.")
            }
            Self::Compose { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::Delivery { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::InvalidAddress { .. } => "notify.invalid_address",
            Self::Compose { .. } => "notify.compose",
            Self::Delivery { .. } => "notify.delivery",
        };
        Some(code)
    }
}

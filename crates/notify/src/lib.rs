#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Report delivery for auto-patch
//!
//! A [`MailReport`] is a plain-text body with its envelope. Delivery goes
//! through the [`ReportSender`] trait; [`SmtpSender`] hands the mail to an
//! SMTP relay without TLS or authentication, which is what a local MTA
//! on port 25 expects.

mod smtp;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use smtp::SmtpSender;

use autopatch_config::MailSettings;
use autopatch_errors::NotifyError;

/// A report ready to be delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailReport {
    pub from: String,
    /// One or more comma-separated recipients
    pub to: String,
    pub subject: String,
    pub mailhost: String,
    pub body: String,
}

impl MailReport {
    #[must_use]
    pub fn compose(settings: &MailSettings, body: impl Into<String>) -> Self {
        Self {
            from: settings.from.clone(),
            to: settings.to.clone(),
            subject: settings.subject.clone(),
            mailhost: settings.mailhost.clone(),
            body: body.into(),
        }
    }

    /// Individual recipient addresses
    pub fn recipients(&self) -> impl Iterator<Item = &str> {
        self.to
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }
}

/// Capability to deliver a report
pub trait ReportSender {
    /// Deliver `report`
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be composed or delivered.
    fn send(&self, report: &MailReport) -> Result<(), NotifyError>;
}

impl<T: ReportSender + ?Sized> ReportSender for &T {
    fn send(&self, report: &MailReport) -> Result<(), NotifyError> {
        (**self).send(report)
    }
}

//! Report senders for tests

use std::cell::RefCell;

use autopatch_errors::NotifyError;

use crate::{MailReport, ReportSender};

/// Sender that keeps every report instead of delivering it
#[derive(Debug, Default)]
pub struct RecordingSender {
    sent: RefCell<Vec<MailReport>>,
}

impl RecordingSender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sent(&self) -> Vec<MailReport> {
        self.sent.borrow().clone()
    }
}

impl ReportSender for RecordingSender {
    fn send(&self, report: &MailReport) -> Result<(), NotifyError> {
        self.sent.borrow_mut().push(report.clone());
        Ok(())
    }
}

/// Sender whose relay always refuses
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSender;

impl ReportSender for FailingSender {
    fn send(&self, report: &MailReport) -> Result<(), NotifyError> {
        Err(NotifyError::Delivery {
            mailhost: report.mailhost.clone(),
            message: "connection refused".to_string(),
        })
    }
}

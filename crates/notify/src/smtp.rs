use autopatch_errors::NotifyError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{Message, SmtpTransport, Transport};

use crate::{MailReport, ReportSender};

/// Plain SMTP delivery through the report's mailhost
#[derive(Debug, Default, Clone, Copy)]
pub struct SmtpSender;

impl SmtpSender {
    /// Build the RFC 5322 message for `report`
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::InvalidAddress` for an unparseable sender or
    /// recipient and `NotifyError::Compose` if no recipient is given.
    pub fn build_message(report: &MailReport) -> Result<Message, NotifyError> {
        let mut builder = Message::builder()
            .from(parse_mailbox(&report.from)?)
            .subject(report.subject.clone())
            .header(ContentType::TEXT_PLAIN);

        let mut recipients = 0;
        for address in report.recipients() {
            builder = builder.to(parse_mailbox(address)?);
            recipients += 1;
        }
        if recipients == 0 {
            return Err(NotifyError::Compose {
                message: "no recipient given".to_string(),
            });
        }

        builder
            .body(report.body.clone())
            .map_err(|e| NotifyError::Compose {
                message: e.to_string(),
            })
    }
}

impl ReportSender for SmtpSender {
    fn send(&self, report: &MailReport) -> Result<(), NotifyError> {
        let message = Self::build_message(report)?;
        let transport = SmtpTransport::builder_dangerous(report.mailhost.as_str()).build();

        tracing::debug!(mailhost = %report.mailhost, to = %report.to, "sending report");
        transport
            .send(&message)
            .map(|_| ())
            .map_err(|e| NotifyError::Delivery {
                mailhost: report.mailhost.clone(),
                message: e.to_string(),
            })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| NotifyError::InvalidAddress {
            address: address.to_string(),
            message: e.to_string(),
        })
}

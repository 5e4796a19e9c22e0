//! Integration tests for notify

#[cfg(test)]
mod tests {
    use autopatch_config::MailSettings;
    use autopatch_errors::NotifyError;
    use autopatch_notify::testing::{FailingSender, RecordingSender};
    use autopatch_notify::*;

    fn settings() -> MailSettings {
        MailSettings {
            from: "root@node1.example.org".to_string(),
            to: "root@node1.example.org, ops@example.org".to_string(),
            subject: "auto-patch node1.example.org".to_string(),
            mailhost: "localhost".to_string(),
        }
    }

    #[test]
    fn test_compose_and_recipients() {
        let report = MailReport::compose(&settings(), "\nINFO: patches successfully installed\n");
        assert_eq!(report.subject, "auto-patch node1.example.org");
        assert_eq!(
            report.recipients().collect::<Vec<_>>(),
            vec!["root@node1.example.org", "ops@example.org"]
        );
    }

    #[test]
    fn test_build_message() {
        let report = MailReport::compose(&settings(), "body text\n");
        let message = SmtpSender::build_message(&report).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Subject: auto-patch node1.example.org"));
        assert!(formatted.contains("ops@example.org"));
        assert!(formatted.contains("body text"));
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let mut report = MailReport::compose(&settings(), "body");
        report.from = "not an address".to_string();
        let err = SmtpSender::build_message(&report).unwrap_err();
        assert!(matches!(err, NotifyError::InvalidAddress { .. }));
    }

    #[test]
    fn test_missing_recipient_is_rejected() {
        let mut report = MailReport::compose(&settings(), "body");
        report.to = " , ".to_string();
        let err = SmtpSender::build_message(&report).unwrap_err();
        assert!(matches!(err, NotifyError::Compose { .. }));
    }

    #[test]
    fn test_recording_sender() {
        let sender = RecordingSender::new();
        let report = MailReport::compose(&settings(), "body");
        (&sender).send(&report).unwrap();
        assert_eq!(sender.sent(), vec![report]);
    }

    #[test]
    fn test_failing_sender() {
        let report = MailReport::compose(&settings(), "body");
        let err = FailingSender.send(&report).unwrap_err();
        assert!(matches!(err, NotifyError::Delivery { .. }));
    }
}

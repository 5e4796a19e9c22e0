//! Integration tests for events

#[cfg(test)]
mod tests {
    use autopatch_events::*;
    use autopatch_types::{Outcome, Severity, Subcommand};
    use uuid::Uuid;

    #[derive(Default)]
    struct Collector {
        events: Vec<AppEvent>,
    }

    impl EventEmitter for Collector {
        fn emit(&mut self, event: AppEvent) {
            self.events.push(event);
        }
    }

    #[test]
    fn test_emitter_helpers_keep_order() {
        let mut collector = Collector::default();
        collector.emit_patch(PatchEvent::PatchesInstalled);
        collector.emit_retrying(Outcome::Locked, 1, 3, 60);
        collector.emit_gave_up(Outcome::Locked, 3);
        collector.emit_internal_error("failed to execute /usr/bin/zypper");

        let events = &collector.events;
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], AppEvent::Patch(PatchEvent::PatchesInstalled)));
        assert!(matches!(events[2], AppEvent::Patch(PatchEvent::GaveUp { attempts: 3, .. })));
        assert_eq!(events[3].level(), Severity::Critical);
        assert_eq!(
            events[3].message(),
            "Internal error: failed to execute /usr/bin/zypper"
        );
    }

    #[test]
    fn test_patch_messages() {
        assert_eq!(
            AppEvent::from(PatchEvent::PatchesNeeded { summary: None }).message(),
            "patches are needed"
        );
        let summary = "3 patches needed (1 security patch)".to_string();
        assert_eq!(
            PatchEvent::PatchesNeeded {
                summary: Some(summary.clone())
            }
            .message(),
            summary
        );
        assert_eq!(
            PatchEvent::RebootRequired.message(),
            "reboot is required after installing patches"
        );

        let gave_up = PatchEvent::GaveUp {
            outcome: Outcome::Locked,
            attempts: 3,
        }
        .message();
        assert!(gave_up.ends_with(".  Giving up after 3 tries."), "{gave_up}");
    }

    #[test]
    fn test_levels() {
        assert_eq!(PatchEvent::NoPatchesNeeded.level(), Severity::Debug);
        assert_eq!(PatchEvent::PatchesInstalled.level(), Severity::Info);
        assert_eq!(PatchEvent::RebootRequired.level(), Severity::Warning);

        let reportable = PatchEvent::Failed {
            outcome: Outcome::HardFailure(107),
            command: "zypper patch".to_string(),
            stderr: String::new(),
        };
        assert_eq!(reportable.level(), Severity::Error);

        let syntax = PatchEvent::Failed {
            outcome: Outcome::HardFailure(2),
            command: "zypper patch".to_string(),
            stderr: "unknown option".to_string(),
        };
        assert_eq!(syntax.level(), Severity::Critical);
        assert!(syntax.message().contains("unknown option"));
    }

    #[test]
    fn test_zypper_events() {
        let started = AppEvent::from(ZypperEvent::CommandStarted {
            subcommand: Subcommand::Check,
            command: "/usr/bin/zypper --quiet --non-interactive patch-check".to_string(),
        });
        assert_eq!(started.level(), Severity::Debug);
        assert!(started.message().starts_with("run: /usr/bin/zypper"));
        assert!(started.is_reportable());

        let finished = ZypperEvent::CommandFinished {
            subcommand: Subcommand::Check,
            exit_code: 100,
        };
        assert_eq!(finished.message(), "return code from zypper: 100");

        let stderr = AppEvent::from(ZypperEvent::CommandStderr {
            subcommand: Subcommand::Apply,
            stderr: "warning\n".to_string(),
        });
        assert!(!stderr.is_reportable());
        assert!(!AppEvent::from(ReportEvent::Skipped).is_reportable());
    }

    #[test]
    fn test_event_message_meta() {
        let run_id = Uuid::new_v4();
        let message = EventMessage::new(run_id, PatchEvent::RebootRequired.into());
        assert_eq!(message.meta.run_id, run_id);
        assert_eq!(message.meta.level, Severity::Warning);
        assert_eq!(message.meta.source, EventSource::PATCH);
        assert_eq!(message.meta.tracing_level(), tracing::Level::WARN);

        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"domain\":\"patch\""), "{json}");
    }

    #[test]
    fn test_failure_context_from_error() {
        let err = autopatch_errors::Error::internal("boom");
        let failure = FailureContext::from_error(&err);
        assert_eq!(failure.code.as_deref(), Some("error.internal"));
        assert_eq!(failure.message, "internal error: boom");
        assert!(!failure.retryable);
    }

    #[test]
    fn test_critical_maps_to_tracing_error() {
        assert_eq!(tracing_level(Severity::Critical), tracing::Level::ERROR);
        assert_eq!(tracing_level(Severity::Debug), tracing::Level::DEBUG);
    }
}

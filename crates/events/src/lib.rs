#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for auto-patch
//!
//! Every log line auto-patch produces is an event. Events carry their own
//! severity and message so the same value can be routed to tracing (journal
//! and stderr) and to the report buffer without formatting it twice.

pub mod meta;
pub use meta::{tracing_level, EventMeta, EventSource};

pub mod events;
pub use events::{AppEvent, FailureContext, PatchEvent, ReportEvent, ZypperEvent};

use autopatch_types::{Outcome, Severity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event together with its routing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub meta: EventMeta,
    pub event: AppEvent,
}

impl EventMessage {
    #[must_use]
    pub fn new(run_id: Uuid, event: AppEvent) -> Self {
        let meta = EventMeta::new(run_id, event.level(), event.event_source());
        Self { meta, event }
    }
}

/// The unified trait for emitting events throughout auto-patch
///
/// Implementors decide where an event goes; the helpers only build events.
pub trait EventEmitter {
    /// Emit an event through this emitter
    fn emit(&mut self, event: AppEvent);

    fn emit_patch(&mut self, event: PatchEvent) {
        self.emit(AppEvent::Patch(event));
    }

    fn emit_zypper(&mut self, event: ZypperEvent) {
        self.emit(AppEvent::Zypper(event));
    }

    fn emit_report(&mut self, event: ReportEvent) {
        self.emit(AppEvent::Report(event));
    }

    /// Emit a retry warning for a transient outcome
    fn emit_retrying(&mut self, outcome: Outcome, attempt: u32, max_attempts: u32, wait_secs: u64) {
        self.emit_patch(PatchEvent::Retrying {
            outcome,
            attempt,
            max_attempts,
            wait_secs,
        });
    }

    /// Emit the exhaustion error for a transient outcome
    fn emit_gave_up(&mut self, outcome: Outcome, attempts: u32) {
        self.emit_patch(PatchEvent::GaveUp { outcome, attempts });
    }

    /// Emit a critical event for a failure without a zypper exit code
    fn emit_internal_error(&mut self, message: impl Into<String>) {
        self.emit_patch(PatchEvent::InternalError {
            message: message.into(),
        });
    }
}

/// Forward an event to the tracing subscriber at its own level
pub fn log_event_with_tracing(message: &EventMessage) {
    let meta = &message.meta;
    let text = message.event.message();
    let source = meta.source.as_str();

    match meta.level {
        Severity::Debug => tracing::debug!(run_id = %meta.run_id, source, "{text}"),
        Severity::Info => tracing::info!(run_id = %meta.run_id, source, "{text}"),
        Severity::Warning => tracing::warn!(run_id = %meta.run_id, source, "{text}"),
        Severity::Error => tracing::error!(run_id = %meta.run_id, source, "{text}"),
        Severity::Critical => {
            tracing::error!(run_id = %meta.run_id, source, critical = true, "{text}");
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::EventSource;
use autopatch_errors::UserFacingError;
use autopatch_types::Severity;

/// Structured failure information shared across domains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Short user-facing message.
    pub message: String,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Whether retrying the operation might succeed.
    pub retryable: bool,
}

impl FailureContext {
    /// Build failure context from a `UserFacingError` implementation.
    #[must_use]
    pub fn from_error<E: UserFacingError + ?Sized>(error: &E) -> Self {
        Self {
            code: error.user_code().map(Into::into),
            message: error.user_message().into_owned(),
            hint: error.user_hint().map(Into::into),
            retryable: error.is_retryable(),
        }
    }
}

pub mod patch;
pub mod report;
pub mod zypper;

pub use patch::PatchEvent;
pub use report::ReportEvent;
pub use zypper::ZypperEvent;

/// Top-level event enum that aggregates all domain-specific events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum AppEvent {
    Zypper(ZypperEvent),
    Patch(PatchEvent),
    Report(ReportEvent),
}

impl AppEvent {
    /// Identify the source domain for this event (used for metadata/logging).
    #[must_use]
    pub fn event_source(&self) -> EventSource {
        match self {
            Self::Zypper(_) => EventSource::ZYPPER,
            Self::Patch(_) => EventSource::PATCH,
            Self::Report(_) => EventSource::REPORT,
        }
    }

    #[must_use]
    pub fn level(&self) -> Severity {
        match self {
            Self::Zypper(event) => event.level(),
            Self::Patch(event) => event.level(),
            Self::Report(event) => event.level(),
        }
    }

    /// Whether the event may appear in the mailed report
    ///
    /// Zypper's stderr and the report's own bookkeeping stay in the journal.
    #[must_use]
    pub fn is_reportable(&self) -> bool {
        !matches!(
            self,
            Self::Zypper(ZypperEvent::CommandStderr { .. }) | Self::Report(_)
        )
    }

    /// Human-readable log line, without the level prefix
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Zypper(event) => event.message(),
            Self::Patch(event) => event.message(),
            Self::Report(event) => event.message(),
        }
    }
}

impl From<ZypperEvent> for AppEvent {
    fn from(event: ZypperEvent) -> Self {
        Self::Zypper(event)
    }
}

impl From<PatchEvent> for AppEvent {
    fn from(event: PatchEvent) -> Self {
        Self::Patch(event)
    }
}

impl From<ReportEvent> for AppEvent {
    fn from(event: ReportEvent) -> Self {
        Self::Report(event)
    }
}

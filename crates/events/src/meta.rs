use std::borrow::Cow;

use autopatch_types::Severity;
use serde::{Deserialize, Serialize};
use tracing::Level;
use uuid::Uuid;

/// Structured metadata that accompanies every event emission.
///
/// The run id ties together all events of one auto-patch invocation in the
/// journal.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMeta {
    /// Unique identifier for this specific event.
    pub event_id: Uuid,
    /// Identifier of the run that produced the event.
    pub run_id: Uuid,
    /// Severity used for routing to the journal, stderr and the report.
    pub level: Severity,
    /// Subsystem that originated the event.
    pub source: EventSource,
}

impl EventMeta {
    #[must_use]
    pub fn new(run_id: Uuid, level: Severity, source: EventSource) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            run_id,
            level,
            source,
        }
    }

    /// Convert the metadata level into a tracing level for downstream logging.
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        tracing_level(self.level)
    }
}

/// Map a severity onto the closest tracing level
///
/// Tracing has no critical level; critical events are logged at `ERROR` and
/// carry a `critical` field instead.
#[must_use]
pub fn tracing_level(level: Severity) -> Level {
    match level {
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Warning => Level::WARN,
        Severity::Error | Severity::Critical => Level::ERROR,
    }
}

/// Component that originated the event.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventSource(Cow<'static, str>);

impl EventSource {
    pub const ZYPPER: Self = Self::const_str("zypper");
    pub const PATCH: Self = Self::const_str("patch");
    pub const REPORT: Self = Self::const_str("report");

    const fn const_str(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Borrow the underlying identifier used for logging.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

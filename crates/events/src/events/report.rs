use autopatch_types::Severity;
use serde::{Deserialize, Serialize};

/// Report assembly and delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportEvent {
    /// The full report text, logged before delivery
    Composed { body: String },

    /// Nothing worth reporting happened
    Skipped,

    Sent { to: String, mailhost: String },
}

impl ReportEvent {
    #[must_use]
    pub fn level(&self) -> Severity {
        match self {
            Self::Composed { .. } | Self::Skipped | Self::Sent { .. } => Severity::Debug,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Composed { body } => body.clone(),
            Self::Skipped => "nothing to report".to_string(),
            Self::Sent { to, mailhost } => format!("report sent to {to} via {mailhost}"),
        }
    }
}

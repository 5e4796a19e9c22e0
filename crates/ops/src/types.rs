//! Result types handed back to the CLI

use autopatch_errors::Error;
use autopatch_types::RunResult;
use serde::Serialize;
use uuid::Uuid;

/// Everything the CLI needs to know about a finished run
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    #[serde(flatten)]
    pub result: RunResult,
    pub report_sent: bool,
}

impl RunSummary {
    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::internal(format!("failed to serialize run summary: {e}")))
    }
}

//! In-memory report assembly
//!
//! Zypper output and log lines share one buffer in the order they were
//! produced. The buffer doubles as the sink zypper writes into, so spans
//! recorded by an invocation index straight into it.

use autopatch_types::{RunResult, Severity};
use autopatch_zypper::{OutputSink, OutputSpan};

/// Ordered text of one run: subcommand output interleaved with log lines
#[derive(Debug, Clone, Default)]
pub struct ReportBuffer {
    text: String,
}

impl ReportBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a log line as a blank line followed by `LEVEL: message`
    pub fn append_log(&mut self, level: Severity, message: &str) {
        self.text.push('\n');
        self.text.push_str(level.label());
        self.text.push_str(": ");
        self.text.push_str(message);
        self.text.push('\n');
    }

    /// Text previously written at `span`, empty if the span is out of range
    #[must_use]
    pub fn read_span(&self, span: OutputSpan) -> &str {
        self.text.get(span.offset..span.end()).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl OutputSink for ReportBuffer {
    fn position(&self) -> usize {
        self.text.len()
    }

    fn write_output(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Report body for a finished run, `None` if nothing is to be mailed
///
/// A report goes out only when reporting is enabled and the run either
/// found patches or ended in a failure whose output is worth reading.
#[must_use]
pub fn build_report(buffer: &ReportBuffer, result: &RunResult, enabled: bool) -> Option<String> {
    (enabled && result.has_reportable_content()).then(|| buffer.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autopatch_types::Outcome;

    #[test]
    fn test_log_line_format() {
        let mut buffer = ReportBuffer::new();
        buffer.write_output("out\n");
        buffer.append_log(Severity::Warning, "reboot is required after installing patches");
        assert_eq!(
            buffer.as_str(),
            "out\n\nWARNING: reboot is required after installing patches\n"
        );
    }

    #[test]
    fn test_read_span() {
        let mut buffer = ReportBuffer::new();
        buffer.write_output("first\n");
        let offset = buffer.position();
        buffer.write_output("second\n");
        let span = OutputSpan { offset, len: 7 };
        assert_eq!(buffer.read_span(span), "second\n");
        assert_eq!(buffer.read_span(OutputSpan { offset: 100, len: 1 }), "");
    }

    #[test]
    fn test_build_report_conditions() {
        let mut buffer = ReportBuffer::new();
        buffer.write_output("text\n");

        let found = RunResult::completed(true, Outcome::PostCheckOk, 1, false);
        let nothing = RunResult::completed(false, Outcome::NoPatchesNeeded, 1, false);
        let scriptlet = RunResult::failed(false, Outcome::HardFailure(107), 1, false);
        let privileges = RunResult::failed(false, Outcome::HardFailure(5), 1, false);

        assert_eq!(build_report(&buffer, &found, true).as_deref(), Some("text\n"));
        assert!(build_report(&buffer, &found, false).is_none());
        assert!(build_report(&buffer, &nothing, true).is_none());
        assert!(build_report(&buffer, &scriptlet, true).is_some());
        assert!(build_report(&buffer, &privileges, true).is_none());
    }
}

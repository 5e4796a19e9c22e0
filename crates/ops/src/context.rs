//! Run context: zypper, the report buffer and event routing

use autopatch_errors::{Error, ZypperError};
use autopatch_events::{
    log_event_with_tracing, AppEvent, EventEmitter, EventMessage, ZypperEvent,
};
use autopatch_types::{Severity, Subcommand};
use autopatch_zypper::{CommandRunner, Invocation, OutputSpan, Zypper};
use uuid::Uuid;

use crate::report::ReportBuffer;
use crate::summary::SummaryMatcher;

/// Everything one patch run needs
///
/// Events emitted through the context go to tracing and, at or above the
/// report floor, into the report buffer.
pub struct PatchCtx<'a, R> {
    zypper: &'a Zypper<R>,
    report: ReportBuffer,
    report_floor: Severity,
    run_id: Uuid,
    summary: SummaryMatcher,
}

impl<'a, R: CommandRunner> PatchCtx<'a, R> {
    /// # Errors
    ///
    /// Returns an error if the summary pattern fails to compile.
    pub fn new(zypper: &'a Zypper<R>, report_floor: Severity, run_id: Uuid) -> Result<Self, Error> {
        Ok(Self {
            zypper,
            report: ReportBuffer::new(),
            report_floor,
            run_id,
            summary: SummaryMatcher::new()?,
        })
    }

    #[must_use]
    pub fn report(&self) -> &ReportBuffer {
        &self.report
    }

    /// Run one subcommand, logging its command line and return code
    ///
    /// # Errors
    ///
    /// Propagates the classified zypper failure.
    pub fn invoke(&mut self, subcommand: Subcommand) -> Result<Invocation, ZypperError> {
        let command = self.zypper.command(subcommand).display();
        self.emit_zypper(ZypperEvent::CommandStarted {
            subcommand,
            command,
        });

        let result = self.zypper.invoke(subcommand, &mut self.report);

        let finished = match &result {
            Ok(invocation) => Some((invocation.exit_code, invocation.stderr.clone())),
            Err(ZypperError::Exit {
                exit_code, stderr, ..
            }) => Some((*exit_code, stderr.clone())),
            Err(_) => None,
        };
        if let Some((exit_code, stderr)) = finished {
            self.emit_zypper(ZypperEvent::CommandFinished {
                subcommand,
                exit_code,
            });
            if !stderr.trim().is_empty() {
                self.emit_zypper(ZypperEvent::CommandStderr { subcommand, stderr });
            }
        }

        result
    }

    /// Summary line inside the output written at `span`
    #[must_use]
    pub fn summary_in(&self, span: OutputSpan) -> Option<String> {
        self.summary.find(self.report.read_span(span))
    }
}

impl<R> EventEmitter for PatchCtx<'_, R> {
    fn emit(&mut self, event: AppEvent) {
        let message = EventMessage::new(self.run_id, event);
        log_event_with_tracing(&message);

        if message.event.is_reportable() && message.meta.level >= self.report_floor {
            self.report
                .append_log(message.meta.level, &message.event.message());
        }
    }
}

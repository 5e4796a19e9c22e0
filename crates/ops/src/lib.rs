#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Patch run orchestration for auto-patch
//!
//! This crate sits between the CLI and the zypper and notify crates: it
//! drives the patch state machine, collects the report and hands it to a
//! [`ReportSender`].

mod context;
mod patch;
mod report;
mod retry;
mod summary;
mod types;

pub use context::PatchCtx;
pub use patch::patch;
pub use report::{build_report, ReportBuffer};
pub use retry::RetryPolicy;
pub use summary::SummaryMatcher;
pub use types::RunSummary;

use autopatch_config::Config;
use autopatch_errors::Error;
use autopatch_events::{EventEmitter, ReportEvent};
use autopatch_notify::{MailReport, ReportSender};
use autopatch_zypper::{CommandRunner, Zypper};
use uuid::Uuid;

/// Run a complete patch cycle and deliver its report
///
/// # Errors
///
/// Returns an error if zypper cannot be run, is killed by a signal, or the
/// report cannot be delivered. Zypper exit codes are not errors here; they
/// are part of the returned summary.
pub fn run<R, S>(config: &Config, runner: R, sender: &S) -> Result<RunSummary, Error>
where
    R: CommandRunner,
    S: ReportSender + ?Sized,
{
    let run_id = Uuid::new_v4();
    let zypper = Zypper::new(runner, &config.zypper.binary);
    let mut ctx = PatchCtx::new(&zypper, config.logging.report_level, run_id)?;
    let policy = RetryPolicy::from_config(&config.retry);

    tracing::debug!(%run_id, max_attempts = policy.max_attempts, "starting patch run");
    let result = patch(&mut ctx, &policy)?;

    if result.has_reportable_content() {
        let body = ctx.report().as_str().to_string();
        ctx.emit_report(ReportEvent::Composed { body });
    }

    let mut report_sent = false;
    match build_report(ctx.report(), &result, config.mailreport.report) {
        Some(body) => {
            let mail = MailReport::compose(&config.mailreport.resolve(), body);
            if let Err(err) = sender.send(&mail) {
                ctx.emit_internal_error(err.to_string());
                return Err(err.into());
            }
            ctx.emit_report(ReportEvent::Sent {
                to: mail.to.clone(),
                mailhost: mail.mailhost.clone(),
            });
            report_sent = true;
        }
        None => ctx.emit_report(ReportEvent::Skipped),
    }

    Ok(RunSummary {
        run_id,
        result,
        report_sent,
    })
}

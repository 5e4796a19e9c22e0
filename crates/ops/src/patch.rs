//! The patch state machine
//!
//! check → list → apply, repeated while apply asks for a restart, then a
//! post-check for pending reboots. Transient failures restart the whole
//! sequence from check after a delay; everything else ends the run.

use autopatch_errors::{Error, ZypperError};
use autopatch_events::{EventEmitter, PatchEvent};
use autopatch_types::{Outcome, RunResult, Subcommand};
use autopatch_zypper::CommandRunner;

use crate::context::PatchCtx;
use crate::retry::RetryPolicy;

/// State carried across attempts
#[derive(Debug, Default)]
struct Progress {
    patches_were_found: bool,
    reboot_required: bool,
}

/// Bring the system up to date
///
/// Zypper failures with an exit code end up in the returned [`RunResult`];
/// only failures without one (spawn errors, signals) are returned as `Err`.
///
/// # Errors
///
/// Returns an error if zypper cannot be run or is killed by a signal.
pub fn patch<R: CommandRunner>(
    ctx: &mut PatchCtx<'_, R>,
    policy: &RetryPolicy,
) -> Result<RunResult, Error> {
    let mut progress = Progress::default();
    let mut attempt = 0;

    loop {
        attempt += 1;
        match patch_attempt(ctx, &mut progress) {
            Ok(outcome) => {
                return Ok(RunResult::completed(
                    progress.patches_were_found,
                    outcome,
                    attempt,
                    progress.reboot_required,
                ));
            }
            Err(ZypperError::Exit { outcome, .. }) if outcome.is_transient() => {
                if !policy.allows_another(attempt) {
                    ctx.emit_gave_up(outcome, attempt);
                    return Ok(RunResult::failed(
                        progress.patches_were_found,
                        outcome,
                        attempt,
                        progress.reboot_required,
                    ));
                }
                ctx.emit_retrying(outcome, attempt, policy.max_attempts, policy.wait.as_secs());
                policy.wait();
            }
            Err(ZypperError::Exit {
                outcome,
                command,
                stderr,
                ..
            }) => {
                ctx.emit_patch(PatchEvent::Failed {
                    outcome,
                    command,
                    stderr,
                });
                return Ok(RunResult::failed(
                    progress.patches_were_found,
                    outcome,
                    attempt,
                    progress.reboot_required,
                ));
            }
            Err(err) => {
                ctx.emit_internal_error(err.to_string());
                return Err(err.into());
            }
        }
    }
}

fn patch_attempt<R: CommandRunner>(
    ctx: &mut PatchCtx<'_, R>,
    progress: &mut Progress,
) -> Result<Outcome, ZypperError> {
    loop {
        let check = ctx.invoke(Subcommand::Check)?;
        if check.outcome == Outcome::NoPatchesNeeded {
            ctx.emit_patch(PatchEvent::NoPatchesNeeded);
            break;
        }

        progress.patches_were_found = true;
        let summary = ctx.summary_in(check.stdout);
        ctx.emit_patch(PatchEvent::PatchesNeeded { summary });

        ctx.invoke(Subcommand::List)?;

        let apply = ctx.invoke(Subcommand::Apply)?;
        match apply.outcome {
            Outcome::AppliedRestartManagerNeeded => {
                ctx.emit_patch(PatchEvent::RestartRequired);
            }
            Outcome::AppliedRebootNeeded => {
                progress.reboot_required = true;
                ctx.emit_patch(PatchEvent::PatchesInstalled);
                break;
            }
            _ => {
                ctx.emit_patch(PatchEvent::PatchesInstalled);
                break;
            }
        }
    }

    if !progress.patches_were_found {
        return Ok(Outcome::NoPatchesNeeded);
    }

    let post_check = ctx.invoke(Subcommand::PostCheck)?;
    if post_check.outcome == Outcome::PostCheckRebootNeeded {
        progress.reboot_required = true;
        ctx.emit_patch(PatchEvent::RebootRequired);
    }
    Ok(post_check.outcome)
}

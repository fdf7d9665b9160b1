//! Confirmation gate between validation and submission.

use std::io::Write;

use tracing::{info, warn};

use crate::contract::{ConfirmationProvider, WorkLogEntry};
use crate::error::PipelineError;

pub const CONFIRMATION_PROMPT: &str = "Does this look alright?";

/// Writes a tab separated summary of the worklog to `out`.
pub fn dump_worklog<W: Write + ?Sized>(worklog: &[WorkLogEntry], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{} entries:", worklog.len())?;
    for entry in worklog {
        writeln!(
            out,
            "{}\t{} min\t{}",
            entry.issue_label(),
            entry.time_in_minutes,
            entry.description
        )?;
    }
    out.flush()
}

/// Asks whether the worklog should be submitted.
///
/// With `quiet` set the worklog passes straight through. Otherwise the
/// summary is written to `out` and `provider` decides; a "no" yields
/// [`PipelineError::Cancelled`].
pub fn ask_for_confirmation<C, W>(
    worklog: Vec<WorkLogEntry>,
    quiet: bool,
    provider: &C,
    out: &mut W,
) -> Result<Vec<WorkLogEntry>, PipelineError>
where
    C: ConfirmationProvider + ?Sized,
    W: Write + ?Sized,
{
    if quiet {
        info!("Quiet mode, skipping confirmation");
        return Ok(worklog);
    }

    dump_worklog(&worklog, out)?;

    if provider.confirm(CONFIRMATION_PROMPT)? {
        info!(entries = worklog.len(), "Worklog confirmed by user");
        Ok(worklog)
    } else {
        warn!("Worklog submission cancelled by user");
        Err(PipelineError::Cancelled)
    }
}

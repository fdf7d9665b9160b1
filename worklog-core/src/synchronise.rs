//! High-level pipeline: validate → confirm → submit a parsed worklog.
//!
//! Parsing happens before this module is reached, so that malformed input
//! aborts the process instead of being reported as a pipeline failure.
//! From there a run moves through
//!
//! ```text
//! Validating -> Confirming (unless quiet) -> Submitting -> Done
//! ```
//!
//! and any failing step ends the run with a [`PipelineError`]. Nothing is
//! retried and nothing needs to be rolled back: no state is kept locally.
//!
//! # Concurrency
//! Submission posts every entry at once and joins the results with
//! [`try_join_all`]; the first failure fails the whole submission. There is no
//! ordering between individual posts.

use std::io::Write;

use futures::future::try_join_all;
use tracing::{error, info};

use crate::confirm::ask_for_confirmation;
use crate::contract::{ConfirmationProvider, Submitter, WorkLogEntry};
use crate::error::PipelineError;
use crate::validate::check_worklog;

/// Options for a single pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Skip the confirmation prompt.
    pub quiet: bool,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub transferred: usize,
}

/// Posts every entry through `submitter` concurrently and waits for all of them.
pub async fn submit_worklog<S, W>(
    submitter: &S,
    worklog: &[WorkLogEntry],
    out: &mut W,
) -> Result<SubmitReport, PipelineError>
where
    S: Submitter + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Sending to Jira...")?;
    info!(entries = worklog.len(), "[SUBMIT] Posting worklog entries");

    let posts = worklog.iter().map(|entry| submitter.post_worklog(entry));
    let results = try_join_all(posts).await.map_err(|e| {
        error!(error = %e, "[SUBMIT][ERROR] Posting worklog failed");
        PipelineError::Submission(e)
    })?;

    let report = SubmitReport {
        transferred: results.len(),
    };
    writeln!(out, "Transferred {} entries.", report.transferred)?;
    info!(transferred = report.transferred, "[SUBMIT] Worklog transferred");
    Ok(report)
}

/// Runs validation, confirmation and submission for an already parsed worklog.
pub async fn run_pipeline<S, C, W>(
    worklog: Vec<WorkLogEntry>,
    options: &PipelineOptions,
    submitter: &S,
    provider: &C,
    out: &mut W,
) -> Result<SubmitReport, PipelineError>
where
    S: Submitter + ?Sized,
    C: ConfirmationProvider + ?Sized,
    W: Write + ?Sized,
{
    info!(entries = worklog.len(), "[PIPELINE] Validating");
    let worklog = check_worklog(worklog)?;

    info!(quiet = options.quiet, "[PIPELINE] Confirming");
    let worklog = ask_for_confirmation(worklog, options.quiet, provider, out)?;

    info!("[PIPELINE] Submitting");
    let report = submit_worklog(submitter, &worklog, out).await?;

    info!(transferred = report.transferred, "[PIPELINE] Done");
    Ok(report)
}

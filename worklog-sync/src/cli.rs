///
/// This module implements the CLI interface for worklog-sync: argument
/// parsing, wiring the real Jira client and terminal prompt into the core
/// pipeline, and the top-level error handler.
///
/// All parsing, validation and submission logic lives in [`worklog-core`].
///
/// ## How To Use
/// - Command line: `worklog-sync export.csv [--quiet] [--delimiter ';']`
/// - Programmatic/integration use: call [`run`] with a constructed [`Cli`].
///
/// [`worklog-core`]: ../../worklog-core/
use crate::load_config::load_config;
use crate::prompt::TerminalConfirmation;
use crate::upload::JiraClient;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use worklog_core::parse::{delimiter_byte, read_worklog_file};
use worklog_core::synchronise::{run_pipeline, PipelineOptions};

/// CLI for worklog-sync: push a time-tracking CSV export to Jira.
#[derive(Parser, Debug)]
#[clap(
    name = "worklog-sync",
    version,
    about = "Submit a dailytime CSV export to Jira as work-log entries"
)]
pub struct Cli {
    /// Path to the CSV export
    pub file: PathBuf,

    /// Don't ask for confirmation
    #[clap(short, long)]
    pub quiet: bool,

    /// Delimiter used for the CSV
    #[clap(short, long, default_value = ",")]
    pub delimiter: String,
}

/// Async CLI entrypoint for integration tests and main().
///
/// Unreadable input and missing configuration abort with an error. Pipeline
/// failures (validation, cancellation, submission) are printed to stdout by
/// this handler and then returned, so the process still exits non-zero.
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let delimiter = delimiter_byte(&cli.delimiter)?;
    let worklog = read_worklog_file(&cli.file, delimiter)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let config = load_config()?;
    let submitter = JiraClient::new(config);
    let options = PipelineOptions { quiet: cli.quiet };

    let mut stdout = std::io::stdout();
    match run_pipeline(worklog, &options, &submitter, &TerminalConfirmation, &mut stdout).await {
        Ok(report) => {
            tracing::info!(transferred = report.transferred, "Worklog submitted");
            Ok(())
        }
        Err(e) => {
            println!("{e}");
            tracing::error!(error = %e, "Worklog pipeline failed");
            Err(anyhow::Error::new(e))
        }
    }
}

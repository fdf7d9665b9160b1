use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use worklog_core::error::PipelineError;
use worklog_sync::cli::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the worklog dump and summary.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("CLI application startup: tracing initialised, environment loaded");

    let cli = Cli::parse();
    tracing::info!(file = %cli.file.display(), quiet = cli.quiet, "CLI arguments parsed, invoking run");
    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("CLI completed successfully"),
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            // Already printed to stdout by `run`.
            if e.downcast_ref::<PipelineError>().is_some() {
                std::process::exit(1);
            }
        }
    }
    result
}

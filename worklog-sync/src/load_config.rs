/// `load_config` module: reads the Jira endpoint and credential from the environment.
///
/// # Responsibilities
/// - Load an optional `.env` file so credentials need not live in the shell
/// - Require `JIRA_ISSUE` (base URL, issue number is appended) and `JIRA_TOKEN`
///   (pre-encoded Basic credential)
/// - Fail with a message naming the missing variable
///
/// # Errors
/// All errors use `anyhow::Error` and are surfaced at the CLI boundary.
use anyhow::Result;
use std::env;
use tracing::{error, info};
use worklog_core::config::WorklogConfig;

pub const JIRA_ISSUE_VAR: &str = "JIRA_ISSUE";
pub const JIRA_TOKEN_VAR: &str = "JIRA_TOKEN";

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            info!(var = name, "Found in env");
            Ok(value)
        }
        Ok(_) => {
            error!(var = name, "Environment variable is empty");
            Err(anyhow::anyhow!("{name} environment variable is empty"))
        }
        Err(e) => {
            error!(error = ?e, var = name, "Environment variable not set");
            Err(anyhow::anyhow!("{name} environment variable not set: {e}"))
        }
    }
}

/// Builds the [`WorklogConfig`] from process environment.
///
/// `.env` loading is left to the caller (`main`) so tests control the environment.
pub fn load_config() -> Result<WorklogConfig> {
    let base_url = require_var(JIRA_ISSUE_VAR)?;
    let token = require_var(JIRA_TOKEN_VAR)?;

    let config = WorklogConfig::new(base_url, token);
    config.trace_loaded();
    Ok(config)
}

use tracing::{debug, info};

/// Where and as whom work logs are posted. Read-only after startup.
#[derive(Clone)]
pub struct WorklogConfig {
    /// Base URL of the issue endpoint; the issue number is appended directly.
    pub base_url: String,
    /// Pre-encoded HTTP Basic credential, sent verbatim.
    pub token: String,
}

impl WorklogConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Full worklog endpoint for one issue.
    pub fn worklog_url(&self, issue_number: &str) -> String {
        format!("{}{}/worklog", self.base_url, issue_number)
    }

    pub fn trace_loaded(&self) {
        info!(
            base_url = %self.base_url,
            token_set = !self.token.is_empty(),
            "Loaded WorklogConfig"
        );
        debug!(token_len = self.token.len(), "WorklogConfig token length");
    }
}

impl std::fmt::Debug for WorklogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorklogConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

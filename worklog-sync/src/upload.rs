#![doc = "Jira client for the CLI: implements the core `Submitter` trait over HTTP."]
//
//! # Jira Submission
//!
//! [`JiraClient`] posts one work log per call to
//! `<JIRA_ISSUE><issue>/worklog` with the configured Basic credential.
//! The credential is sent verbatim; it must already be base64 encoded.
//!
//! Any transport failure or non-2xx response is returned as an error; the
//! pipeline turns it into a failed submission. Nothing is retried.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use worklog_core::config::WorklogConfig;
use worklog_core::contract::{SubmitError, Submitter, WorkLogEntry, WorklogPayload};

pub struct JiraClient {
    client: Client,
    config: WorklogConfig,
}

impl JiraClient {
    pub fn new(config: WorklogConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Submitter for JiraClient {
    async fn post_worklog(&self, entry: &WorkLogEntry) -> Result<(), SubmitError> {
        let issue = entry
            .issue_number
            .as_deref()
            .ok_or_else(|| format!("Entry has no issue number: {entry}"))?;
        let url = self.config.worklog_url(issue);
        let payload = WorklogPayload::from_entry(entry);

        tracing::info!(
            url = %url,
            started = %payload.started,
            time_spent = %payload.time_spent,
            "Posting work log"
        );

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Basic {}", self.config.token))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, url = %url, "Request to Jira failed");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<Failed to decode response body>"));
            tracing::error!(status = %status, url = %url, "Jira rejected work log. Response body: {body}");
            return Err(format!("Jira returned {status} for {issue}: {body}").into());
        }

        tracing::info!(status = %status, issue, "Work log accepted");
        Ok(())
    }
}

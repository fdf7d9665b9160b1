//! # contract: data model and pipeline seams
//!
//! This module holds the plain data types that flow through the pipeline
//! (raw CSV rows, parsed [`WorkLogEntry`] values, the JSON payload posted to
//! Jira) and the two traits the pipeline is parameterised over:
//!
//! - [`Submitter`]: posts a single work-log entry to the remote tracker.
//! - [`ConfirmationProvider`]: answers a yes/no question before submission.
//!
//! ## Mocking & Testing
//! - Both traits are annotated for `mockall` so tests can drive the whole
//!   pipeline without a network or a terminal. The mocks are exported behind
//!   the `test-export-mocks` feature for use by downstream crates.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::automock;
use serde::Serialize;

/// Fixed time of day attached to every submitted work log.
pub const STARTED_TIME_OF_DAY: &str = "T18:00:00.201+0000";

/// A single row as read from the CSV export, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RawRecord {
    pub activity: String,
    pub time_in_minutes: String,
}

impl RawRecord {
    pub fn new(activity: impl Into<String>, time_in_minutes: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            time_in_minutes: time_in_minutes.into(),
        }
    }
}

/// Issue number and free-text description split from an activity label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: Option<String>,
    pub description: String,
}

/// One work-log candidate produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkLogEntry {
    /// Date inherited from the last date marker; `None` when no marker preceded the row.
    pub date: Option<NaiveDate>,
    pub issue_number: Option<String>,
    pub description: String,
    pub time_in_minutes: i64,
}

impl WorkLogEntry {
    /// True when the entry carries everything Jira needs.
    pub fn is_valid(&self) -> bool {
        self.time_in_minutes > 0
            && self.issue_number.is_some()
            && !self.description.is_empty()
            && self.date.is_some()
    }

    /// Issue number, or the literal `null` when absent.
    pub fn issue_label(&self) -> &str {
        self.issue_number.as_deref().unwrap_or("null")
    }
}

impl fmt::Display for WorkLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.issue_label(), self.description)
    }
}

/// Body of `POST <base>/<issue>/worklog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayload {
    pub started: String,
    pub time_spent: String,
    pub comment: String,
}

impl WorklogPayload {
    /// Builds the payload for an entry. Entries without a date yield an empty
    /// date prefix; the validator keeps such entries away from submission.
    pub fn from_entry(entry: &WorkLogEntry) -> Self {
        let date = entry
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        Self {
            started: format!("{date}{STARTED_TIME_OF_DAY}"),
            time_spent: format!("{}m", entry.time_in_minutes),
            comment: entry.description.clone(),
        }
    }
}

/// Boxed error returned across the async trait seam.
pub type SubmitError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for posting work logs to the issue tracker.
/// Implemented by the real HTTP client and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Post one entry. The entry is guaranteed valid by the caller.
    async fn post_worklog(&self, entry: &WorkLogEntry) -> Result<(), SubmitError>;
}

/// Trait for asking the user whether to proceed.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait ConfirmationProvider {
    /// Returns `Ok(true)` when the user agrees.
    fn confirm(&self, prompt: &str) -> std::io::Result<bool>;
}

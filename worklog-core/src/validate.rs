//! All-or-nothing validation of a parsed worklog.

use tracing::{error, info};

use crate::contract::WorkLogEntry;
use crate::error::ValidationError;

/// Describes each entry that cannot be submitted, as `"<issue> <description>"`.
pub fn missing_info(worklog: &[WorkLogEntry]) -> Vec<String> {
    worklog
        .iter()
        .filter(|entry| !entry.is_valid())
        .map(ToString::to_string)
        .collect()
}

/// Checks a worklog for mistakes.
///
/// Returns the worklog untouched when every entry is valid. A single invalid
/// entry rejects the whole worklog; the valid subset is never submitted alone.
pub fn check_worklog(worklog: Vec<WorkLogEntry>) -> Result<Vec<WorkLogEntry>, ValidationError> {
    let invalid = missing_info(&worklog);
    if !invalid.is_empty() {
        error!(invalid = invalid.len(), total = worklog.len(), "Worklog has incomplete entries");
        return Err(ValidationError { invalid });
    }
    info!(entries = worklog.len(), "Worklog validated");
    Ok(worklog)
}

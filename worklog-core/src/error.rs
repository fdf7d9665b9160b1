//! Error taxonomy for the worklog pipeline.

use thiserror::Error;

use crate::contract::SubmitError;

/// Reading the CSV export failed. Always fatal.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid delimiter {0:?}: must be a single ASCII character")]
    Delimiter(String),
}

/// One or more entries lack the data needed to submit them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing data for: \n{}", invalid.join("\n"))]
pub struct ValidationError {
    /// `"<issue> <description>"` for each offending entry, in input order.
    pub invalid: Vec<String>,
}

/// Terminal failure of a pipeline run after parsing.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Canceled")]
    Cancelled,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Submission(SubmitError),
}

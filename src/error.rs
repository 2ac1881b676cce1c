//! Error types for grants-admin

use thiserror::Error;

/// Errors surfaced by the grants admin flows
///
/// Every variant reaching a form handler is converted into a single
/// destructive notification by [`crate::report::OutcomeReporter`].
#[derive(Error, Debug)]
pub enum Error {
    /// The project lookup failed or returned a non-success status
    #[error("Failed to fetch project: {0}")]
    FetchFailed(String),

    /// No draft passed validation at submit time
    #[error("At least one complete milestone is required")]
    NoValidEntries,

    /// Some, but not all, milestone creation requests failed
    #[error("Failed to create {failed} milestone(s)")]
    PartialBatchFailure {
        /// Number of failed requests
        failed: usize,
        /// Number of requests in the batch
        total: usize,
    },

    /// Every milestone creation request failed
    #[error("Failed to create {failed} milestone(s)")]
    TotalBatchFailure {
        /// Number of failed requests
        failed: usize,
    },

    /// Network-level failure talking to the API
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// A submit was requested while a batch is still in flight
    #[error("A submission is already in progress")]
    SubmitInProgress,

    /// Project identifier could not be parsed
    #[error("Invalid project id: {0}")]
    InvalidProjectId(String),

    /// Required project fields are blank
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error describes a settled batch with failed members
    pub const fn is_batch_failure(&self) -> bool {
        matches!(
            self,
            Self::PartialBatchFailure { .. } | Self::TotalBatchFailure { .. }
        )
    }

    /// Message shown to the user in a failure notification
    pub fn user_message(&self) -> String {
        match self {
            Self::NoValidEntries
            | Self::PartialBatchFailure { .. }
            | Self::TotalBatchFailure { .. }
            | Self::SubmitInProgress => self.to_string(),
            Self::Transport(_) => "Failed to create milestones. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for grants-admin
pub type Result<T> = std::result::Result<T, Error>;

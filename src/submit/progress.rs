//! Batch progress reporting
//!
//! Front ends (the terminal spinner, tests) observe a batch through
//! [`ProgressCallback`] without the submitter knowing how it is shown.

use crate::error::Error;
use crate::types::Milestone;
use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Filtering drafts down to the complete ones
    Validating,
    /// Creation requests are in flight
    Submitting,
    /// Every request has settled
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating => write!(f, "Validating milestones"),
            Self::Submitting => write!(f, "Creating milestones"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Receives updates while a batch runs
///
/// Callbacks for individual milestones arrive in completion order, not
/// list order.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when the milestone drafted at `index` was created
    ///
    /// `milestone` is `None` when the server did not echo it back.
    async fn on_milestone_created(&self, index: usize, title: &str, milestone: Option<&Milestone>);

    /// Called when the milestone drafted at `index` could not be created
    async fn on_milestone_failed(&self, index: usize, title: &str, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// Ignores every update
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_milestone_created(
        &self,
        _index: usize,
        _title: &str,
        _milestone: Option<&Milestone>,
    ) {
    }
    async fn on_milestone_failed(&self, _index: usize, _title: &str, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}

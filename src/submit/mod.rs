//! Batch milestone submission
//!
//! Handles the workflow of turning a list of milestone drafts into created
//! milestones:
//! 1. Validation - keep only complete drafts
//! 2. Submission - one concurrent creation request per draft
//! 3. Reporting - one notification and a navigation decision for the batch

mod batch;
mod form;
mod progress;

pub use batch::{
    BatchResult, BatchStatus, ItemOutcome, SubmissionOutcome, build_requests, submit_batch,
};
pub use form::{FormState, MilestoneForm, SubmitOutcome};
pub use progress::{NoopProgress, Phase, ProgressCallback};

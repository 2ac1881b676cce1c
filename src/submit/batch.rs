//! Concurrent milestone creation
//!
//! Every valid draft gets its own creation request. All requests are
//! dispatched together and the batch waits for each one to settle, so one
//! failure never cancels or hides the others. There is no rollback: a
//! partially failed batch leaves its created milestones in place.

use crate::api::GrantsApi;
use crate::drafts::ValidDraft;
use crate::error::Error;
use crate::submit::{Phase, ProgressCallback};
use crate::types::{Milestone, MilestoneStatus, NewMilestone, ProjectId};
use futures::future::join_all;
use tracing::{debug, info, warn};

/// Settled result of one creation request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The server accepted the request; the body, when it described a milestone
    Created(Option<Milestone>),
    /// Non-success status or transport failure
    Failed(String),
}

impl SubmissionOutcome {
    /// Whether the milestone was created
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Outcome for one draft of the batch
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    /// Index of the draft in the list it was submitted from
    pub index: usize,
    /// Draft title, for display
    pub title: String,
    /// How the request settled
    pub outcome: SubmissionOutcome,
}

/// Classification of a settled batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// Every request succeeded
    Succeeded,
    /// At least one request succeeded and at least one failed
    PartiallyFailed,
    /// Every request failed
    Failed,
    /// Nothing was submitted
    Empty,
}

/// Aggregate of all outcomes of one submit action
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    project_id: ProjectId,
    outcomes: Vec<ItemOutcome>,
}

impl BatchResult {
    /// Build a result from per-item outcomes
    pub const fn new(project_id: ProjectId, outcomes: Vec<ItemOutcome>) -> Self {
        Self {
            project_id,
            outcomes,
        }
    }

    /// Project the milestones were submitted for
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Per-item outcomes, in draft order
    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    /// Number of created milestones
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_created()).count()
    }

    /// Number of failed requests
    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// Milestones that were created
    pub fn created(&self) -> impl Iterator<Item = &Milestone> {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            SubmissionOutcome::Created(m) => m.as_ref(),
            SubmissionOutcome::Failed(_) => None,
        })
    }

    /// Draft indices whose request failed
    pub fn failed_indices(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .filter(|o| !o.outcome.is_created())
            .map(|o| o.index)
            .collect()
    }

    /// Classify the batch
    pub fn status(&self) -> BatchStatus {
        match (self.success_count(), self.failure_count()) {
            (0, 0) => BatchStatus::Empty,
            (_, 0) => BatchStatus::Succeeded,
            (0, _) => BatchStatus::Failed,
            _ => BatchStatus::PartiallyFailed,
        }
    }

    /// The error describing this batch, if any request failed
    pub fn to_error(&self) -> Option<Error> {
        let failed = self.failure_count();
        match self.status() {
            BatchStatus::PartiallyFailed => Some(Error::PartialBatchFailure {
                failed,
                total: self.outcomes.len(),
            }),
            BatchStatus::Failed => Some(Error::TotalBatchFailure { failed }),
            BatchStatus::Succeeded | BatchStatus::Empty => None,
        }
    }
}

/// Build one creation request per valid draft
pub fn build_requests(project_id: ProjectId, drafts: &[ValidDraft]) -> Vec<NewMilestone> {
    drafts
        .iter()
        .map(|valid| NewMilestone {
            project_id,
            title: valid.draft.title.clone(),
            description: valid.draft.description.clone(),
            due_date: valid.draft.deadline.clone(),
            status: MilestoneStatus::Pending,
            budget: valid.draft.budget.clone(),
        })
        .collect()
}

/// Create a milestone for every valid draft, concurrently
///
/// All requests are dispatched before any is awaited on its own, and the
/// returned future resolves only once every request has settled.
pub async fn submit_batch(
    api: &dyn GrantsApi,
    project_id: ProjectId,
    drafts: &[ValidDraft],
    progress: &dyn ProgressCallback,
) -> BatchResult {
    let requests = build_requests(project_id, drafts);

    info!(%project_id, count = requests.len(), "submitting milestone batch");
    progress.on_phase(Phase::Submitting).await;

    let attempts = drafts.iter().zip(&requests).map(|(valid, request)| async move {
        let outcome = match api.create_milestone(request).await {
            Ok(milestone) => {
                debug!(index = valid.index, id = ?milestone.as_ref().map(|m| m.id), "milestone created");
                progress
                    .on_milestone_created(valid.index, &request.title, milestone.as_ref())
                    .await;
                SubmissionOutcome::Created(milestone)
            }
            Err(e) => {
                warn!(index = valid.index, title = %request.title, error = %e, "milestone creation failed");
                progress
                    .on_milestone_failed(valid.index, &request.title, &e)
                    .await;
                SubmissionOutcome::Failed(e.to_string())
            }
        };

        ItemOutcome {
            index: valid.index,
            title: request.title.clone(),
            outcome,
        }
    });

    let outcomes = join_all(attempts).await;
    let result = BatchResult::new(project_id, outcomes);

    info!(
        %project_id,
        created = result.success_count(),
        failed = result.failure_count(),
        "milestone batch settled"
    );
    progress.on_phase(Phase::Complete).await;

    result
}

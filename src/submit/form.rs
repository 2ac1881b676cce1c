//! The milestone creation form
//!
//! Ties the draft list, the batch submitter and the reporter together and
//! owns the per-submit state machine:
//!
//! ```text
//! Idle/Settled --submit--> Submitting --settle--> Settled
//!      |                                             ^
//!      +--no valid drafts (no requests sent)---------+ (stays Idle)
//! ```
//!
//! A submit while `Submitting` is refused. A submit future dropped before its
//! batch settles puts the form back to `Idle`. Drafts are never modified by a
//! submit, so a failed batch can be retried as-is.

use crate::api::GrantsApi;
use crate::drafts::{DraftField, DraftList, validate};
use crate::error::{Error, Result};
use crate::report::OutcomeReporter;
use crate::submit::{BatchResult, BatchStatus, Phase, ProgressCallback, submit_batch};
use crate::types::{Project, ProjectId};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Submit state of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Nothing submitted yet, or the last submit was rejected before sending
    Idle,
    /// A batch is in flight
    Submitting,
    /// The last batch settled with this status
    Settled(BatchStatus),
}

/// What a submit action ended with
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Every milestone was created; the user was navigated away
    Succeeded(BatchResult),
    /// Some milestones failed; the user stays on the form
    PartiallyFailed(BatchResult),
    /// Every milestone failed; the user stays on the form
    Failed(BatchResult),
    /// Nothing was sent
    Rejected(Error),
    /// The batch settled after the form was closed; nothing was reported
    Discarded(BatchResult),
}

impl SubmitOutcome {
    /// Settled batch, if requests were sent
    pub const fn batch(&self) -> Option<&BatchResult> {
        match self {
            Self::Succeeded(b) | Self::PartiallyFailed(b) | Self::Failed(b) | Self::Discarded(b) => {
                Some(b)
            }
            Self::Rejected(_) => None,
        }
    }
}

/// Holds a form in `Submitting`; dropping it unsettled returns the form to `Idle`
struct InFlight<'a> {
    state: &'a Mutex<FormState>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a Mutex<FormState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, status: BatchStatus) {
        *self.state.lock() = FormState::Settled(status);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("submit dropped before the batch settled");
            *self.state.lock() = FormState::Idle;
        }
    }
}

/// Milestone form bound to a loaded project
pub struct MilestoneForm {
    project: Project,
    drafts: Mutex<DraftList>,
    state: Mutex<FormState>,
    mounted: AtomicBool,
}

impl MilestoneForm {
    /// Open a form for an already loaded project
    pub fn new(project: Project) -> Self {
        Self::with_drafts(project, DraftList::new())
    }

    /// Open a form pre-filled with drafts
    pub fn with_drafts(project: Project, drafts: DraftList) -> Self {
        Self {
            project,
            drafts: Mutex::new(drafts),
            state: Mutex::new(FormState::Idle),
            mounted: AtomicBool::new(true),
        }
    }

    /// Fetch the project and open a form for it
    ///
    /// A failed lookup is reported (and the user sent back to the project
    /// list) before the error is returned.
    pub async fn load(
        api: &dyn GrantsApi,
        project_id: ProjectId,
        reporter: &OutcomeReporter<'_>,
    ) -> Result<Self> {
        match api.get_project(project_id).await {
            Ok(project) => {
                debug!(%project_id, name = %project.name, "project loaded");
                Ok(Self::new(project))
            }
            Err(e) => {
                let err = match e {
                    Error::FetchFailed(_) => e,
                    other => Error::FetchFailed(other.to_string()),
                };
                reporter.report_fetch_failure(&err);
                Err(err)
            }
        }
    }

    /// The project milestones are added to
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Snapshot of the current drafts
    pub fn drafts(&self) -> DraftList {
        self.drafts.lock().clone()
    }

    /// Append an empty draft
    pub fn add_draft(&self) {
        self.drafts.lock().add();
    }

    /// Edit a field of one draft
    pub fn update_draft(&self, index: usize, field: DraftField, value: impl Into<String>) {
        self.drafts.lock().update(index, field, value);
    }

    /// Remove a draft (never the last one)
    pub fn remove_draft(&self, index: usize) -> bool {
        self.drafts.lock().remove(index)
    }

    /// Current submit state
    pub fn state(&self) -> FormState {
        *self.state.lock()
    }

    /// Whether a batch is in flight
    pub fn is_submitting(&self) -> bool {
        self.state() == FormState::Submitting
    }

    /// Label of the submit action
    pub fn submit_label(&self) -> String {
        let submitting = self.is_submitting();
        self.drafts.lock().submit_label(submitting)
    }

    /// Mark the form as closed; batches settling afterwards are not reported
    pub fn close(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    /// Whether the form is still displayed
    pub fn is_open(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Validate and submit the current drafts
    ///
    /// Returns `Err(Error::SubmitInProgress)` only when another submit on
    /// this form has not settled yet. Every other failure is reported through
    /// `reporter` and returned as an outcome.
    pub async fn submit(
        &self,
        api: &dyn GrantsApi,
        reporter: &OutcomeReporter<'_>,
        progress: &dyn ProgressCallback,
    ) -> Result<SubmitOutcome> {
        let (valid, total) = {
            let mut state = self.state.lock();
            if *state == FormState::Submitting {
                return Err(Error::SubmitInProgress);
            }

            let drafts = self.drafts.lock();
            let valid = validate(drafts.as_slice());
            debug!(total = drafts.len(), valid = valid.len(), "validated drafts");

            if valid.is_empty() {
                *state = FormState::Idle;
                drop(drafts);
                drop(state);
                reporter.report_error(&Error::NoValidEntries);
                return Ok(SubmitOutcome::Rejected(Error::NoValidEntries));
            }

            *state = FormState::Submitting;
            (valid, drafts.len())
        };
        let in_flight = InFlight::begin(&self.state);

        progress.on_phase(Phase::Validating).await;
        progress
            .on_message(&format!(
                "Submitting {} of {} milestone(s) for {}",
                valid.len(),
                total,
                self.project.name
            ))
            .await;

        let result = submit_batch(api, self.project.id, &valid, progress).await;
        let status = result.status();
        in_flight.settle(status);

        if !self.is_open() {
            debug!(project_id = %self.project.id, "form closed before batch settled, discarding");
            return Ok(SubmitOutcome::Discarded(result));
        }

        reporter.report(&result);
        Ok(match status {
            BatchStatus::Succeeded => SubmitOutcome::Succeeded(result),
            BatchStatus::Failed => SubmitOutcome::Failed(result),
            BatchStatus::PartiallyFailed | BatchStatus::Empty => SubmitOutcome::PartiallyFailed(result),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: ProjectId(1),
            name: "Test".to_string(),
            description: None,
            status: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_new_form_is_idle_with_one_draft() {
        let form = MilestoneForm::new(project());
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.drafts().len(), 1);
        assert_eq!(form.submit_label(), "Create 1 Milestone");
    }

    #[test]
    fn test_draft_editing_through_form() {
        let form = MilestoneForm::new(project());
        form.add_draft();
        form.update_draft(1, DraftField::Title, "Beta");

        assert_eq!(form.drafts().get(1).unwrap().title, "Beta");
        assert!(form.remove_draft(0));
        assert!(!form.remove_draft(0));
        assert_eq!(form.drafts().len(), 1);
    }

    #[test]
    fn test_close() {
        let form = MilestoneForm::new(project());
        assert!(form.is_open());
        form.close();
        assert!(!form.is_open());
    }
}

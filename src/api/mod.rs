//! Grants admin API
//!
//! The forms only ever talk to three endpoints: fetch a project, create a
//! project, and create a milestone. [`GrantsApi`] abstracts them so the
//! submission logic can run against the real HTTP service or a test double.

mod http;

pub use http::HttpGrantsApi;

use crate::error::Result;
use crate::project::NewProject;
use crate::types::{Milestone, NewMilestone, Project, ProjectId};
use async_trait::async_trait;

/// Operations the admin forms need from the grants API
#[async_trait]
pub trait GrantsApi: Send + Sync {
    /// `GET /api/projects/{id}`
    async fn get_project(&self, id: ProjectId) -> Result<Project>;

    /// `POST /api/projects`
    async fn create_project(&self, project: &NewProject) -> Result<Project>;

    /// `POST /api/milestones`
    ///
    /// Success is decided by the response status alone. The created
    /// milestone is `None` when the success body cannot be read as one.
    async fn create_milestone(&self, milestone: &NewMilestone) -> Result<Option<Milestone>>;
}

//! Mock grants API for testing

#![allow(dead_code)]

use async_trait::async_trait;
use grants_admin::api::GrantsApi;
use grants_admin::error::{Error, Result};
use grants_admin::project::NewProject;
use grants_admin::types::{Milestone, NewMilestone, Project, ProjectId};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Hand-written mock of [`GrantsApi`]
///
/// Features:
/// - Auto-incrementing milestone and project ids
/// - Call tracking for verification
/// - Per-title failure injection for milestone creation
/// - Optional gate that holds milestone requests in flight until released
pub struct MockGrantsApi {
    projects: Mutex<HashMap<ProjectId, Project>>,
    next_id: AtomicU64,
    // Call tracking
    get_project_calls: Mutex<Vec<ProjectId>>,
    create_project_calls: Mutex<Vec<NewProject>>,
    create_milestone_calls: Mutex<Vec<NewMilestone>>,
    // Error injection
    failing_titles: Mutex<HashSet<String>>,
    error_on_get_project: Mutex<Option<String>>,
    error_on_create_project: Mutex<Option<String>>,
    // In-flight tracking
    gate: Option<Semaphore>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockGrantsApi {
    /// Create a mock serving the given projects
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self::build(projects, None)
    }

    /// Like [`Self::with_projects`], but milestone requests block until
    /// [`Self::release`] is called
    pub fn gated(projects: Vec<Project>) -> Self {
        Self::build(projects, Some(Semaphore::new(0)))
    }

    fn build(projects: Vec<Project>, gate: Option<Semaphore>) -> Self {
        Self {
            projects: Mutex::new(projects.into_iter().map(|p| (p.id, p)).collect()),
            next_id: AtomicU64::new(100),
            get_project_calls: Mutex::new(Vec::new()),
            create_project_calls: Mutex::new(Vec::new()),
            create_milestone_calls: Mutex::new(Vec::new()),
            failing_titles: Mutex::new(HashSet::new()),
            error_on_get_project: Mutex::new(None),
            error_on_create_project: Mutex::new(None),
            gate,
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    // === Error injection methods ===

    /// Make `create_milestone` fail for drafts with this title
    pub fn fail_title(&self, title: &str) {
        self.failing_titles.lock().unwrap().insert(title.to_string());
    }

    /// Stop failing a title
    pub fn heal_title(&self, title: &str) {
        self.failing_titles.lock().unwrap().remove(title);
    }

    /// Make `get_project` return an error
    pub fn fail_get_project(&self, msg: &str) {
        *self.error_on_get_project.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_project` return an error
    pub fn fail_create_project(&self, msg: &str) {
        *self.error_on_create_project.lock().unwrap() = Some(msg.to_string());
    }

    // === Gate ===

    /// Let every held and future milestone request proceed
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.close();
        }
    }

    /// Milestone requests currently waiting on the gate
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Highest number of milestone requests in flight at once
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    // === Call verification methods ===

    pub fn get_project_calls(&self) -> Vec<ProjectId> {
        self.get_project_calls.lock().unwrap().clone()
    }

    pub fn create_project_calls(&self) -> Vec<NewProject> {
        self.create_project_calls.lock().unwrap().clone()
    }

    pub fn create_milestone_calls(&self) -> Vec<NewMilestone> {
        self.create_milestone_calls.lock().unwrap().clone()
    }

    /// Titles sent to `create_milestone`, in dispatch order
    pub fn submitted_titles(&self) -> Vec<String> {
        self.create_milestone_calls()
            .into_iter()
            .map(|c| c.title)
            .collect()
    }
}

#[async_trait]
impl GrantsApi for MockGrantsApi {
    async fn get_project(&self, id: ProjectId) -> Result<Project> {
        self.get_project_calls.lock().unwrap().push(id);

        if let Some(msg) = self.error_on_get_project.lock().unwrap().as_ref() {
            return Err(Error::FetchFailed(msg.clone()));
        }

        self.projects
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::FetchFailed(format!("API error (404): project {id} not found")))
    }

    async fn create_project(&self, project: &NewProject) -> Result<Project> {
        self.create_project_calls
            .lock()
            .unwrap()
            .push(project.clone());

        if let Some(msg) = self.error_on_create_project.lock().unwrap().as_ref() {
            return Err(Error::Api {
                status: 500,
                body: msg.clone(),
            });
        }

        let created = Project {
            id: ProjectId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: project.name.clone(),
            description: Some(project.description.clone()),
            status: Some(project.status.clone()),
            extra: serde_json::Map::new(),
        };
        self.projects
            .lock()
            .unwrap()
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn create_milestone(&self, milestone: &NewMilestone) -> Result<Option<Milestone>> {
        self.create_milestone_calls
            .lock()
            .unwrap()
            .push(milestone.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            // Closed means released; the permit itself is never handed out
            let _ = gate.acquire().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_titles.lock().unwrap().contains(&milestone.title) {
            return Err(Error::Api {
                status: 422,
                body: format!("could not create {}", milestone.title),
            });
        }

        Ok(Some(Milestone {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            project_id: milestone.project_id,
            title: milestone.title.clone(),
            extra: serde_json::Map::new(),
        }))
    }
}

//! Test data factories for grants-admin types

#![allow(dead_code)]

use grants_admin::drafts::{DraftList, MilestoneDraft};
use grants_admin::project::{Category, ProgramType, ProjectForm, ProjectStatus};
use grants_admin::types::{Milestone, Project, ProjectId};

/// Create a project with default values
pub fn make_project(id: u64, name: &str) -> Project {
    Project {
        id: ProjectId(id),
        name: name.to_string(),
        description: Some(format!("{name} background")),
        status: Some("active".to_string()),
        extra: serde_json::Map::new(),
    }
}

/// Create a complete draft
pub fn make_draft(title: &str) -> MilestoneDraft {
    MilestoneDraft {
        title: title.to_string(),
        description: format!("{title} deliverables"),
        deadline: "2025-03-31".to_string(),
        budget: "1500".to_string(),
    }
}

/// Create a draft missing its budget
pub fn make_incomplete_draft(title: &str) -> MilestoneDraft {
    MilestoneDraft {
        budget: String::new(),
        ..make_draft(title)
    }
}

/// Create a draft list from titles, all complete
pub fn make_drafts(titles: &[&str]) -> DraftList {
    DraftList::from_drafts(titles.iter().map(|t| make_draft(t)).collect())
}

/// Create a milestone as the server would return it
pub fn make_milestone(id: u64, project_id: ProjectId, title: &str) -> Milestone {
    Milestone {
        id,
        project_id,
        title: title.to_string(),
        extra: serde_json::Map::new(),
    }
}

/// Create a project form with every required field filled
pub fn make_project_form(title: &str) -> ProjectForm {
    ProjectForm {
        title: title.to_string(),
        creator_username: "builder#0001".to_string(),
        grantee_email: "grantee@example.com".to_string(),
        category: Some(Category::Development),
        status: Some(ProjectStatus::Active),
        program_type: Some(ProgramType::Milestone),
        funding_requested: "25000".to_string(),
        background: "Tooling for the ecosystem".to_string(),
        mission_expertise: "Compilers".to_string(),
        campaign_goals: "Ship v1".to_string(),
        ..ProjectForm::default()
    }
}

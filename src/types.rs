//! Core types for grants-admin

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a persisted project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| Error::InvalidProjectId(s.to_string()))
    }
}

/// A grant project as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Project ID
    pub id: ProjectId,
    /// Display name
    pub name: String,
    /// Project background
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status (e.g., "active")
    #[serde(default)]
    pub status: Option<String>,
    /// Remaining columns, kept opaque
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A milestone as returned by the API after creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Milestone ID
    pub id: u64,
    /// Owning project
    pub project_id: ProjectId,
    /// Milestone title
    pub title: String,
    /// Remaining columns, kept opaque
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Status assigned to newly created milestones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Not started yet
    Pending,
}

/// Body of `POST /api/milestones`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMilestone {
    /// Parent project
    pub project_id: ProjectId,
    /// Milestone title
    pub title: String,
    /// Milestone detail
    pub description: String,
    /// Deadline as entered (date string)
    pub due_date: String,
    /// Always [`MilestoneStatus::Pending`] on creation
    pub status: MilestoneStatus,
    /// Budget as entered (numeric string, not re-validated)
    pub budget: String,
}

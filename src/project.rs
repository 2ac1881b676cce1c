//! Project creation
//!
//! Collects the fields of a new grant project and maps them onto the
//! `POST /api/projects` body. The created project's id is what the
//! milestone form is opened with afterwards.

use crate::api::GrantsApi;
use crate::error::{Error, Result};
use crate::report::{Decision, OutcomeReporter};
use crate::types::Project;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Software development
    Development,
    /// Education and outreach
    Education,
    /// Infrastructure
    Infrastructure,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Self; 3] = [Self::Development, Self::Education, Self::Infrastructure];

    /// Value sent to the API
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Education => "education",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Development => "Development",
            Self::Education => "Education",
            Self::Infrastructure => "Infrastructure",
        };
        write!(f, "{label}")
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// In progress
    Active,
    /// Behind or at risk
    AtRisk,
    /// Past its deadline
    Overdue,
    /// Stopped
    Canceled,
    /// Finished
    Completed,
}

impl ProjectStatus {
    /// All statuses in menu order
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::AtRisk,
        Self::Overdue,
        Self::Canceled,
        Self::Completed,
    ];

    /// Value sent to the API
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::AtRisk => "at-risk",
            Self::Overdue => "overdue",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "Active",
            Self::AtRisk => "At Risk",
            Self::Overdue => "Overdue",
            Self::Canceled => "Canceled",
            Self::Completed => "Completed",
        };
        write!(f, "{label}")
    }
}

/// How the grant is paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramType {
    /// Paid per milestone
    Milestone,
    /// Umbrella program with sub-projects
    Program,
}

impl ProgramType {
    /// All program types in menu order
    pub const ALL: [Self; 2] = [Self::Milestone, Self::Program];

    /// Value sent to the API
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Milestone => "milestone",
            Self::Program => "program",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Milestone => write!(f, "Milestone-based Program"),
            Self::Program => write!(f, "Program with Sub-projects"),
        }
    }
}

/// User-entered project fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectForm {
    /// Project title
    pub title: String,
    /// Discord username of the creator
    pub creator_username: String,
    /// Grantee contact email
    pub grantee_email: String,
    /// Category
    pub category: Option<Category>,
    /// Status
    pub status: Option<ProjectStatus>,
    /// Program type
    pub program_type: Option<ProgramType>,
    /// Requested funding, as entered
    pub funding_requested: String,
    /// Project background
    pub background: String,
    /// Mission and team expertise
    pub mission_expertise: String,
    /// Campaign goals
    pub campaign_goals: String,
    /// First creator stat label
    pub creator_stat_1_name: String,
    /// First creator stat value
    pub creator_stat_1_number: String,
    /// Second creator stat label
    pub creator_stat_2_name: String,
    /// Second creator stat value
    pub creator_stat_2_number: String,
    /// GitHub repository URL
    pub github_repo: String,
    /// `YouTube` channel
    pub youtube_link: String,
    /// `TikTok` profile
    pub tiktok_link: String,
    /// Twitter/X profile
    pub twitter_link: String,
    /// Twitch channel
    pub twitch_link: String,
    /// Other links, one per line
    pub website_links: String,
}

impl ProjectForm {
    /// Names of required text fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("creator_username", &self.creator_username),
            ("grantee_email", &self.grantee_email),
            ("funding_requested", &self.funding_requested),
            ("background", &self.background),
            ("mission_expertise", &self.mission_expertise),
            ("campaign_goals", &self.campaign_goals),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Map the form onto the API body, dated `today`
    pub fn to_payload(&self, today: NaiveDate) -> NewProject {
        NewProject {
            name: self.title.clone(),
            description: self.background.clone(),
            status: self
                .status
                .map(|s| s.as_str().to_lowercase())
                .unwrap_or_default(),
            github_repo: self.github_repo.clone(),
            discord_channel: self.creator_username.clone(),
            funding_amount: parse_funding(&self.funding_requested),
            start_date: today.format("%Y-%m-%d").to_string(),
            end_date: None,
            creator_username: self.creator_username.clone(),
            grantee_email: self.grantee_email.clone(),
            mission_expertise: self.mission_expertise.clone(),
            campaign_goals: self.campaign_goals.clone(),
            website_links: self.website_links.clone(),
            program_type: self
                .program_type
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            category: self
                .category
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            creator_stat_1_name: self.creator_stat_1_name.clone(),
            creator_stat_1_number: self.creator_stat_1_number.clone(),
            creator_stat_2_name: self.creator_stat_2_name.clone(),
            creator_stat_2_number: self.creator_stat_2_number.clone(),
            youtube_link: self.youtube_link.clone(),
            tiktok_link: self.tiktok_link.clone(),
            twitter_link: self.twitter_link.clone(),
            twitch_link: self.twitch_link.clone(),
        }
    }
}

/// Requested funding as a number
///
/// Reads the longest leading decimal number, so `"25,000"` is 25 and
/// `"1500 USD"` is 1500. No leading number, or a non-finite one, is zero.
fn parse_funding(raw: &str) -> f64 {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if b.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return 0.0;
    }
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(b.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Body of `POST /api/projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    /// Project name
    pub name: String,
    /// Background text
    pub description: String,
    /// Lowercased status, empty when unset
    pub status: String,
    /// GitHub repository URL
    pub github_repo: String,
    /// Discord channel (the creator's username)
    pub discord_channel: String,
    /// Requested funding
    pub funding_amount: f64,
    /// Creation date, `YYYY-MM-DD`
    pub start_date: String,
    /// Set once milestones are added
    pub end_date: Option<String>,
    /// Discord username of the creator
    pub creator_username: String,
    /// Grantee contact email
    pub grantee_email: String,
    /// Mission and team expertise
    pub mission_expertise: String,
    /// Campaign goals
    pub campaign_goals: String,
    /// Other links
    pub website_links: String,
    /// Program type, empty when unset
    pub program_type: String,
    /// Category, empty when unset
    pub category: String,
    /// First creator stat label
    pub creator_stat_1_name: String,
    /// First creator stat value
    pub creator_stat_1_number: String,
    /// Second creator stat label
    pub creator_stat_2_name: String,
    /// Second creator stat value
    pub creator_stat_2_number: String,
    /// `YouTube` channel
    pub youtube_link: String,
    /// `TikTok` profile
    pub tiktok_link: String,
    /// Twitter/X profile
    pub twitter_link: String,
    /// Twitch channel
    pub twitch_link: String,
}

/// Create a project from the form and report the result
///
/// On success the user is sent to the new project's milestone form. On
/// failure a destructive notification is shown and the error returned.
pub async fn create_project(
    api: &dyn GrantsApi,
    form: &ProjectForm,
    today: NaiveDate,
    reporter: &OutcomeReporter<'_>,
) -> Result<(Project, Decision)> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        let err = Error::MissingFields(missing.join(", "));
        reporter.report_project_failed(&err);
        return Err(err);
    }

    match api.create_project(&form.to_payload(today)).await {
        Ok(project) => {
            info!(project_id = %project.id, name = %project.name, "project created");
            let decision = reporter.report_project_created(&project, &form.title);
            Ok((project, decision))
        }
        Err(e) => {
            reporter.report_project_failed(&e);
            Err(e)
        }
    }
}

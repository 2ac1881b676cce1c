//! Turning outcomes into notifications and navigation
//!
//! Forms never print or redirect on their own. They hand every outcome to an
//! [`OutcomeReporter`], which emits exactly one [`Notification`] through the
//! injected [`Notifier`] and, on success, moves the user on through the
//! injected [`Navigator`].

use crate::error::Error;
use crate::submit::{BatchResult, BatchStatus};
use crate::types::{Project, ProjectId};

/// Project list route
pub const PROJECTS_PATH: &str = "/admin/projects";

/// Route of a project's detail view
pub fn project_path(id: ProjectId) -> String {
    format!("{PROJECTS_PATH}/{id}")
}

/// Route of the milestone creation form for a project
pub fn new_milestones_path(id: ProjectId) -> String {
    format!("{PROJECTS_PATH}/{id}/milestones/new")
}

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Informational / success
    #[default]
    Default,
    /// Failure
    Destructive,
}

/// A transient toast shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short heading
    pub title: String,
    /// Body text
    pub description: String,
    /// Style
    pub variant: Variant,
}

impl Notification {
    /// Success/info notification
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    /// Failure notification
    pub fn destructive(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    /// Show a notification
    fn notify(&self, notification: Notification);
}

/// Sink for navigation requests
pub trait Navigator: Send + Sync {
    /// Move the user to `path`
    fn go_to(&self, path: &str);
}

/// What the form should do after reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The user was sent to this route
    Advance(String),
    /// The user stays on the form with their input intact
    Stay,
}

impl Decision {
    /// Whether the user was moved away from the form
    pub const fn is_advance(&self) -> bool {
        matches!(self, Self::Advance(_))
    }
}

/// Maps outcomes to one notification plus an optional navigation
pub struct OutcomeReporter<'a> {
    notifier: &'a dyn Notifier,
    navigator: &'a dyn Navigator,
}

impl<'a> OutcomeReporter<'a> {
    /// Create a reporter over the given capabilities
    pub fn new(notifier: &'a dyn Notifier, navigator: &'a dyn Navigator) -> Self {
        Self {
            notifier,
            navigator,
        }
    }

    /// Report a settled milestone batch
    pub fn report(&self, result: &BatchResult) -> Decision {
        match result.status() {
            BatchStatus::Succeeded => {
                let created = result.success_count();
                self.notifier.notify(Notification::success(
                    "Milestones Created",
                    format!("Successfully created {created} milestone(s)."),
                ));
                self.advance(project_path(result.project_id()))
            }
            BatchStatus::PartiallyFailed | BatchStatus::Failed => match result.to_error() {
                Some(err) => self.report_error(&err),
                None => self.report_error(&Error::NoValidEntries),
            },
            BatchStatus::Empty => self.report_error(&Error::NoValidEntries),
        }
    }

    /// Report any failure of the milestone form
    pub fn report_error(&self, err: &Error) -> Decision {
        tracing::warn!(error = %err, "milestone submission failed");
        self.notifier
            .notify(Notification::destructive(err.user_message()));
        Decision::Stay
    }

    /// Report that the project behind a form could not be loaded
    pub fn report_fetch_failure(&self, err: &Error) -> Decision {
        tracing::error!(error = %err, "error fetching project");
        self.notifier
            .notify(Notification::destructive("Failed to load project details."));
        self.advance(PROJECTS_PATH.to_string())
    }

    /// Report a newly created project and move on to its milestone form
    pub fn report_project_created(&self, project: &Project, title: &str) -> Decision {
        self.notifier.notify(Notification::success(
            "Project Created",
            format!("{title} has been successfully created."),
        ));
        self.advance(new_milestones_path(project.id))
    }

    /// Report a failed project creation
    pub fn report_project_failed(&self, err: &Error) -> Decision {
        tracing::warn!(error = %err, "error creating project");
        let description = match err {
            Error::MissingFields(_) => err.to_string(),
            _ => "Failed to create project. Please try again.".to_string(),
        };
        self.notifier.notify(Notification::destructive(description));
        Decision::Stay
    }

    fn advance(&self, path: String) -> Decision {
        self.navigator.go_to(&path);
        Decision::Advance(path)
    }
}

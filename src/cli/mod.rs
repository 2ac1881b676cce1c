//! CLI commands
//!
//! Command implementations for the `grants` binary.

mod milestones;
mod notify;
mod progress;
mod project;
mod prompt;
mod style;

pub use milestones::run_milestones_new;
pub use project::{run_project_create, run_project_show};

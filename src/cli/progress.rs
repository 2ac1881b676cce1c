//! CLI progress callback with a spinner while milestones are in flight

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use grants_admin::error::Error;
use grants_admin::submit::{Phase, ProgressCallback};
use grants_admin::types::Milestone;
use indicatif::ProgressBar;
use std::time::Duration;

/// CLI progress callback that prints per-milestone results under a spinner
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create a progress reporter with a hidden spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self { spinner }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Validating => {}
            Phase::Submitting => {
                self.spinner.set_message(format!("{phase}..."));
                self.spinner.enable_steady_tick(Duration::from_millis(80));
            }
            Phase::Complete => self.spinner.finish_and_clear(),
        }
    }

    async fn on_milestone_created(&self, index: usize, title: &str, milestone: Option<&Milestone>) {
        let id = milestone.map(|m| format!("(#{})", m.id)).unwrap_or_default();
        self.spinner.suspend(|| {
            println!(
                "  {} Milestone {} created: {} {}",
                check(),
                index + 1,
                title.emphasis(),
                id.muted()
            );
        });
    }

    async fn on_milestone_failed(&self, index: usize, title: &str, error: &Error) {
        self.spinner.suspend(|| {
            eprintln!(
                "  {} Milestone {} failed: {}: {}",
                cross(),
                index + 1,
                title.accent().for_stderr(),
                error.to_string().error()
            );
        });
    }

    async fn on_message(&self, message: &str) {
        self.spinner.suspend(|| println!("{}", message.muted()));
    }
}

//! Project commands - show and create grant projects

use crate::cli::milestones::run_milestones_new;
use crate::cli::notify::{CliNavigator, CliNotifier};
use crate::cli::prompt;
use crate::cli::style::Stylize;
use anstream::println;
use grants_admin::api::GrantsApi;
use grants_admin::error::Result;
use grants_admin::project::{Category, ProgramType, ProjectForm, ProjectStatus, create_project};
use grants_admin::report::OutcomeReporter;
use grants_admin::types::ProjectId;
use std::path::Path;

/// Run the project show command
pub async fn run_project_show(api: &dyn GrantsApi, id: ProjectId) -> Result<bool> {
    let notifier = CliNotifier;
    let navigator = CliNavigator;
    let reporter = OutcomeReporter::new(&notifier, &navigator);

    match api.get_project(id).await {
        Ok(project) => {
            println!("{} {}", project.name.emphasis(), format!("#{}", project.id).muted());
            if let Some(status) = &project.status {
                println!("  Status: {}", status.accent());
            }
            if let Some(description) = &project.description {
                println!("  {description}");
            }
            for (key, value) in &project.extra {
                println!("  {}: {}", key.muted(), value);
            }
            Ok(true)
        }
        Err(e) => {
            reporter.report_fetch_failure(&e);
            Ok(false)
        }
    }
}

/// Run the project create command
///
/// With `add_milestones`, continues into the milestone form of the new
/// project, mirroring the redirect the success notification announces.
pub async fn run_project_create(
    api: &dyn GrantsApi,
    from_file: Option<&Path>,
    add_milestones: bool,
) -> Result<bool> {
    let form = match from_file {
        Some(path) => serde_json::from_str::<ProjectForm>(&std::fs::read_to_string(path)?)?,
        None => prompt_project_form()?,
    };

    let notifier = CliNotifier;
    let navigator = CliNavigator;
    let reporter = OutcomeReporter::new(&notifier, &navigator);
    let today = chrono::Utc::now().date_naive();

    let Ok((project, _)) = create_project(api, &form, today, &reporter).await else {
        return Ok(false);
    };

    if add_milestones {
        println!();
        return run_milestones_new(api, project.id, None, false).await;
    }

    println!(
        "{}",
        format!("Add milestones with: grants milestones new {}", project.id).muted()
    );
    Ok(true)
}

fn prompt_project_form() -> Result<ProjectForm> {
    println!("{}", "Create New Project".emphasis());
    println!("{}", "All fields marked with * are required.".muted());
    println!();

    Ok(ProjectForm {
        title: prompt::text("Project Title", "", true)?,
        creator_username: prompt::text("Creator Username (Discord)", "", true)?,
        grantee_email: prompt::text("Grantee Email", "", true)?,
        category: prompt::select_optional("Category", &Category::ALL)?,
        status: prompt::select_optional("Status", &ProjectStatus::ALL)?,
        program_type: prompt::select_optional("Program Type", &ProgramType::ALL)?,
        funding_requested: prompt::text("Budget (USD)", "", true)?,
        background: prompt::text("Project Background", "", true)?,
        mission_expertise: prompt::text("Mission & Expertise", "", true)?,
        campaign_goals: prompt::text("Campaign Goals", "", true)?,
        creator_stat_1_name: prompt::text("Creator Stat 1 Name", "", false)?,
        creator_stat_1_number: prompt::text("Creator Stat 1 Number", "", false)?,
        creator_stat_2_name: prompt::text("Creator Stat 2 Name", "", false)?,
        creator_stat_2_number: prompt::text("Creator Stat 2 Number", "", false)?,
        github_repo: prompt::text("GitHub Repository", "", false)?,
        youtube_link: prompt::text("YouTube", "", false)?,
        tiktok_link: prompt::text("TikTok", "", false)?,
        twitter_link: prompt::text("Twitter/X", "", false)?,
        twitch_link: prompt::text("Twitch", "", false)?,
        website_links: prompt::text("Website Links", "", false)?,
    })
}

//! Milestones command - add a batch of milestones to a project

use crate::cli::notify::{CliNavigator, CliNotifier};
use crate::cli::progress::CliProgress;
use crate::cli::prompt;
use crate::cli::style::{Stylize, bullet};
use anstream::println;
use grants_admin::api::GrantsApi;
use grants_admin::drafts::{DraftField, MilestoneDraft, validate};
use grants_admin::error::Result;
use grants_admin::report::OutcomeReporter;
use grants_admin::submit::{MilestoneForm, SubmitOutcome, build_requests};
use grants_admin::types::ProjectId;
use std::path::Path;

/// Read drafts from a JSON array of `{title, description, deadline, budget}`
pub fn read_drafts(path: &Path) -> Result<Vec<MilestoneDraft>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Copy drafts into the form through its editing operations
fn fill_form(form: &MilestoneForm, drafts: &[MilestoneDraft]) {
    for (index, draft) in drafts.iter().enumerate() {
        if index > 0 {
            form.add_draft();
        }
        for field in DraftField::ALL {
            form.update_draft(index, field, draft.get(field));
        }
    }
}

/// Run the milestones command
///
/// Returns whether the batch was created and the user moved on.
pub async fn run_milestones_new(
    api: &dyn GrantsApi,
    project_id: ProjectId,
    from_file: Option<&Path>,
    dry_run: bool,
) -> Result<bool> {
    let notifier = CliNotifier;
    let navigator = CliNavigator;
    let reporter = OutcomeReporter::new(&notifier, &navigator);

    let Ok(form) = MilestoneForm::load(api, project_id, &reporter).await else {
        return Ok(false);
    };

    println!(
        "{} {}",
        form.project().name.emphasis(),
        "- adding milestones to this project".muted()
    );
    println!();

    if let Some(path) = from_file {
        fill_form(&form, &read_drafts(path)?);
    } else if !edit_interactively(&form)? {
        form.close();
        return Ok(false);
    }

    if dry_run {
        return Ok(print_dry_run(&form));
    }

    let progress = CliProgress::new();
    loop {
        let outcome = form.submit(api, &reporter, &progress).await?;
        match outcome {
            SubmitOutcome::Succeeded(_) => return Ok(true),
            SubmitOutcome::Discarded(_) => return Ok(false),
            SubmitOutcome::PartiallyFailed(_)
            | SubmitOutcome::Failed(_)
            | SubmitOutcome::Rejected(_) => {
                // File input cannot be corrected in place, stop here
                if from_file.is_some() || !edit_interactively(&form)? {
                    form.close();
                    return Ok(false);
                }
            }
        }
    }
}

fn print_dry_run(form: &MilestoneForm) -> bool {
    let drafts = form.drafts();
    let valid = validate(drafts.as_slice());

    if valid.is_empty() {
        println!("{}", "No complete milestones - nothing would be created".warn().for_stdout());
        return false;
    }

    println!("Dry run - no changes will be made");
    println!("Would create {} of {} milestone(s):", valid.len(), drafts.len());
    for request in build_requests(form.project().id, &valid) {
        println!(
            "  {} {} due {} budget {}",
            bullet(),
            request.title.accent(),
            request.due_date,
            request.budget
        );
    }
    true
}

fn print_drafts(form: &MilestoneForm) {
    for (index, draft) in form.drafts().iter().enumerate() {
        let title = if draft.title.trim().is_empty() {
            "(untitled)".to_string()
        } else {
            draft.title.clone()
        };
        let status = if draft.is_complete() {
            "complete".success().to_string()
        } else {
            "incomplete".warn().for_stdout().to_string()
        };
        println!(
            "  {} Milestone {}: {} {} {}",
            bullet(),
            index + 1,
            title.emphasis(),
            format!("[{} / {}]", display_or_dash(&draft.deadline), display_or_dash(&draft.budget))
                .muted(),
            status
        );
    }
    println!();
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Menu loop over the draft list
///
/// Returns `true` when the user chose to submit, `false` on cancel.
fn edit_interactively(form: &MilestoneForm) -> Result<bool> {
    loop {
        print_drafts(form);

        let len = form.drafts().len();
        let mut items = vec![
            "Edit a milestone".to_string(),
            "Add another milestone".to_string(),
        ];
        if len > 1 {
            items.push("Remove a milestone".to_string());
        }
        items.push(form.submit_label());
        items.push("Cancel".to_string());

        let choice = prompt::select("What next?", &items, 0)?;
        match items[choice].as_str() {
            "Edit a milestone" => {
                let index = pick_milestone(form, "Edit which milestone?")?;
                edit_draft(form, index)?;
            }
            "Add another milestone" => {
                form.add_draft();
                edit_draft(form, len)?;
            }
            "Remove a milestone" => {
                let index = pick_milestone(form, "Remove which milestone?")?;
                form.remove_draft(index);
            }
            "Cancel" => return Ok(false),
            _ => return Ok(true),
        }
    }
}

fn pick_milestone(form: &MilestoneForm, prompt_text: &str) -> Result<usize> {
    let items: Vec<String> = form
        .drafts()
        .iter()
        .enumerate()
        .map(|(i, d)| format!("Milestone {}: {}", i + 1, d.title))
        .collect();
    prompt::select(prompt_text, &items, 0)
}

fn edit_draft(form: &MilestoneForm, index: usize) -> Result<()> {
    let Some(current) = form.drafts().get(index).cloned() else {
        return Ok(());
    };

    println!("{}", format!("Milestone {}", index + 1).emphasis());
    for field in DraftField::ALL {
        let value = prompt::text(field.label(), current.get(field), false)?;
        form.update_draft(index, field, value);
    }
    Ok(())
}

//! grants - admin CLI for grant projects
//!
//! Creates projects and submits batches of milestones against the admin API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use grants_admin::api::HttpGrantsApi;
use grants_admin::config::Config;
use grants_admin::types::ProjectId;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;

#[derive(Parser)]
#[command(name = "grants")]
#[command(about = "Admin CLI for grant projects and their milestones")]
#[command(version)]
struct Cli {
    /// Base URL of the admin API (overrides GRANTS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Bearer token for the admin API (overrides GRANTS_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project management
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Milestone management
    Milestones {
        #[command(subcommand)]
        action: MilestonesAction,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// Show a project
    Show {
        /// Project id
        id: ProjectId,
    },
    /// Create a project
    Create {
        /// Read the project form from a JSON file instead of prompting
        #[arg(long)]
        from_file: Option<PathBuf>,

        /// Continue into the milestone form once the project is created
        #[arg(long)]
        add_milestones: bool,
    },
}

#[derive(Subcommand)]
enum MilestonesAction {
    /// Add a batch of milestones to a project
    New {
        /// Project id
        project_id: ProjectId,

        /// Read drafts from a JSON array instead of prompting
        #[arg(long)]
        from_file: Option<PathBuf>,

        /// Dry run - show what would be created without making changes
        #[arg(long)]
        dry_run: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "grants_admin=debug,grants=debug"
    } else {
        "grants_admin=info,grants=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env()?.with_overrides(cli.api_url.as_deref(), cli.api_key.as_deref())?;
    let api = HttpGrantsApi::new(config)?;

    let done = match cli.command {
        Commands::Project { action } => match action {
            ProjectAction::Show { id } => cli::run_project_show(&api, id).await?,
            ProjectAction::Create {
                from_file,
                add_milestones,
            } => cli::run_project_create(&api, from_file.as_deref(), add_milestones).await?,
        },
        Commands::Milestones { action } => match action {
            MilestonesAction::New {
                project_id,
                from_file,
                dry_run,
            } => cli::run_milestones_new(&api, project_id, from_file.as_deref(), dry_run).await?,
        },
    };

    Ok(if done {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

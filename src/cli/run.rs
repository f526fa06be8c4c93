use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::{ConfigError, GitHubError};
use crate::github::{create_token_client, GitHubApi, GitHubClient};
use crate::runner::{self, RunOutcome, SkipReason};
use std::path::Path;
use tracing::{info, warn};

pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    let (owner, repo) = args
        .repo
        .split_once('/')
        .ok_or_else(|| anyhow::anyhow!("--repo must be in owner/name form, got '{}'", args.repo))?;

    let octocrab = create_token_client(&args.token)?;
    let client = GitHubClient::new(
        octocrab,
        owner.to_string(),
        repo.to_string(),
        args.pr,
        args.config.clone(),
        args.git_ref.clone(),
        args.org.clone(),
    );

    // Configuration-missing is a clean exit, not a failure
    let config = if args.local {
        info!("Loading configuration file from {}", args.config);
        match Config::load(Path::new(&args.config)) {
            Ok(config) => config,
            Err(ConfigError::ReadFile { path, .. }) | Err(ConfigError::EmptyFile(path)) => {
                warn!(
                    "No configuration file is found at '{}'; terminating the process",
                    path.display()
                );
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        info!("Fetching configuration file from the repository");
        match client.fetch_config_file().await {
            Ok(content) => Config::parse(&content)?,
            Err(GitHubError::NotFound(path)) => {
                warn!(
                    "No configuration file is found at '{}'; terminating the process",
                    path
                );
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    };

    match runner::run(&client, &config, args.dry_run).await? {
        RunOutcome::Skipped(SkipReason::Gated) => {
            info!("Review request suppressed by the ignoring rules");
        }
        RunOutcome::Skipped(SkipReason::NoReviewers) => {
            info!("No reviewers matched for this pull request");
        }
        RunOutcome::DryRun { reviewers } => {
            println!("Would request review from:");
            for reviewer in &reviewers {
                println!("  - {}", reviewer);
            }
        }
        RunOutcome::Assigned(report) => {
            info!(
                "Requested {} reviewers and {} teams, mentioned {} non-collaborators ({} skipped as already notified)",
                report.requested.len(),
                report.requested_teams.len(),
                report.mentioned.len(),
                report.skipped.len()
            );
        }
    }

    Ok(())
}

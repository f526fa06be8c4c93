//! End-to-end assignment pipeline for one pull request.

use crate::assign::{assign_reviewers, AssignmentReport};
use crate::config::Config;
use crate::error::AutorevError;
use crate::github::GitHubApi;
use crate::resolver::{
    fetch_default_reviewers, fetch_other_group_members, identify_reviewers_by_author,
    identify_reviewers_by_changed_files, randomly_pick_reviewers, should_request_review,
};
use std::collections::BTreeSet;
use tracing::info;

#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing was requested; the reason says why
    Skipped(SkipReason),
    /// Dry run: the reviewers that would have been requested
    DryRun { reviewers: BTreeSet<String> },
    /// Reviews were requested and/or non-collaborators mentioned
    Assigned(AssignmentReport),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Draft or ignored-keyword rule matched
    Gated,
    /// No resolver produced any reviewer
    NoReviewers,
}

/// Resolve reviewers for the pull request and hand them to the eligibility
/// filter. Gate policy runs first; when it rejects, nothing else runs. The
/// three resolvers' outputs are unioned (author always excluded), the
/// defaults fill an empty union, and the result is optionally downsampled.
pub async fn run(
    api: &dyn GitHubApi,
    config: &Config,
    dry_run: bool,
) -> Result<RunOutcome, AutorevError> {
    let pull_request = api.fetch_pull_request().await?;

    if !should_request_review(&pull_request.title, pull_request.is_draft, config) {
        info!("Matched an ignoring rule; skipping the run");
        return Ok(RunOutcome::Skipped(SkipReason::Gated));
    }

    info!("Fetching changed files in the pull request");
    let changed_files = api.fetch_changed_files().await?;

    let author = pull_request.author;
    let excludes = [author.clone()];

    info!("Identifying reviewers based on the changed files");
    let mut reviewers = identify_reviewers_by_changed_files(config, &changed_files, &excludes)?;

    info!("Identifying reviewers based on the author");
    reviewers.extend(identify_reviewers_by_author(api, config, &author).await?);

    reviewers.extend(fetch_other_group_members(&author, config));

    if reviewers.is_empty() {
        info!("No reviewers matched; falling back to the default reviewers");
        reviewers = fetch_default_reviewers(config, &excludes);
    }

    let reviewers = randomly_pick_reviewers(&config.options, reviewers);

    if reviewers.is_empty() {
        info!("Matched no reviewers; nothing to request");
        return Ok(RunOutcome::Skipped(SkipReason::NoReviewers));
    }

    if dry_run {
        info!("Dry run; would request review from {:?}", reviewers);
        return Ok(RunOutcome::DryRun { reviewers });
    }

    let report = assign_reviewers(api, &author, &reviewers).await?;
    Ok(RunOutcome::Assigned(report))
}

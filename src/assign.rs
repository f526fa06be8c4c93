//! Non-collaborator eligibility filtering and the final review request.
//!
//! GitHub rejects review requests naming non-collaborators, so the candidate
//! set is partitioned: collaborators (and teams, which have no collaborator
//! concept) go into one request-reviewers call, everyone else into a single
//! aggregated mention comment. Prior requests, reviews, review comments, and
//! earlier mention comments all suppress a candidate so repeated runs on new
//! commits never notify anyone twice.

use crate::error::GitHubError;
use crate::github::{GitHubApi, TEAM_PREFIX};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Marker prefix of the aggregated mention comment. Used both to compose new
/// comments and to recognize comments posted by earlier runs.
pub const MENTION_PREFIX: &str = "Requesting reviews from non-collaborators: ";

/// What one assignment pass actually did
#[derive(Debug, Default)]
pub struct AssignmentReport {
    pub requested: Vec<String>,
    pub requested_teams: Vec<String>,
    pub mentioned: Vec<String>,
    pub skipped: Vec<String>,
}

/// Partition candidates and issue the request/mention calls.
///
/// Network calls for empty partitions are skipped entirely.
pub async fn assign_reviewers(
    api: &dyn GitHubApi,
    author: &str,
    candidates: &BTreeSet<String>,
) -> Result<AssignmentReport, GitHubError> {
    let (requested, reviews, review_comments) = futures::try_join!(
        api.list_requested_reviewers(),
        api.list_reviews(),
        api.list_review_comments(),
    )?;

    // Everyone already notified on this pull request, one way or another
    let mut already_notified: BTreeSet<String> = BTreeSet::new();
    already_notified.extend(requested.users);
    for review in &reviews {
        already_notified.insert(review.author.clone());
        already_notified.extend(mentioned_handles(&review.body));
    }
    for comment in &review_comments {
        already_notified.insert(comment.author.clone());
    }
    let already_requested_teams: BTreeSet<String> = requested.teams.into_iter().collect();

    let mut report = AssignmentReport::default();
    let mut teams = Vec::new();
    let mut to_check = Vec::new();

    for candidate in candidates {
        if let Some(slug) = candidate.strip_prefix(TEAM_PREFIX) {
            if already_requested_teams.contains(slug) {
                report.skipped.push(candidate.clone());
            } else {
                teams.push(slug.to_string());
            }
        } else if candidate.as_str() == author || already_notified.contains(candidate) {
            report.skipped.push(candidate.clone());
        } else {
            to_check.push(candidate.clone());
        }
    }

    if !report.skipped.is_empty() {
        debug!("Skipping already notified candidates: {:?}", report.skipped);
    }

    // Teams bypass the collaborator check; individuals are checked
    // concurrently.
    let statuses = futures::future::try_join_all(
        to_check.iter().map(|login| api.is_collaborator(login)),
    )
    .await?;

    let mut individuals = Vec::new();
    let mut outsiders = Vec::new();
    for (login, is_collaborator) in to_check.into_iter().zip(statuses) {
        if is_collaborator {
            individuals.push(login);
        } else {
            outsiders.push(login);
        }
    }

    if !individuals.is_empty() || !teams.is_empty() {
        info!(
            "Requesting review from {:?} (teams: {:?})",
            individuals, teams
        );
        api.request_reviewers(&individuals, &teams).await?;
        report.requested = individuals;
        report.requested_teams = teams;
    }

    if !outsiders.is_empty() {
        let mentions: Vec<String> = outsiders.iter().map(|login| format!("@{}", login)).collect();
        let body = format!("{}{}", MENTION_PREFIX, mentions.join(" "));
        info!("Mentioning non-collaborators {:?} in a comment", outsiders);
        api.post_comment_review(&body).await?;
        report.mentioned = outsiders;
    }

    Ok(report)
}

/// Handles mentioned by one of our own earlier comments, if this body is one
fn mentioned_handles(body: &str) -> Vec<String> {
    let Some(rest) = body.strip_prefix(MENTION_PREFIX) else {
        return Vec::new();
    };
    rest.split_whitespace()
        .map(|handle| handle.trim_start_matches('@').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::MockApi;
    use crate::github::{RequestedReviewers, ReviewCommentInfo, ReviewInfo};

    fn candidates(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn collaborators(api: &mut MockApi, items: &[&str]) {
        api.collaborators = items.iter().map(|s| s.to_string()).collect();
    }

    #[tokio::test]
    async fn test_collaborators_are_requested() {
        let mut api = MockApi::default();
        collaborators(&mut api, &["luigi", "peach"]);

        let report = assign_reviewers(&api, "mario", &candidates(&["luigi", "peach"]))
            .await
            .unwrap();

        assert_eq!(report.requested, ["luigi", "peach"]);
        assert!(report.mentioned.is_empty());
        let requests = api.review_requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, ["luigi", "peach"]);
        assert!(requests[0].1.is_empty());
        assert!(api.posted_comments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_collaborators_are_mentioned_not_requested() {
        let mut api = MockApi::default();
        collaborators(&mut api, &["luigi"]);

        let report = assign_reviewers(&api, "mario", &candidates(&["luigi", "wario"]))
            .await
            .unwrap();

        assert_eq!(report.requested, ["luigi"]);
        assert_eq!(report.mentioned, ["wario"]);
        let comments = api.posted_comments.lock().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0], format!("{}@wario", MENTION_PREFIX));
    }

    #[tokio::test]
    async fn test_only_non_collaborators_skips_request_call() {
        let api = MockApi::default();

        let report = assign_reviewers(&api, "mario", &candidates(&["wario"]))
            .await
            .unwrap();

        assert!(report.requested.is_empty());
        assert_eq!(report.mentioned, ["wario"]);
        assert!(api.review_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_teams_bypass_collaborator_check() {
        let api = MockApi::default();

        let report = assign_reviewers(&api, "mario", &candidates(&["team:core"]))
            .await
            .unwrap();

        assert_eq!(report.requested_teams, ["core"]);
        let requests = api.review_requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1, ["core"]);
    }

    #[tokio::test]
    async fn test_author_is_never_notified() {
        let mut api = MockApi::default();
        collaborators(&mut api, &["mario"]);

        let report = assign_reviewers(&api, "mario", &candidates(&["mario"]))
            .await
            .unwrap();

        assert_eq!(report.skipped, ["mario"]);
        assert!(api.review_requests.lock().unwrap().is_empty());
        assert!(api.posted_comments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_already_requested_reviewer_is_skipped() {
        let mut api = MockApi::default();
        collaborators(&mut api, &["luigi"]);
        api.requested = RequestedReviewers {
            users: vec!["luigi".to_string()],
            teams: vec!["core".to_string()],
        };

        let report = assign_reviewers(&api, "mario", &candidates(&["luigi", "team:core"]))
            .await
            .unwrap();

        assert!(report.requested.is_empty());
        assert!(report.requested_teams.is_empty());
        assert_eq!(report.skipped.len(), 2);
        assert!(api.review_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_existing_review_suppresses_candidate() {
        let mut api = MockApi::default();
        collaborators(&mut api, &["luigi"]);
        api.reviews = vec![ReviewInfo {
            author: "luigi".to_string(),
            body: "LGTM".to_string(),
        }];

        let report = assign_reviewers(&api, "mario", &candidates(&["luigi"]))
            .await
            .unwrap();

        assert!(report.requested.is_empty());
        assert!(api.review_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_existing_review_comment_suppresses_candidate() {
        let mut api = MockApi::default();
        collaborators(&mut api, &["luigi"]);
        api.review_comments = vec![ReviewCommentInfo {
            author: "luigi".to_string(),
        }];

        let report = assign_reviewers(&api, "mario", &candidates(&["luigi"]))
            .await
            .unwrap();

        assert!(report.requested.is_empty());
        assert!(report.mentioned.is_empty());
        assert!(api.review_requests.lock().unwrap().is_empty());
        assert!(api.posted_comments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prior_mention_comment_suppresses_outsider() {
        let mut api = MockApi::default();
        // Earlier run already mentioned wario via our marker comment
        api.reviews = vec![ReviewInfo {
            author: "autorev-bot".to_string(),
            body: format!("{}@wario @waluigi", MENTION_PREFIX),
        }];

        let report = assign_reviewers(&api, "mario", &candidates(&["wario", "toadette"]))
            .await
            .unwrap();

        assert_eq!(report.mentioned, ["toadette"]);
        let comments = api.posted_comments.lock().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0], format!("{}@toadette", MENTION_PREFIX));
    }

    #[tokio::test]
    async fn test_nothing_to_do_issues_no_calls() {
        let api = MockApi::default();

        let report = assign_reviewers(&api, "mario", &BTreeSet::new()).await.unwrap();

        assert!(report.requested.is_empty());
        assert!(report.mentioned.is_empty());
        assert!(api.review_requests.lock().unwrap().is_empty());
        assert!(api.posted_comments.lock().unwrap().is_empty());
    }

    #[test]
    fn test_mentioned_handles_parses_marker_comment() {
        let body = format!("{}@wario @waluigi", MENTION_PREFIX);
        assert_eq!(mentioned_handles(&body), ["wario", "waluigi"]);
        assert!(mentioned_handles("LGTM").is_empty());
    }
}

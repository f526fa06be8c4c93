mod client;
mod models;

pub use client::{create_token_client, GitHubClient};

use crate::error::GitHubError;
use async_trait::async_trait;

/// Reviewer identities with this prefix denote a GitHub team slug rather than
/// an individual handle.
pub const TEAM_PREFIX: &str = "team:";

/// Snapshot of the pull request under resolution
#[derive(Debug, Clone)]
pub struct PullRequestInfo {
    pub author: String,
    pub title: String,
    pub is_draft: bool,
}

/// Reviewers already requested on the pull request
#[derive(Debug, Clone, Default)]
pub struct RequestedReviewers {
    pub users: Vec<String>,
    pub teams: Vec<String>,
}

/// An existing review on the pull request
#[derive(Debug, Clone)]
pub struct ReviewInfo {
    pub author: String,
    pub body: String,
}

/// An existing review comment on the pull request
#[derive(Debug, Clone)]
pub struct ReviewCommentInfo {
    pub author: String,
}

/// GitHub operations for one pull request.
///
/// The resolution engine only ever talks to this trait; the octocrab-backed
/// [`GitHubClient`] is the production implementation and tests substitute a
/// canned stub. Paginated endpoints are exposed as fully materialized
/// collections. No retries or timeouts happen at this layer.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Raw YAML text of the configuration file. Fails with
    /// [`GitHubError::NotFound`] when the file does not exist, which callers
    /// treat as "skip the run".
    async fn fetch_config_file(&self) -> Result<String, GitHubError>;

    async fn fetch_pull_request(&self) -> Result<PullRequestInfo, GitHubError>;

    async fn fetch_changed_files(&self) -> Result<Vec<String>, GitHubError>;

    async fn fetch_team_members(&self, slug: &str) -> Result<Vec<String>, GitHubError>;

    /// Collaborator status for a handle; a 404 from GitHub means "no" and is
    /// converted to `false`, never an error.
    async fn is_collaborator(&self, login: &str) -> Result<bool, GitHubError>;

    async fn list_requested_reviewers(&self) -> Result<RequestedReviewers, GitHubError>;

    async fn list_reviews(&self) -> Result<Vec<ReviewInfo>, GitHubError>;

    async fn list_review_comments(&self) -> Result<Vec<ReviewCommentInfo>, GitHubError>;

    async fn request_reviewers(
        &self,
        reviewers: &[String],
        team_reviewers: &[String],
    ) -> Result<(), GitHubError>;

    /// Post a plain COMMENT-type review with the given body
    async fn post_comment_review(&self, body: &str) -> Result<(), GitHubError>;
}

use super::models::{
    Account, ChangedFile, ContentFile, PullDetails, RequestedReviewersResponse,
    ReviewCommentResponse, ReviewResponse,
};
use super::{GitHubApi, PullRequestInfo, RequestedReviewers, ReviewCommentInfo, ReviewInfo};
use crate::error::GitHubError;
use async_trait::async_trait;
use base64::prelude::*;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use tracing::debug;

const PER_PAGE: usize = 100;

/// Build an octocrab client authenticated with a personal access token
pub fn create_token_client(token: &str) -> Result<Octocrab, GitHubError> {
    let client = Octocrab::builder()
        .personal_token(token.to_string())
        .build()?;
    Ok(client)
}

/// Octocrab-backed [`GitHubApi`] implementation, scoped to one pull request
pub struct GitHubClient {
    client: Octocrab,
    owner: String,
    repo: String,
    pr_number: u64,
    config_path: String,
    git_ref: Option<String>,
    org: Option<String>,
}

impl GitHubClient {
    pub fn new(
        client: Octocrab,
        owner: String,
        repo: String,
        pr_number: u64,
        config_path: String,
        git_ref: Option<String>,
        org: Option<String>,
    ) -> Self {
        Self {
            client,
            owner,
            repo,
            pr_number,
            config_path,
            git_ref,
            org,
        }
    }

    fn pr_route(&self, tail: &str) -> String {
        format!(
            "/repos/{}/{}/pulls/{}{}",
            self.owner, self.repo, self.pr_number, tail
        )
    }

    /// Drain a paginated list endpoint into one collection
    async fn get_all_pages<T: DeserializeOwned>(&self, route: &str) -> Result<Vec<T>, GitHubError> {
        let mut collected = Vec::new();
        let mut page = 1u32;

        loop {
            let url = format!("{}?per_page={}&page={}", route, PER_PAGE, page);
            let batch: Vec<T> = self.client.get(&url, None::<&()>).await?;
            let batch_len = batch.len();
            collected.extend(batch);

            if batch_len < PER_PAGE {
                return Ok(collected);
            }
            page += 1;
        }
    }
}

fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. }
        if source.status_code == http::StatusCode::NOT_FOUND)
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn fetch_config_file(&self) -> Result<String, GitHubError> {
        let mut route = format!(
            "/repos/{}/{}/contents/{}",
            self.owner, self.repo, self.config_path
        );
        if let Some(git_ref) = &self.git_ref {
            route.push_str("?ref=");
            route.push_str(git_ref);
        }

        let file: ContentFile = match self.client.get(&route, None::<&()>).await {
            Ok(file) => file,
            Err(e) if is_not_found(&e) => {
                return Err(GitHubError::NotFound(self.config_path.clone()))
            }
            Err(e) => return Err(e.into()),
        };

        if file.encoding != "base64" {
            return Ok(file.content);
        }

        // The contents API returns base64 with embedded newlines
        let raw: String = file.content.split_whitespace().collect();
        let bytes = BASE64_STANDARD
            .decode(raw)
            .map_err(|e| GitHubError::Decode(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| GitHubError::Decode(e.to_string()))
    }

    async fn fetch_pull_request(&self) -> Result<PullRequestInfo, GitHubError> {
        let pull: PullDetails = self.client.get(self.pr_route(""), None::<&()>).await?;
        Ok(PullRequestInfo {
            author: pull.user.map(|user| user.login).unwrap_or_default(),
            title: pull.title.unwrap_or_default(),
            is_draft: pull.draft.unwrap_or(false),
        })
    }

    async fn fetch_changed_files(&self) -> Result<Vec<String>, GitHubError> {
        let files: Vec<ChangedFile> = self.get_all_pages(&self.pr_route("/files")).await?;
        debug!("Fetched {} changed files", files.len());
        Ok(files.into_iter().map(|file| file.filename).collect())
    }

    async fn fetch_team_members(&self, slug: &str) -> Result<Vec<String>, GitHubError> {
        let org = self.org.as_deref().unwrap_or(&self.owner);
        let route = format!("/orgs/{}/teams/{}/members", org, slug);
        let members: Vec<Account> = self.get_all_pages(&route).await?;
        Ok(members.into_iter().map(|member| member.login).collect())
    }

    async fn is_collaborator(&self, login: &str) -> Result<bool, GitHubError> {
        let route = format!("/repos/{}/{}/collaborators/{}", self.owner, self.repo, login);
        let response = self.client._get(route).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(true);
        }
        if status == http::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        match octocrab::map_github_error(response).await {
            Err(e) => Err(e.into()),
            Ok(_) => Ok(false),
        }
    }

    async fn list_requested_reviewers(&self) -> Result<RequestedReviewers, GitHubError> {
        let response: RequestedReviewersResponse = self
            .client
            .get(self.pr_route("/requested_reviewers"), None::<&()>)
            .await?;
        Ok(RequestedReviewers {
            users: response.users.into_iter().map(|user| user.login).collect(),
            teams: response.teams.into_iter().map(|team| team.slug).collect(),
        })
    }

    async fn list_reviews(&self) -> Result<Vec<ReviewInfo>, GitHubError> {
        let reviews: Vec<ReviewResponse> = self.get_all_pages(&self.pr_route("/reviews")).await?;
        Ok(reviews
            .into_iter()
            .map(|review| ReviewInfo {
                author: review.user.map(|user| user.login).unwrap_or_default(),
                body: review.body.unwrap_or_default(),
            })
            .collect())
    }

    async fn list_review_comments(&self) -> Result<Vec<ReviewCommentInfo>, GitHubError> {
        let comments: Vec<ReviewCommentResponse> =
            self.get_all_pages(&self.pr_route("/comments")).await?;
        Ok(comments
            .into_iter()
            .filter_map(|comment| comment.user)
            .map(|user| ReviewCommentInfo { author: user.login })
            .collect())
    }

    async fn request_reviewers(
        &self,
        reviewers: &[String],
        team_reviewers: &[String],
    ) -> Result<(), GitHubError> {
        let body = serde_json::json!({
            "reviewers": reviewers,
            "team_reviewers": team_reviewers,
        });
        let _: serde_json::Value = self
            .client
            .post(self.pr_route("/requested_reviewers"), Some(&body))
            .await?;
        Ok(())
    }

    async fn post_comment_review(&self, body: &str) -> Result<(), GitHubError> {
        let payload = serde_json::json!({
            "body": body,
            "event": "COMMENT",
        });
        let _: serde_json::Value = self
            .client
            .post(self.pr_route("/reviews"), Some(&payload))
            .await?;
        Ok(())
    }
}

//! Wire models for the GitHub REST endpoints the client touches.
//!
//! Only the fields we read are declared; everything else in the responses is
//! ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Account {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Team {
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChangedFile {
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentFile {
    pub content: String,
    #[serde(default)]
    pub encoding: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PullDetails {
    pub title: Option<String>,
    pub draft: Option<bool>,
    pub user: Option<Account>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RequestedReviewersResponse {
    #[serde(default)]
    pub users: Vec<Account>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewResponse {
    pub user: Option<Account>,
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewCommentResponse {
    pub user: Option<Account>,
}

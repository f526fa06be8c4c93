use crate::config::Config;
use crate::error::GitHubError;
use crate::github::{GitHubApi, TEAM_PREFIX};
use crate::resolver::expand_groups;
use std::collections::HashMap;

/// Map the pull request author to candidate reviewers via
/// `reviewers.per_author`.
///
/// A selector matches the author when it equals the author literally, when it
/// is a `team:<slug>` reference whose membership contains the author, or when
/// group-expanding it yields a list containing the author. Team membership is
/// the one lookup that needs the network; lookups for distinct teams run
/// concurrently and their failures propagate unchanged. The author is removed
/// from the result, but duplicates are kept for the overall union to
/// deduplicate.
pub async fn identify_reviewers_by_author(
    api: &dyn GitHubApi,
    config: &Config,
    author: &str,
) -> Result<Vec<String>, GitHubError> {
    let per_author = &config.reviewers.per_author;
    if per_author.is_empty() {
        return Ok(Vec::new());
    }

    // Resolve every team selector's membership up front
    let team_slugs: Vec<&str> = per_author
        .keys()
        .filter_map(|selector| selector.strip_prefix(TEAM_PREFIX))
        .collect();
    let memberships = futures::future::try_join_all(
        team_slugs.iter().map(|slug| api.fetch_team_members(slug)),
    )
    .await?;
    let team_members: HashMap<&str, Vec<String>> =
        team_slugs.into_iter().zip(memberships).collect();

    let mut reviewers = Vec::new();
    for (selector, listed) in per_author {
        let matches = if let Some(slug) = selector.strip_prefix(TEAM_PREFIX) {
            team_members
                .get(slug)
                .is_some_and(|members| members.iter().any(|member| member == author))
        } else {
            selector == author
                || expand_groups(std::slice::from_ref(selector), config)
                    .iter()
                    .any(|member| member == author)
        };

        if matches {
            reviewers.extend(listed.iter().cloned());
        }
    }

    Ok(expand_groups(&reviewers, config)
        .into_iter()
        .filter(|reviewer| reviewer != author)
        .collect())
}

use crate::config::Config;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Replace group names with their member lists, one level deep.
///
/// An identity is a group iff it is a key of `reviewers.groups`; anything
/// else passes through unchanged. Members are assumed to be individuals, so
/// no recursive expansion happens. Duplicates are left in; callers
/// deduplicate downstream.
pub fn expand_groups(reviewers: &[String], config: &Config) -> Vec<String> {
    let groups = &config.reviewers.groups;

    let mut expanded = Vec::with_capacity(reviewers.len());
    for reviewer in reviewers {
        match groups.get(reviewer) {
            Some(members) => expanded.extend(members.iter().cloned()),
            None => expanded.push(reviewer.clone()),
        }
    }
    expanded
}

/// Collect the author's group mates as reviewers.
///
/// Disabled unless `options.enable_group_assignment` is set. When enabled,
/// every group containing the author contributes all of its members, minus
/// the author.
pub fn fetch_other_group_members(author: &str, config: &Config) -> BTreeSet<String> {
    if !config.options.enable_group_assignment {
        debug!("Group assignment feature is disabled");
        return BTreeSet::new();
    }

    info!("Group assignment feature is enabled");

    config
        .reviewers
        .groups
        .values()
        .filter(|members| members.iter().any(|member| member == author))
        .flatten()
        .filter(|member| member.as_str() != author)
        .cloned()
        .collect()
}

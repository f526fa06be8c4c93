use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Reviewer assignment configuration, normally stored in the repository as
/// `.github/reviewers.yml`. Unrecognized top-level keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub options: Options,

    /// Glob pattern -> reviewers owning files that match it. Declared order
    /// matters only under `last_files_match_only`.
    #[serde(default)]
    pub files: Option<IndexMap<String, Vec<String>>>,

    #[serde(default)]
    pub reviewers: Reviewers,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Options {
    /// Skip review requests entirely while a pull request is a draft
    #[serde(default = "default_true")]
    pub ignore_draft: bool,

    /// Title substrings that suppress review requests (case-sensitive)
    #[serde(default = "default_ignored_keywords")]
    pub ignored_keywords: Vec<String>,

    /// Assign the author's group mates as reviewers
    #[serde(default)]
    pub enable_group_assignment: bool,

    /// Only the last matching `files` pattern wins (CODEOWNERS-style)
    #[serde(default)]
    pub last_files_match_only: bool,

    /// Randomly downsample the final reviewer set to this size
    #[serde(default)]
    pub number_of_reviewers: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ignore_draft: default_true(),
            ignored_keywords: default_ignored_keywords(),
            enable_group_assignment: false,
            last_files_match_only: false,
            number_of_reviewers: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct Reviewers {
    /// Named groups of individual handles. Group names share a namespace with
    /// individual handles: an identity is treated as a group iff it is a key
    /// here, so resolvers must check membership before treating an identity
    /// as an individual.
    #[serde(default)]
    pub groups: IndexMap<String, Vec<String>>,

    /// Fallback reviewers used when no other resolver matches
    #[serde(default)]
    pub defaults: Option<Vec<String>>,

    /// Author selector (handle, group name, or `team:<slug>`) -> reviewers
    #[serde(default)]
    pub per_author: IndexMap<String, Vec<String>>,
}

use crate::config::Config;
use crate::error::ConfigError;
use crate::resolver::expand_groups;
use globset::GlobBuilder;
use std::collections::BTreeSet;
use tracing::debug;

/// Map changed files to candidate reviewers via the `files` glob patterns.
///
/// Patterns are evaluated in declared order; a pattern contributes its
/// reviewer list when any changed file matches it. `*` stays within a path
/// segment and `**` crosses segments. Under `last_files_match_only` each new
/// matching pattern discards everything accumulated so far, so the last
/// matching pattern alone determines the result.
pub fn identify_reviewers_by_changed_files(
    config: &Config,
    changed_files: &[String],
    excludes: &[String],
) -> Result<BTreeSet<String>, ConfigError> {
    let Some(files) = &config.files else {
        debug!("A \"files\" key does not exist in config; returning no reviewers for changed files");
        return Ok(BTreeSet::new());
    };

    let mut matching_reviewers: Vec<String> = Vec::new();

    for (pattern, reviewers) in files {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| ConfigError::GlobPattern {
                pattern: pattern.clone(),
                source: e,
            })?
            .compile_matcher();

        if changed_files.iter().any(|file| matcher.is_match(file)) {
            if config.options.last_files_match_only {
                matching_reviewers.clear();
            }
            matching_reviewers.extend(reviewers.iter().cloned());
        }
    }

    let individuals = expand_groups(&matching_reviewers, config);

    Ok(individuals
        .into_iter()
        .filter(|reviewer| !excludes.contains(reviewer))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_files_key_yields_empty_set() {
        let config = Config::parse("reviewers:\n  groups:\n    backend: [alice]\n").unwrap();
        let reviewers =
            identify_reviewers_by_changed_files(&config, &strings(&["src/lib.rs"]), &[]).unwrap();
        assert!(reviewers.is_empty());
    }

    #[test]
    fn test_no_changed_files_yields_empty_set() {
        let config = Config::parse("files:\n  '**/*.rs': [alice]\n").unwrap();
        let reviewers = identify_reviewers_by_changed_files(&config, &[], &[]).unwrap();
        assert!(reviewers.is_empty());
    }

    #[test]
    fn test_group_expansion_and_author_exclusion() {
        let config = Config::parse(
            r#"
files:
  '**/*.js': [mario, group-a]
reviewers:
  groups:
    group-a: [luigi]
"#,
        )
        .unwrap();
        let reviewers = identify_reviewers_by_changed_files(
            &config,
            &strings(&["x.js"]),
            &strings(&["mario"]),
        )
        .unwrap();
        assert_eq!(reviewers, set(&["luigi"]));
    }

    #[test]
    fn test_star_does_not_cross_segments() {
        let config = Config::parse("files:\n  '*.js': [alice]\n").unwrap();
        let reviewers =
            identify_reviewers_by_changed_files(&config, &strings(&["nested/x.js"]), &[]).unwrap();
        assert!(reviewers.is_empty());

        let reviewers =
            identify_reviewers_by_changed_files(&config, &strings(&["x.js"]), &[]).unwrap();
        assert_eq!(reviewers, set(&["alice"]));
    }

    #[test]
    fn test_double_star_crosses_segments() {
        let config = Config::parse("files:\n  'src/**/*.rs': [alice]\n").unwrap();
        let reviewers = identify_reviewers_by_changed_files(
            &config,
            &strings(&["src/resolver/deep/inner.rs"]),
            &[],
        )
        .unwrap();
        assert_eq!(reviewers, set(&["alice"]));
    }

    #[test]
    fn test_all_matching_patterns_accumulate() {
        let config = Config::parse(
            r#"
files:
  '**/*.rs': [alice]
  'docs/**': [bob]
  '**/*.md': [carol]
"#,
        )
        .unwrap();
        let reviewers = identify_reviewers_by_changed_files(
            &config,
            &strings(&["src/lib.rs", "docs/guide.md"]),
            &[],
        )
        .unwrap();
        assert_eq!(reviewers, set(&["alice", "bob", "carol"]));
    }

    #[test]
    fn test_last_match_only_keeps_final_pattern() {
        let config = Config::parse(
            r#"
options:
  last_files_match_only: true
files:
  '**/*.rs': [alice]
  'src/**': [bob]
  'unrelated/**': [carol]
"#,
        )
        .unwrap();
        // "unrelated/**" never matches, so the last matching pattern is
        // "src/**" and alice is discarded.
        let reviewers =
            identify_reviewers_by_changed_files(&config, &strings(&["src/lib.rs"]), &[]).unwrap();
        assert_eq!(reviewers, set(&["bob"]));
    }

    #[test]
    fn test_last_match_only_with_mixed_group_list() {
        // The winning pattern's list mixes a group with an individual; both
        // survive expansion.
        let config = Config::parse(
            r#"
options:
  last_files_match_only: true
files:
  '**/*.rs': [alice]
  'src/**': [backend, dave]
reviewers:
  groups:
    backend: [bob, carol]
"#,
        )
        .unwrap();
        let reviewers =
            identify_reviewers_by_changed_files(&config, &strings(&["src/lib.rs"]), &[]).unwrap();
        assert_eq!(reviewers, set(&["bob", "carol", "dave"]));
    }

    #[test]
    fn test_deduplicates_across_patterns() {
        let config = Config::parse(
            r#"
files:
  '**/*.rs': [alice, backend]
  'src/**': [alice]
reviewers:
  groups:
    backend: [alice]
"#,
        )
        .unwrap();
        let reviewers =
            identify_reviewers_by_changed_files(&config, &strings(&["src/lib.rs"]), &[]).unwrap();
        assert_eq!(reviewers, set(&["alice"]));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let config = Config::parse("files:\n  'src/[': [alice]\n").unwrap();
        let err =
            identify_reviewers_by_changed_files(&config, &strings(&["src/lib.rs"]), &[]).unwrap_err();
        assert!(matches!(err, ConfigError::GlobPattern { .. }));
    }
}

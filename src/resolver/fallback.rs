use crate::config::{Config, Options};
use crate::resolver::expand_groups;
use rand::seq::IteratorRandom;
use std::collections::BTreeSet;

/// Fallback reviewer set from `reviewers.defaults`, consulted only when no
/// other resolver produced anything.
pub fn fetch_default_reviewers(config: &Config, excludes: &[String]) -> BTreeSet<String> {
    let Some(defaults) = &config.reviewers.defaults else {
        return BTreeSet::new();
    };

    expand_groups(defaults, config)
        .into_iter()
        .filter(|reviewer| !excludes.contains(reviewer))
        .collect()
}

/// Downsample the reviewer set to `options.number_of_reviewers` distinct
/// elements, chosen uniformly at random. Unset, or a count at least as large
/// as the set, returns the input unchanged. Deliberately unseeded.
pub fn randomly_pick_reviewers(options: &Options, reviewers: BTreeSet<String>) -> BTreeSet<String> {
    let Some(count) = options.number_of_reviewers else {
        return reviewers;
    };

    if count >= reviewers.len() {
        return reviewers;
    }

    let mut rng = rand::thread_rng();
    reviewers
        .into_iter()
        .choose_multiple(&mut rng, count)
        .into_iter()
        .collect()
}

use crate::config::Config;

/// Decide whether reviewer assignment should happen at all for a pull request.
///
/// Drafts are rejected first (when `ignore_draft` is on), before any keyword
/// evaluation. Otherwise the title is rejected if it contains any ignored
/// keyword as a literal, case-sensitive substring.
pub fn should_request_review(title: &str, is_draft: bool, config: &Config) -> bool {
    let options = &config.options;

    if options.ignore_draft && is_draft {
        return false;
    }

    !options
        .ignored_keywords
        .iter()
        .any(|keyword| title.contains(keyword.as_str()))
}

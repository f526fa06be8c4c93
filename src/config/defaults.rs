pub fn default_true() -> bool {
    true
}

pub fn default_ignored_keywords() -> Vec<String> {
    vec!["DO NOT REVIEW".to_string()]
}

mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use globset::GlobBuilder;
use std::path::Path;

impl Config {
    /// Load config from a local YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Err(ConfigError::EmptyFile(path.to_path_buf()));
        }

        Self::parse(&content)
    }

    /// Parse config from YAML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Lint the config: invalid glob patterns are errors, suspicious group
    /// definitions come back as warnings.
    pub fn lint(&self) -> Result<Vec<String>, ConfigError> {
        if let Some(files) = &self.files {
            for pattern in files.keys() {
                GlobBuilder::new(pattern)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| ConfigError::GlobPattern {
                        pattern: pattern.clone(),
                        source: e,
                    })?;
            }
        }

        let mut warnings = Vec::new();
        for (name, members) in &self.reviewers.groups {
            if members.is_empty() {
                warnings.push(format!("group '{}' has no members", name));
            }
            for member in members {
                // Expansion is single-level; a member that is itself a group
                // key stays unexpanded (or is an individual shadowed by a
                // group name).
                if self.reviewers.groups.contains_key(member) {
                    warnings.push(format!(
                        "group '{}' lists '{}', which is also a group name; nested groups are not expanded",
                        name, member
                    ));
                }
            }
        }

        Ok(warnings)
    }
}

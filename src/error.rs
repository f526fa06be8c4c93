use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutorevError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file '{0}' is empty")]
    EmptyFile(PathBuf),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to build glob pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    #[error("Failed to decode file content: {0}")]
    Decode(String),
}

pub mod run;
pub mod schema;
pub mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autorev")]
#[command(
    author,
    version,
    about = "Automatic reviewer assignment for GitHub pull requests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve reviewers for a pull request and request reviews
    Run(RunArgs),

    /// Lint a local config file
    Validate(ValidateArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    /// Repository in owner/name form
    #[arg(long)]
    pub repo: String,

    /// Pull request number
    #[arg(long)]
    pub pr: u64,

    /// Path to the config file, in the repository (or on disk with --local)
    #[arg(short, long, default_value = ".github/reviewers.yml")]
    pub config: String,

    /// Read the config from the local filesystem instead of the repository
    #[arg(long)]
    pub local: bool,

    /// Git ref to fetch the config from (defaults to the default branch)
    #[arg(long = "ref")]
    pub git_ref: Option<String>,

    /// Organization for team membership lookups (defaults to the repo owner)
    #[arg(long)]
    pub org: Option<String>,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Resolve reviewers without issuing any request
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct ValidateArgs {
    /// Path to config file
    #[arg(short, long, default_value = ".github/reviewers.yml")]
    pub config: PathBuf,
}

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod assign;
mod cli;
mod config;
mod error;
mod github;
mod resolver;
mod runner;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show debug logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("autorev=debug")
    } else {
        EnvFilter::new("autorev=info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Validate(args) => cli::validate::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}

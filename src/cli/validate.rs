use crate::cli::ValidateArgs;
use crate::config::Config;
use tracing::warn;

pub fn execute(args: ValidateArgs) -> anyhow::Result<()> {
    let config = Config::load(&args.config)?;
    let warnings = config.lint()?;

    for warning in &warnings {
        warn!("{}", warning);
    }

    let pattern_count = config.files.as_ref().map_or(0, |files| files.len());
    println!(
        "{} is valid: {} file patterns, {} groups, {} per-author rules, {} warnings",
        args.config.display(),
        pattern_count,
        config.reviewers.groups.len(),
        config.reviewers.per_author.len(),
        warnings.len()
    );

    Ok(())
}

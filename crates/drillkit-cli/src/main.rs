use std::io;

use anyhow::{Context, Result};
use drillkit_cli::cli::{self, LOG_ENV, Settings};

fn main() -> Result<()> {
    let settings = Settings::from_matches(&cli::command().get_matches());

    env_logger::Builder::default()
        .filter_level(settings.log_filter())
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, settings.log_filter().as_str()))
        .init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let stderr = io::stderr().lock();

    let _streams = drillkit_cli::run(settings.exercise, settings.options, stdin, stdout, stderr)
        .with_context(|| format!("{} exercise failed", settings.exercise.name()))?;
    Ok(())
}
